//! Paint demo entry point. An optional first argument overrides the
//! tileset path.

use std::path::PathBuf;

use rcengine_core::{EngineConfig, FrameDriver};
use rcengine_demos::{Paint, init_logging};
use rcengine_winit::WinitDriver;

fn main() {
    init_logging();

    let mut config = EngineConfig {
        title: "Paint".into(),
        cols: 60,
        rows: 40,
        cell_width: 16,
        cell_height: 16,
        ..Default::default()
    };
    if let Some(path) = std::env::args_os().nth(1) {
        config.tileset_path = PathBuf::from(path);
    }

    let result = FrameDriver::new(config, Paint::new())
        .and_then(|engine| WinitDriver::new(engine).run());

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
