//! Plasma demo entry point.

use rcengine_core::{EngineConfig, FrameDriver};
use rcengine_demos::{Plasma, init_logging};
use rcengine_winit::WinitDriver;

fn main() {
    init_logging();

    let config = EngineConfig {
        title: "Plasma".into(),
        ..Default::default()
    };

    let result = FrameDriver::new(config, Plasma::new())
        .and_then(|engine| WinitDriver::new(engine).run());

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
