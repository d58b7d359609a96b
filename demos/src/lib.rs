//! Demo games for rcengine.
//!
//! - [`Plasma`]: an animated colour field behind a line of text.
//! - [`Paint`]: mouse-driven line drawing with keyboard shortcuts.

pub mod paint;
pub mod plasma;

pub use paint::Paint;
pub use plasma::Plasma;

use tracing_subscriber::EnvFilter;

/// Route `log` records through a `tracing` formatter filtered by
/// `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
