//! Engine error type.

use std::fmt;
use std::path::PathBuf;

/// Fatal engine failures. Everything here aborts setup or the loop; user
/// stop requests and out-of-range drawing are never errors.
#[derive(Debug)]
pub enum EngineError {
    /// The configuration cannot describe a usable console.
    InvalidConfig(String),
    /// The platform event loop could not be created or run.
    EventLoop(String),
    /// The window could not be created.
    Window(String),
    /// The presentation surface could not be created or resized.
    Surface(String),
    /// The tileset image could not be loaded.
    Tileset { path: PathBuf, reason: String },
    /// The audio device could not be opened.
    Audio(String),
    /// A frame could not be presented.
    Present(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            EngineError::EventLoop(msg) => write!(f, "event loop failed: {msg}"),
            EngineError::Window(msg) => write!(f, "failed to create window: {msg}"),
            EngineError::Surface(msg) => write!(f, "surface error: {msg}"),
            EngineError::Tileset { path, reason } => {
                write!(f, "failed to load tileset {}: {reason}", path.display())
            }
            EngineError::Audio(msg) => write!(f, "failed to open audio device: {msg}"),
            EngineError::Present(msg) => write!(f, "failed to present frame: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
