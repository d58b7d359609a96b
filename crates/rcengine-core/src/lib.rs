//! **rcengine-core**: character-grid console engine (core types).
//!
//! This crate provides the backend-independent half of *rcengine*: colors
//! with "over" compositing, tileset geometry, a fixed-size grid of glyph
//! cells with draw/write/fill/line operations, the edge-triggered input
//! tracker, and the fixed-update frame driver that ties them together.
//!
//! Windowing, tileset decoding and audio live behind the [`Backend`] and
//! [`Blitter`] traits, implemented by a graphical backend crate.

pub mod app;
pub mod cell;
pub mod color;
pub mod config;
pub mod console;
pub mod diag;
pub mod error;
pub mod geom;
pub mod input;
pub mod line;
pub mod messages;
pub mod tileset;

pub use app::{Backend, Clock, Context, DriverState, FrameDriver, Game, MonotonicClock, Status};
pub use cell::Cell;
pub use color::Color;
pub use config::{AudioSpec, EngineConfig};
pub use console::Console;
pub use error::EngineError;
pub use geom::{PixelRect, Point, Range};
pub use input::{EdgeState, Input, KeyCode, PointerButton};
pub use line::Line;
pub use messages::Event;
pub use tileset::{Blitter, TilesetLayout};
