//! Raw input events delivered by a [`Backend`](crate::Backend).

use crate::input::{KeyCode, PointerButton};

/// A raw event from the event source, before edge detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The window was asked to close.
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// Pointer moved; position in surface pixels.
    PointerMove { x: i32, y: i32 },
    PointerDown(PointerButton),
    PointerUp(PointerButton),
}
