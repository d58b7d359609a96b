//! Translates winit input events into rcengine [`Event`] values.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode as WKeyCode, PhysicalKey};

use rcengine_core::{Event, KeyCode, PointerButton};

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Event> {
    translate_key(event.state, event.physical_key)
}

/// Physical keys are used rather than logical ones so that a key released
/// under different modifiers still matches the code it was pressed with.
pub(crate) fn translate_key(state: ElementState, physical: PhysicalKey) -> Option<Event> {
    let PhysicalKey::Code(code) = physical else {
        return None;
    };
    let key = key_code(code)?;
    Some(match state {
        ElementState::Pressed => Event::KeyDown(key),
        ElementState::Released => Event::KeyUp(key),
    })
}

fn key_code(code: WKeyCode) -> Option<KeyCode> {
    let ascii = |c: char| KeyCode::from_char(c);
    match code {
        WKeyCode::KeyA => ascii('a'),
        WKeyCode::KeyB => ascii('b'),
        WKeyCode::KeyC => ascii('c'),
        WKeyCode::KeyD => ascii('d'),
        WKeyCode::KeyE => ascii('e'),
        WKeyCode::KeyF => ascii('f'),
        WKeyCode::KeyG => ascii('g'),
        WKeyCode::KeyH => ascii('h'),
        WKeyCode::KeyI => ascii('i'),
        WKeyCode::KeyJ => ascii('j'),
        WKeyCode::KeyK => ascii('k'),
        WKeyCode::KeyL => ascii('l'),
        WKeyCode::KeyM => ascii('m'),
        WKeyCode::KeyN => ascii('n'),
        WKeyCode::KeyO => ascii('o'),
        WKeyCode::KeyP => ascii('p'),
        WKeyCode::KeyQ => ascii('q'),
        WKeyCode::KeyR => ascii('r'),
        WKeyCode::KeyS => ascii('s'),
        WKeyCode::KeyT => ascii('t'),
        WKeyCode::KeyU => ascii('u'),
        WKeyCode::KeyV => ascii('v'),
        WKeyCode::KeyW => ascii('w'),
        WKeyCode::KeyX => ascii('x'),
        WKeyCode::KeyY => ascii('y'),
        WKeyCode::KeyZ => ascii('z'),
        WKeyCode::Digit0 | WKeyCode::Numpad0 => ascii('0'),
        WKeyCode::Digit1 | WKeyCode::Numpad1 => ascii('1'),
        WKeyCode::Digit2 | WKeyCode::Numpad2 => ascii('2'),
        WKeyCode::Digit3 | WKeyCode::Numpad3 => ascii('3'),
        WKeyCode::Digit4 | WKeyCode::Numpad4 => ascii('4'),
        WKeyCode::Digit5 | WKeyCode::Numpad5 => ascii('5'),
        WKeyCode::Digit6 | WKeyCode::Numpad6 => ascii('6'),
        WKeyCode::Digit7 | WKeyCode::Numpad7 => ascii('7'),
        WKeyCode::Digit8 | WKeyCode::Numpad8 => ascii('8'),
        WKeyCode::Digit9 | WKeyCode::Numpad9 => ascii('9'),
        WKeyCode::Minus | WKeyCode::NumpadSubtract => ascii('-'),
        WKeyCode::Equal => ascii('='),
        WKeyCode::NumpadAdd => ascii('+'),
        WKeyCode::NumpadMultiply => ascii('*'),
        WKeyCode::NumpadDivide | WKeyCode::Slash => ascii('/'),
        WKeyCode::NumpadDecimal | WKeyCode::Period => ascii('.'),
        WKeyCode::BracketLeft => ascii('['),
        WKeyCode::BracketRight => ascii(']'),
        WKeyCode::Backslash => ascii('\\'),
        WKeyCode::Semicolon => ascii(';'),
        WKeyCode::Quote => ascii('\''),
        WKeyCode::Comma => ascii(','),
        WKeyCode::Backquote => ascii('`'),

        WKeyCode::Space => Some(KeyCode::SPACE),
        WKeyCode::Enter | WKeyCode::NumpadEnter => Some(KeyCode::ENTER),
        WKeyCode::Escape => Some(KeyCode::ESCAPE),
        WKeyCode::Tab => Some(KeyCode::TAB),
        WKeyCode::Backspace => Some(KeyCode::BACKSPACE),
        WKeyCode::Delete => Some(KeyCode::DELETE),

        WKeyCode::ArrowUp => Some(KeyCode::UP),
        WKeyCode::ArrowDown => Some(KeyCode::DOWN),
        WKeyCode::ArrowLeft => Some(KeyCode::LEFT),
        WKeyCode::ArrowRight => Some(KeyCode::RIGHT),
        WKeyCode::Home => Some(KeyCode::HOME),
        WKeyCode::End => Some(KeyCode::END),
        WKeyCode::PageUp => Some(KeyCode::PAGE_UP),
        WKeyCode::PageDown => Some(KeyCode::PAGE_DOWN),
        WKeyCode::Insert => Some(KeyCode::INSERT),

        WKeyCode::ShiftLeft => Some(KeyCode::LEFT_SHIFT),
        WKeyCode::ShiftRight => Some(KeyCode::RIGHT_SHIFT),
        WKeyCode::ControlLeft => Some(KeyCode::LEFT_CTRL),
        WKeyCode::ControlRight => Some(KeyCode::RIGHT_CTRL),
        WKeyCode::AltLeft => Some(KeyCode::LEFT_ALT),
        WKeyCode::AltRight => Some(KeyCode::RIGHT_ALT),

        WKeyCode::F1 => Some(KeyCode::function(1)),
        WKeyCode::F2 => Some(KeyCode::function(2)),
        WKeyCode::F3 => Some(KeyCode::function(3)),
        WKeyCode::F4 => Some(KeyCode::function(4)),
        WKeyCode::F5 => Some(KeyCode::function(5)),
        WKeyCode::F6 => Some(KeyCode::function(6)),
        WKeyCode::F7 => Some(KeyCode::function(7)),
        WKeyCode::F8 => Some(KeyCode::function(8)),
        WKeyCode::F9 => Some(KeyCode::function(9)),
        WKeyCode::F10 => Some(KeyCode::function(10)),
        WKeyCode::F11 => Some(KeyCode::function(11)),
        WKeyCode::F12 => Some(KeyCode::function(12)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

pub(crate) fn translate_mouse_button(state: ElementState, button: MouseButton) -> Option<Event> {
    let button = match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Extra1,
        MouseButton::Forward => PointerButton::Extra2,
        MouseButton::Other(_) => return None,
    };
    Some(match state {
        ElementState::Pressed => Event::PointerDown(button),
        ElementState::Released => Event::PointerUp(button),
    })
}

/// Cursor position stays in pixels; the core divides by the cell size.
pub(crate) fn translate_cursor_moved(position: PhysicalPosition<f64>) -> Event {
    Event::PointerMove {
        x: position.x.floor() as i32,
        y: position.y.floor() as i32,
    }
}
