//! Edge-triggered input tracking.
//!
//! Backends report raw "is down" transitions; once per frame
//! [`Input::sample`] diffs the raw state against the previous frame and
//! derives [`EdgeState`] for every key and pointer button.

use crate::geom::Point;
use crate::messages::Event;

/// Number of key channels.
pub const KEY_COUNT: usize = 332;
/// Number of pointer-button channels.
pub const BUTTON_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// EdgeState
// ---------------------------------------------------------------------------

/// Derived state of one input channel for the current frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeState {
    /// Went down this frame.
    pub pressed: bool,
    /// Went up this frame.
    pub released: bool,
    /// Is down, including the frame it went down.
    pub hold: bool,
}

// ---------------------------------------------------------------------------
// KeyCode
// ---------------------------------------------------------------------------

/// A key channel in `0..KEY_COUNT`.
///
/// Codes below 128 are ASCII, with letters in lowercase. Named keys that
/// have no ASCII code sit from 128 upward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const DELETE: Self = Self(127);

    pub const UP: Self = Self(128);
    pub const DOWN: Self = Self(129);
    pub const LEFT: Self = Self(130);
    pub const RIGHT: Self = Self(131);
    pub const HOME: Self = Self(132);
    pub const END: Self = Self(133);
    pub const PAGE_UP: Self = Self(134);
    pub const PAGE_DOWN: Self = Self(135);
    pub const INSERT: Self = Self(136);

    pub const LEFT_SHIFT: Self = Self(140);
    pub const RIGHT_SHIFT: Self = Self(141);
    pub const LEFT_CTRL: Self = Self(142);
    pub const RIGHT_CTRL: Self = Self(143);
    pub const LEFT_ALT: Self = Self(144);
    pub const RIGHT_ALT: Self = Self(145);

    /// `F1`; `F2..=F12` follow consecutively.
    pub const F1: Self = Self(150);

    /// Function key `n` (1-based). Out-of-range `n` is clamped to `1..=12`.
    pub const fn function(n: u16) -> Self {
        let n = if n < 1 { 1 } else if n > 12 { 12 } else { n };
        Self(Self::F1.0 + n - 1)
    }

    /// Key code of an ASCII character, folding letters to lowercase.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii()
            .then(|| Self(c.to_ascii_lowercase() as u16))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// PointerButton
// ---------------------------------------------------------------------------

/// A pointer (mouse) button channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Extra1,
    Extra2,
}

impl PointerButton {
    pub const ALL: [Self; BUTTON_COUNT] = [
        Self::Left,
        Self::Right,
        Self::Middle,
        Self::Extra1,
        Self::Extra2,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct Channels<const N: usize> {
    raw: [bool; N],
    prev: [bool; N],
    state: [EdgeState; N],
}

impl<const N: usize> Channels<N> {
    fn new() -> Self {
        Self {
            raw: [false; N],
            prev: [false; N],
            state: [EdgeState::default(); N],
        }
    }

    /// One edge-detection pass. With `suppress_repeat`, a down transition
    /// on a channel that is already held does not report `pressed`.
    fn sample(&mut self, suppress_repeat: bool) {
        for i in 0..N {
            let st = &mut self.state[i];
            st.pressed = false;
            st.released = false;
            if self.raw[i] != self.prev[i] {
                if self.raw[i] {
                    st.pressed = !(suppress_repeat && st.hold);
                    st.hold = true;
                } else {
                    st.released = true;
                    st.hold = false;
                }
            }
            self.prev[i] = self.raw[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw samples plus derived edge state for all keys and pointer buttons,
/// and the pointer's cell position.
#[derive(Clone, Debug)]
pub struct Input {
    keys: Channels<KEY_COUNT>,
    buttons: Channels<BUTTON_COUNT>,
    pointer: Point,
}

impl Input {
    pub fn new() -> Self {
        Self {
            keys: Channels::new(),
            buttons: Channels::new(),
            pointer: Point::ZERO,
        }
    }

    /// Record the raw state of a key. Codes outside the channel range are
    /// ignored.
    pub fn set_key(&mut self, key: KeyCode, down: bool) {
        match self.keys.raw.get_mut(key.index()) {
            Some(raw) => *raw = down,
            None => log::warn!("ignoring key code {} outside 0..{KEY_COUNT}", key.0),
        }
    }

    /// Record the raw state of a pointer button.
    pub fn set_button(&mut self, button: PointerButton, down: bool) {
        self.buttons.raw[button.index()] = down;
    }

    /// Record the pointer position from surface pixels. The cell position
    /// is not clamped to the grid.
    pub fn set_pointer_pixels(&mut self, x: i32, y: i32, cell_width: i32, cell_height: i32) {
        self.pointer = Point::new(x / cell_width.max(1), y / cell_height.max(1));
    }

    /// Fold one raw event into the raw state. Returns `true` for
    /// [`Event::Quit`], which the tracker itself does not consume.
    pub fn apply(&mut self, event: &Event, cell_width: i32, cell_height: i32) -> bool {
        match *event {
            Event::Quit => return true,
            Event::KeyDown(k) => self.set_key(k, true),
            Event::KeyUp(k) => self.set_key(k, false),
            Event::PointerMove { x, y } => self.set_pointer_pixels(x, y, cell_width, cell_height),
            Event::PointerDown(b) => self.set_button(b, true),
            Event::PointerUp(b) => self.set_button(b, false),
        }
        false
    }

    /// Run edge detection over every channel. Keys suppress repeated
    /// presses while held; pointer buttons report every down transition.
    pub fn sample(&mut self) {
        self.keys.sample(true);
        self.buttons.sample(false);
    }

    /// Edge state of `key`; the default (all false) for unknown codes.
    pub fn key(&self, key: KeyCode) -> EdgeState {
        self.keys.state.get(key.index()).copied().unwrap_or_default()
    }

    pub fn button(&self, button: PointerButton) -> EdgeState {
        self.buttons.state[button.index()]
    }

    /// Pointer position in cells.
    #[inline]
    pub fn pointer(&self) -> Point {
        self.pointer
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace<F: FnMut(&mut Input, bool), G: Fn(&Input) -> EdgeState>(
        raw: &[bool],
        mut set: F,
        get: G,
    ) -> Vec<EdgeState> {
        let mut input = Input::new();
        raw.iter()
            .map(|&down| {
                set(&mut input, down);
                input.sample();
                get(&input)
            })
            .collect()
    }

    #[test]
    fn key_press_hold_release_sequence() {
        let a = KeyCode::from_char('a').unwrap();
        let states = trace(
            &[false, true, true, false],
            |i, d| i.set_key(a, d),
            |i| i.key(a),
        );
        let pressed: Vec<_> = states.iter().map(|s| s.pressed).collect();
        let hold: Vec<_> = states.iter().map(|s| s.hold).collect();
        let released: Vec<_> = states.iter().map(|s| s.released).collect();
        assert_eq!(pressed, [false, true, false, false]);
        assert_eq!(hold, [false, true, true, false]);
        assert_eq!(released, [false, false, false, true]);
    }

    #[test]
    fn pressed_and_released_last_one_cycle() {
        let mut input = Input::new();
        input.set_key(KeyCode::SPACE, true);
        input.sample();
        assert!(input.key(KeyCode::SPACE).pressed);
        input.sample();
        let st = input.key(KeyCode::SPACE);
        assert!(!st.pressed);
        assert!(st.hold);
        input.set_key(KeyCode::SPACE, false);
        input.sample();
        assert!(input.key(KeyCode::SPACE).released);
        input.sample();
        assert_eq!(input.key(KeyCode::SPACE), EdgeState::default());
    }

    #[test]
    fn key_repeat_is_suppressed_while_held() {
        // A second down edge while still held must not fire.
        let mut input = Input::new();
        input.set_key(KeyCode::ENTER, true);
        input.sample();
        assert!(input.key(KeyCode::ENTER).pressed);

        // Lost key-up: prev drops without a release pass.
        input.keys.prev[KeyCode::ENTER.index()] = false;
        input.sample();
        let st = input.key(KeyCode::ENTER);
        assert!(!st.pressed);
        assert!(st.hold);
    }

    #[test]
    fn button_press_is_not_suppressed() {
        let mut input = Input::new();
        input.set_button(PointerButton::Left, true);
        input.sample();
        assert!(input.button(PointerButton::Left).pressed);

        input.buttons.prev[PointerButton::Left.index()] = false;
        input.sample();
        let st = input.button(PointerButton::Left);
        assert!(st.pressed);
        assert!(st.hold);
    }

    #[test]
    fn buttons_are_independent() {
        let mut input = Input::new();
        input.set_button(PointerButton::Extra2, true);
        input.sample();
        for b in PointerButton::ALL {
            assert_eq!(input.button(b).hold, b == PointerButton::Extra2);
        }
    }

    #[test]
    fn out_of_range_key_is_ignored() {
        let mut input = Input::new();
        input.set_key(KeyCode(400), true);
        input.sample();
        assert_eq!(input.key(KeyCode(400)), EdgeState::default());
    }

    #[test]
    fn pointer_position_is_unclamped_cells() {
        let mut input = Input::new();
        input.apply(&Event::PointerMove { x: 45, y: 61 }, 20, 20);
        assert_eq!(input.pointer(), Point::new(2, 3));
        input.apply(&Event::PointerMove { x: 5000, y: 0 }, 20, 20);
        assert_eq!(input.pointer(), Point::new(250, 0));
    }

    #[test]
    fn apply_routes_events() {
        let mut input = Input::new();
        assert!(!input.apply(&Event::KeyDown(KeyCode::UP), 1, 1));
        assert!(!input.apply(&Event::PointerDown(PointerButton::Right), 1, 1));
        assert!(input.apply(&Event::Quit, 1, 1));
        input.sample();
        assert!(input.key(KeyCode::UP).pressed);
        assert!(input.button(PointerButton::Right).pressed);
    }

    #[test]
    fn key_code_helpers() {
        assert_eq!(KeyCode::from_char('Q'), Some(KeyCode(b'q' as u16)));
        assert_eq!(KeyCode::from_char('é'), None);
        assert_eq!(KeyCode::function(12), KeyCode(161));
        assert!(KeyCode::function(12).index() < KEY_COUNT);
    }
}
