//! Drives the demo games through the frame driver without a window.

use std::collections::VecDeque;
use std::time::Duration;

use rcengine_core::{
    Backend, Clock, Color, Console, DriverState, EngineConfig, EngineError, Event, FrameDriver,
    KeyCode, Point, PointerButton, Status, TilesetLayout,
};
use rcengine_demos::{Paint, Plasma};

struct Ticks {
    now: Duration,
    step: Duration,
}

impl Clock for Ticks {
    fn now(&mut self) -> Duration {
        self.now += self.step;
        self.now
    }
}

#[derive(Default)]
struct Headless {
    events: VecDeque<Event>,
    titles: Vec<String>,
    presents: usize,
    closed: bool,
}

impl Backend for Headless {
    fn tileset(&self) -> TilesetLayout {
        TilesetLayout::standard(8, 8)
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn present(&mut self, _console: &Console) -> Result<(), EngineError> {
        self.presents += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_owned());
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

fn config(title: &str, cols: i32, rows: i32) -> EngineConfig {
    EngineConfig {
        title: title.into(),
        cols,
        rows,
        cell_width: 10,
        cell_height: 10,
        ..Default::default()
    }
}

fn ticks() -> Ticks {
    Ticks {
        now: Duration::ZERO,
        step: Duration::from_millis(16),
    }
}

#[test]
fn plasma_paints_background_and_text() {
    let mut engine = FrameDriver::with_clock(config("Plasma", 4, 3), Plasma::new(), ticks()).unwrap();
    let mut backend = Headless::default();

    assert_eq!(engine.step(&mut backend).unwrap(), Status::Continue);
    assert_eq!(engine.step(&mut backend).unwrap(), Status::Continue);

    assert!((engine.game().phase() - 1.92).abs() < 1e-9);
    let con = engine.console();
    assert_eq!(con.glyph(Point::new(0, 0)), b'h');
    assert_eq!(con.glyph(Point::new(3, 0)), b'l');
    assert_eq!(con.glyph(Point::new(0, 1)), b' ');
    assert_eq!(con.back_color(Point::new(0, 0)), Color::rgb(3, 252, 124));
    assert_eq!(
        con.back_color(Point::new(1, 0)),
        engine.game().color_at(1, 0, 4, 3)
    );
    assert_eq!(con.fore_color(Point::new(2, 2)), Color::WHITE);
    assert_eq!(backend.titles, vec!["Plasma - FPS: 62.500000".to_string()]);
}

#[test]
fn plasma_stops_on_quit() {
    let mut engine = FrameDriver::with_clock(config("Plasma", 4, 3), Plasma::new(), ticks()).unwrap();
    let mut backend = Headless::default();
    engine.step(&mut backend).unwrap();
    backend.events.push_back(Event::Quit);

    assert_eq!(engine.step(&mut backend).unwrap(), Status::Finished);
    assert_eq!(engine.state(), DriverState::Stopped);
    assert_eq!(backend.presents, 1);
    assert!(backend.closed);
}

#[test]
fn paint_drag_commits_a_stroke() {
    let mut engine = FrameDriver::with_clock(config("Paint", 20, 10), Paint::new(), ticks()).unwrap();
    let mut backend = Headless::default();
    engine.step(&mut backend).unwrap();

    backend.events.extend([
        Event::PointerMove { x: 25, y: 35 },
        Event::PointerDown(PointerButton::Left),
    ]);
    engine.step(&mut backend).unwrap();
    assert!(engine.game().strokes().is_empty());
    // Preview line is a single cell under the pointer.
    assert_eq!(engine.console().glyph(Point::new(2, 3)), b'+');

    backend.events.extend([
        Event::PointerMove { x: 55, y: 35 },
        Event::PointerUp(PointerButton::Left),
    ]);
    engine.step(&mut backend).unwrap();

    let strokes = engine.game().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!((strokes[0].from, strokes[0].to), (Point::new(2, 3), Point::new(5, 3)));

    let con = engine.console();
    for x in 2..=5 {
        assert_eq!(con.glyph(Point::new(x, 3)), b'#');
    }
    assert_eq!(con.fore_color(Point::new(3, 3)), strokes[0].color);
    assert_eq!(con.glyph(Point::new(6, 3)), b'.');
    assert_eq!(con.glyph(Point::new(0, 9)), b'1');
}

#[test]
fn paint_tab_cycles_brush_and_escape_quits() {
    let mut engine = FrameDriver::with_clock(config("Paint", 20, 10), Paint::new(), ticks()).unwrap();
    let mut backend = Headless::default();
    engine.step(&mut backend).unwrap();

    let first = engine.game().brush();
    backend.events.push_back(Event::KeyDown(KeyCode::TAB));
    engine.step(&mut backend).unwrap();
    assert_ne!(engine.game().brush(), first);

    // Held key does not cycle again.
    engine.step(&mut backend).unwrap();
    let second = engine.game().brush();
    engine.step(&mut backend).unwrap();
    assert_eq!(engine.game().brush(), second);

    backend.events.push_back(Event::KeyDown(KeyCode::ESCAPE));
    assert_eq!(engine.step(&mut backend).unwrap(), Status::Finished);
    assert!(backend.closed);
}

#[test]
fn paint_right_click_stamps_and_c_clears() {
    let mut engine = FrameDriver::with_clock(config("Paint", 20, 10), Paint::new(), ticks()).unwrap();
    let mut backend = Headless::default();
    engine.step(&mut backend).unwrap();

    backend.events.extend([
        Event::PointerMove { x: 0, y: 0 },
        Event::PointerDown(PointerButton::Right),
    ]);
    engine.step(&mut backend).unwrap();
    assert_eq!(engine.game().stamps().len(), 1);
    // The 3×3 stamp is clipped at the corner.
    assert_eq!(engine.console().glyph(Point::new(1, 1)), 219);
    assert_eq!(engine.console().glyph(Point::new(2, 2)), b'.');

    backend.events.push_back(Event::KeyDown(KeyCode(b'c' as u16)));
    engine.step(&mut backend).unwrap();
    assert!(engine.game().stamps().is_empty());
}
