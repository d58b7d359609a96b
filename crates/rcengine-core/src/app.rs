//! The fixed-update game loop: [`Game`] hooks, the [`Backend`] seam and the
//! [`FrameDriver`] state machine.
//!
//! Each iteration the driver measures delta time, drains pending raw events
//! from the backend, runs edge detection, clears the console, calls
//! [`Game::update`], presents the console and refreshes the FPS title.

use std::time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::console::Console;
use crate::error::EngineError;
use crate::geom::Point;
use crate::input::{EdgeState, Input, KeyCode, PointerButton};
use crate::messages::Event;
use crate::tileset::TilesetLayout;

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// User hooks driven by the [`FrameDriver`].
pub trait Game {
    /// Called once before the first frame. Returning `false` stops the
    /// engine without running any frame.
    fn start(&mut self, ctx: &mut Context<'_>) -> bool;

    /// Called once per frame with the elapsed time in seconds. Returning
    /// `false` requests a stop after this frame is presented.
    fn update(&mut self, ctx: &mut Context<'_>, delta_time: f64) -> bool;

    /// Called when a stop was requested. Returning `false` keeps the loop
    /// running; the next stop request asks again.
    fn destroy(&mut self) -> bool {
        true
    }
}

/// What a hook may touch: the console for drawing, the input tracker for
/// reading.
pub struct Context<'a> {
    pub console: &'a mut Console,
    pub input: &'a Input,
    config: &'a EngineConfig,
}

impl Context<'_> {
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    #[inline]
    pub fn key(&self, key: KeyCode) -> EdgeState {
        self.input.key(key)
    }

    #[inline]
    pub fn button(&self, button: PointerButton) -> EdgeState {
        self.input.button(button)
    }

    /// Pointer position in cells; may lie outside the grid.
    #[inline]
    pub fn pointer(&self) -> Point {
        self.input.pointer()
    }
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// Window, surface and event source used by the driver.
pub trait Backend {
    /// Geometry of the loaded tileset.
    fn tileset(&self) -> TilesetLayout;

    /// Next pending event, without blocking.
    fn poll_event(&mut self) -> Option<Event>;

    /// Composite `console` onto the surface and show it.
    fn present(&mut self, console: &Console) -> Result<(), EngineError>;

    fn set_title(&mut self, title: &str);

    /// Release every platform resource. Called once, when the driver stops.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// A monotonic time source.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&mut self) -> Duration;
}

/// [`Clock`] backed by [`Instant`].
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

// ---------------------------------------------------------------------------
// FrameDriver
// ---------------------------------------------------------------------------

/// Lifecycle of a [`FrameDriver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    NotStarted,
    Running,
    Stopped,
}

/// Outcome of one [`FrameDriver::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Call `step` again.
    Continue,
    /// The driver has stopped and the backend is closed.
    Finished,
}

/// Window title with the instantaneous frame rate appended.
///
/// A zero `delta_time` reads as `inf`.
pub fn fps_title(title: &str, delta_time: f64) -> String {
    format!("{title} - FPS: {:.6}", 1.0 / delta_time)
}

/// Owns the console, the input tracker and the game, and runs the loop.
pub struct FrameDriver<G: Game, C: Clock = MonotonicClock> {
    game: G,
    config: EngineConfig,
    console: Console,
    input: Input,
    clock: C,
    state: DriverState,
    last: Duration,
    delta_time: f64,
    stop_requested: bool,
}

impl<G: Game> FrameDriver<G> {
    /// Create a driver timed by the system's monotonic clock.
    pub fn new(config: EngineConfig, game: G) -> Result<Self, EngineError> {
        Self::with_clock(config, game, MonotonicClock::new())
    }
}

impl<G: Game, C: Clock> FrameDriver<G, C> {
    /// Create a driver with a custom time source.
    pub fn with_clock(config: EngineConfig, game: G, clock: C) -> Result<Self, EngineError> {
        config.validate()?;
        let console = Console::new(config.cols, config.rows, config.cell_width, config.cell_height);
        Ok(Self {
            game,
            config,
            console,
            input: Input::new(),
            clock,
            state: DriverState::NotStarted,
            last: Duration::ZERO,
            delta_time: 0.0,
            stop_requested: false,
        })
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn console(&self) -> &Console {
        &self.console
    }

    #[inline]
    pub fn input(&self) -> &Input {
        &self.input
    }

    #[inline]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Delta time of the most recent frame, in seconds.
    #[inline]
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Drive the loop until the game lets it stop.
    pub fn run<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), EngineError> {
        while self.step(backend)? == Status::Continue {}
        Ok(())
    }

    /// Advance by one transition: start the game, or run one frame and
    /// settle any stop request.
    pub fn step<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<Status, EngineError> {
        match self.state {
            DriverState::NotStarted => Ok(self.start(backend)),
            DriverState::Running => {
                if let Err(e) = self.frame(backend) {
                    log::error!("frame failed: {e}");
                    self.shutdown(backend);
                    return Err(e);
                }
                if !self.stop_requested {
                    return Ok(Status::Continue);
                }
                self.stop_requested = false;
                if self.game.destroy() {
                    self.shutdown(backend);
                    Ok(Status::Finished)
                } else {
                    log::info!("destroy hook deferred shutdown; resuming");
                    Ok(Status::Continue)
                }
            }
            DriverState::Stopped => Ok(Status::Finished),
        }
    }

    fn start<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Status {
        let layout = backend.tileset();
        log::debug!(
            "console {}x{} cells of {}x{} px, tiles {}x{} px",
            self.console.cols(),
            self.console.rows(),
            self.config.cell_width,
            self.config.cell_height,
            layout.tile_width,
            layout.tile_height,
        );
        self.console.set_layout(layout);

        let started = {
            let mut ctx = Context {
                console: &mut self.console,
                input: &self.input,
                config: &self.config,
            };
            self.game.start(&mut ctx)
        };
        if !started {
            log::info!("start hook failed; stopping");
            self.shutdown(backend);
            return Status::Finished;
        }

        log::info!("engine running");
        self.last = self.clock.now();
        self.state = DriverState::Running;
        Status::Continue
    }

    fn frame<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), EngineError> {
        let now = self.clock.now();
        self.delta_time = now.saturating_sub(self.last).as_micros() as f64 / 1_000_000.0;
        self.last = now;

        let (cell_width, cell_height) = self.console.cell_size();
        while let Some(event) = backend.poll_event() {
            if self.input.apply(&event, cell_width, cell_height) {
                log::info!("quit requested");
                self.stop_requested = true;
            }
        }
        self.input.sample();

        self.console.clear();
        let keep_going = {
            let mut ctx = Context {
                console: &mut self.console,
                input: &self.input,
                config: &self.config,
            };
            self.game.update(&mut ctx, self.delta_time)
        };
        if !keep_going {
            self.stop_requested = true;
        }

        backend.present(&self.console)?;
        backend.set_title(&fps_title(&self.config.title, self.delta_time));
        Ok(())
    }

    fn shutdown<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        backend.close();
        self.state = DriverState::Stopped;
        log::info!("engine stopped");
    }
}
