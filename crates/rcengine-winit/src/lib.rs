//! Winit graphical backend for rcengine.
//!
//! Shows the console in a native window using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel presentation
//! - [`image`] to decode the 16×16 glyph sheet
//! - `rodio` (feature `audio`) to open the default output device
//!
//! # Usage
//!
//! ```rust,no_run
//! use rcengine_core::{Context, EngineConfig, FrameDriver, Game, Point};
//!
//! struct Hello;
//!
//! impl Game for Hello {
//!     fn start(&mut self, _ctx: &mut Context<'_>) -> bool {
//!         true
//!     }
//!     fn update(&mut self, ctx: &mut Context<'_>, _dt: f64) -> bool {
//!         ctx.console.print(Point::new(1, 1), "hello world");
//!         true
//!     }
//! }
//!
//! let engine = FrameDriver::new(EngineConfig::default(), Hello).unwrap();
//! rcengine_winit::WinitDriver::new(engine).run().unwrap();
//! ```

#[cfg(feature = "audio")]
mod audio;
mod input;
mod renderer;

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use rcengine_core::{
    Backend, Console, EngineConfig, EngineError, Event, FrameDriver, Game, Status, TilesetLayout,
};

use renderer::GridRenderer;
pub use renderer::Tileset;

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver for rcengine.
///
/// Owns the main-thread event loop and steps a [`FrameDriver`] once per
/// loop iteration until the game lets it stop.
pub struct WinitDriver<G: Game> {
    engine: FrameDriver<G>,
}

impl<G: Game> WinitDriver<G> {
    pub fn new(engine: FrameDriver<G>) -> Self {
        Self { engine }
    }

    /// Open the window and run until the engine stops.
    ///
    /// Setup failures (window, surface, tileset, audio) are returned
    /// without the game's `start` hook ever running.
    pub fn run(self) -> Result<(), EngineError> {
        let event_loop = EventLoop::new().map_err(|e| EngineError::EventLoop(e.to_string()))?;
        let mut app = WinitApp {
            engine: self.engine,
            backend: None,
            error: None,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| EngineError::EventLoop(e.to_string()))?;
        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp: ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp<G: Game> {
    engine: FrameDriver<G>,
    backend: Option<WinitBackend>,
    error: Option<EngineError>,
}

impl<G: Game> WinitApp<G> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        log::error!("{err}");
        self.error = Some(err);
        self.backend = None;
        event_loop.exit();
    }
}

impl<G: Game> ApplicationHandler for WinitApp<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.backend.is_some() || self.error.is_some() {
            return;
        }
        event_loop.set_control_flow(ControlFlow::Poll);
        match WinitBackend::create(event_loop, self.engine.config()) {
            Ok(backend) => self.backend = Some(backend),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        let translated = match event {
            WindowEvent::CloseRequested => Some(Event::Quit),
            WindowEvent::Resized(size) => {
                backend.resize_surface(size);
                None
            }
            WindowEvent::KeyboardInput { event, .. } => input::translate_keyboard(&event),
            WindowEvent::MouseInput { state, button, .. } => {
                input::translate_mouse_button(state, button)
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(input::translate_cursor_moved(position))
            }
            _ => None,
        };
        if let Some(ev) = translated {
            backend.pending.push_back(ev);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        match self.engine.step(backend) {
            Ok(Status::Continue) => {}
            Ok(Status::Finished) => {
                self.backend = None;
                event_loop.exit();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitBackend
// ---------------------------------------------------------------------------

struct WinitBackend {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: GridRenderer,
    surface_width: u32,
    surface_height: u32,
    pending: VecDeque<Event>,
    #[cfg(feature = "audio")]
    audio: Option<audio::AudioDevice>,
}

impl WinitBackend {
    fn create(event_loop: &ActiveEventLoop, config: &EngineConfig) -> Result<Self, EngineError> {
        let width = config.screen_width() as u32;
        let height = config.screen_height() as u32;

        let window_attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| EngineError::Window(e.to_string()))?,
        );
        window.focus_window();

        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| EngineError::Surface(e.to_string()))?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| EngineError::Surface(e.to_string()))?;
        resize(&mut surface, width, height)?;

        let tileset = Tileset::load(&config.tileset_path)?;
        let layout = tileset.layout();
        log::debug!(
            "tileset {} loaded, {}x{} px tiles",
            config.tileset_path.display(),
            layout.tile_width,
            layout.tile_height,
        );
        let renderer = GridRenderer::new(tileset, width as usize, height as usize);

        #[cfg(feature = "audio")]
        let audio = Some(audio::AudioDevice::open(&config.audio)?);

        Ok(Self {
            window,
            surface,
            renderer,
            surface_width: width,
            surface_height: height,
            pending: VecDeque::new(),
            #[cfg(feature = "audio")]
            audio,
        })
    }

    fn resize_surface(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        match resize(&mut self.surface, size.width, size.height) {
            Ok(()) => {
                self.surface_width = size.width;
                self.surface_height = size.height;
            }
            Err(e) => log::warn!("{e}"),
        }
    }
}

fn resize(
    surface: &mut softbuffer::Surface<Arc<Window>, Arc<Window>>,
    width: u32,
    height: u32,
) -> Result<(), EngineError> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Err(EngineError::Surface(format!("zero-sized surface {width}x{height}")));
    };
    surface
        .resize(w, h)
        .map_err(|e| EngineError::Surface(e.to_string()))
}

impl Backend for WinitBackend {
    fn tileset(&self) -> TilesetLayout {
        self.renderer.layout()
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    fn present(&mut self, console: &Console) -> Result<(), EngineError> {
        self.renderer.clear();
        console.render(&mut self.renderer);

        let mut buf = self
            .surface
            .buffer_mut()
            .map_err(|e| EngineError::Present(e.to_string()))?;
        self.renderer.blit_to_buffer(
            &mut buf,
            self.surface_width as usize,
            self.surface_height as usize,
        );
        buf.present()
            .map_err(|e| EngineError::Present(e.to_string()))
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn close(&mut self) {
        self.pending.clear();
        #[cfg(feature = "audio")]
        {
            self.audio = None;
        }
        self.window.set_visible(false);
        log::debug!("window closed");
    }
}
