use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl, FrameCtx, InitCtx};
use crate::input::platform::winit::translate_key_event;
use crate::input::InputFrame;
use crate::time::{FrameClock, FrameTime};

use super::context::RenderWindow;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Request a swap interval of one frame.
    pub vsync: bool,
    /// Requested core-profile version (major, minor).
    pub gl_version: (u8, u8),
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tumble".to_string(),
            initial_size: LogicalSize::new(1940.0, 1080.0),
            vsync: true,
            gl_version: (4, 1),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, drives `app` until exit and returns the first
    /// fatal error (context creation or `App::init`), if any.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,

    window: Option<RenderWindow>,
    input_frame: InputFrame,
    clock: FrameClock,

    initialized: bool,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            window: None,
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            initialized: false,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.request_exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = RenderWindow::create(event_loop, &self.config)
            .context("failed to create GL window")?;

        {
            let mut ctx = InitCtx {
                gl: window.gl(),
                viewport: window.viewport(),
            };
            self.app.init(&mut ctx).context("application init failed")?;
        }
        self.initialized = true;

        // Startup work (shader compilation, uploads) must not count as frame time.
        self.clock.reset();
        window.window().request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(window) = self.window.as_ref() else {
            return Ok(());
        };

        let ft: FrameTime = self.clock.tick();
        let control = {
            let mut ctx = FrameCtx {
                gl: window.gl(),
                input: &self.input_frame,
                time: ft,
                viewport: window.viewport(),
            };
            self.app.on_frame(&mut ctx)
        };

        // Clear per-frame deltas after the frame is consumed.
        self.input_frame.clear();

        if control == AppControl::Exit {
            self.request_exit();
            return Ok(());
        }

        window.swap_buffers()
    }

    /// Releases application resources while the context is still current,
    /// then destroys the window. Runs at most once.
    fn teardown(&mut self) {
        if let Some(window) = self.window.take() {
            if self.initialized {
                self.app.shutdown(window.gl());
                self.initialized = false;
            }
            drop(window);
            log::info!("GL context destroyed");
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the scene animates every frame.
        if let Some(window) = &self.window {
            window.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(key_event) = translate_key_event(&event) {
            self.input_frame.push(key_event);
        }

        match &event {
            WindowEvent::CloseRequested => self.request_exit(),

            WindowEvent::Resized(new_size) => {
                if let Some(window) = &self.window {
                    window.resize(*new_size);
                    self.app.on_resize(window.gl(), window.viewport());
                    window.window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(e);
                }
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
