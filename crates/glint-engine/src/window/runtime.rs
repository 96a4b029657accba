use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl};
use crate::device::{GpuInit, WgpuContext, WgpuSurface};
use crate::engine::{EngineOptions, FrameStats, GraphicsError, RenderEngine};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;
use crate::settings::{EngineHandle, RenderConfig};

use super::WindowScheduler;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, runs the engine on it until the window closes or the
    /// app asks to exit.
    ///
    /// Returns an error when the engine could not initialize on the window.
    pub fn run<A>(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        options: EngineOptions,
        initial: RenderConfig,
        app: A,
    ) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, options, initial, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.init_error {
            Some(e) => Err(e).context("render engine failed to start"),
            None => Ok(()),
        }
    }
}

type WindowEngine<'w> = RenderEngine<WgpuContext<'w>, WindowScheduler<'w>>;

#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    engine: WindowEngine<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    options: EngineOptions,
    initial: RenderConfig,
    app: A,

    entry: Option<WindowEntry>,
    handle: Option<EngineHandle>,
    init_error: Option<GraphicsError>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        options: EngineOptions,
        initial: RenderConfig,
        app: A,
    ) -> Self {
        Self {
            config,
            gpu_init,
            options,
            initial,
            app,
            entry: None,
            handle: None,
            init_error: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_transparent(true);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let options = self.options.clone();
        let initial = self.initial.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            window,
            engine_builder: |w| {
                RenderEngine::initialize(
                    WgpuSurface::new(w, gpu_init),
                    WindowScheduler::new(w),
                    initial,
                    options,
                )
            },
        }
        .try_build();

        match entry {
            Ok(entry) => {
                let handle = entry.borrow_engine().handle();
                self.app.on_start(&handle);
                self.handle = Some(handle);
                self.entry = Some(entry);
                Ok(())
            }
            Err(e) => {
                self.init_error = Some(e.clone());
                Err(e.into())
            }
        }
    }

    fn destroy_window_entry(&mut self) {
        // Dropping the engine tears it down before the window goes away.
        self.entry = None;
        self.handle = None;
    }

    fn redraw(&mut self) -> Option<FrameStats> {
        let entry = self.entry.as_mut()?;
        entry.with_engine_mut(|engine| {
            let due = engine.scheduler_mut().take_due()?;
            engine.run_frame(due)
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to start render engine: {e:#}");
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Frames are paced by the engine's own redraw requests.
        event_loop.set_control_flow(ControlFlow::Wait);
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

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let input = entry.with_input_state_mut(|state| {
            let ev = translate_window_event(state, &event)?;
            state.apply_event(&ev);
            Some(ev)
        });

        if let (Some(ev), Some(handle)) = (input, self.handle.as_ref()) {
            if self.app.on_input(&ev, handle) == AppControl::Exit {
                log::info!("exit requested by app");
                self.destroy_window_entry();
                self.request_exit(event_loop);
                return;
            }
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.destroy_window_entry();
                self.request_exit(event_loop);
            }

            // The engine picks up the new display size at the start of its next frame.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                log::trace!("window resized");
            }

            WindowEvent::RedrawRequested => {
                let Some(stats) = self.redraw() else {
                    return;
                };

                let running = self
                    .entry
                    .as_ref()
                    .is_some_and(|e| e.borrow_engine().is_running());

                if self.app.on_frame(&stats) == AppControl::Exit || !running {
                    self.destroy_window_entry();
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
