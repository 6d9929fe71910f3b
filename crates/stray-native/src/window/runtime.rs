use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId, WindowLevel};

use crate::config::RuntimeConfig;
use crate::device::{Canvas, FrameStatus};

/// Control directive derived from a window event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Close requests and Escape end the run loop; everything else keeps it going.
pub fn control_for(event: &WindowEvent) -> AppControl {
    match event {
        WindowEvent::CloseRequested => AppControl::Exit,
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    state: ElementState::Pressed,
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    ..
                },
            ..
        } => AppControl::Exit,
        _ => AppControl::Continue,
    }
}

/// Entry point for the run loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window described by `config` and blocks until it closes.
    pub fn run(config: RuntimeConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = RunState::new(config);
        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        log::debug!("presented {} frames", state.frames);

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    canvas: Canvas<'this>,
}

struct RunState {
    config: RuntimeConfig,
    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
    frames: u64,
}

impl RunState {
    fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            entry: None,
            failure: None,
            frames: 0,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let level = if self.config.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable)
            .with_window_level(level);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowEntryTryBuilder {
            window,
            canvas_builder: |w| pollster::block_on(Canvas::new(w)),
        }
        .try_build()
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.entry = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.close(event_loop);
    }
}

impl ApplicationHandler for RunState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(e) => self.fail(event_loop, e.context("failed to open the application window")),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if control_for(&event) == AppControl::Exit {
            log::info!("window closed");
            self.close(event_loop);
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                log::debug!("resized to {}x{}", size.width, size.height);
                entry.with_canvas_mut(|c| c.resize(size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("scale factor changed to {scale_factor}");
                let size = entry.with_window(|w| w.inner_size());
                entry.with_canvas_mut(|c| c.resize(size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let color = self.config.clear_color;
                entry.with_window(|w| w.pre_present_notify());
                match entry.with_canvas_mut(|c| c.clear(color)) {
                    FrameStatus::Presented => self.frames += 1,
                    FrameStatus::Reconfigured | FrameStatus::Skipped => {
                        entry.with_window(|w| w.request_redraw());
                    }
                    FrameStatus::Fatal => {
                        self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
                    }
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_exits() {
        assert_eq!(control_for(&WindowEvent::CloseRequested), AppControl::Exit);
    }

    #[test]
    fn other_events_continue() {
        assert_eq!(control_for(&WindowEvent::Focused(true)), AppControl::Continue);
        assert_eq!(control_for(&WindowEvent::RedrawRequested), AppControl::Continue);
        assert_eq!(control_for(&WindowEvent::Destroyed), AppControl::Continue);
    }
}
