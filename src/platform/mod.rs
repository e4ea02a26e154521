//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges winit (OS-level events) with the logic thread via a bounded
// crossbeam channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  PointerInterpreter  │
//  │   ├─ logical coordinates │    │   ↓                  │
//  │   └─ tracks cursor       │    │  GameController      │
//  │   ↓                      │    │   ↓                  │
//  │  InputBuffer             │    │  RenderSurface       │
//  │   ├─ discrete: Vec<>     │    └──────────────────────┘
//  │   └─ continuous: latest  │               ↑
//  │   ↓                      │               │
//  │  about_to_wait (flush)   │               │
//  │   ↓                      │               │
//  │  Channel ────────────────┼───────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// The buffer is flushed once per event-loop wake-up, after winit has
// delivered everything pending. Empty buffers are not sent. If the logic
// thread is gone the platform logs and keeps running so the window can
// still be closed.
//
//=========================================================================

//=== Module Declarations =================================================

mod input_buffer;
mod input_processor;

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use crate::core::layout::Layout;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread (winit requirement on macOS/iOS). The window
/// is created lazily in `resumed()`.
pub(crate) struct Platform {
    window: Option<Window>,
    title: String,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the logic thread.
    ///
    /// A disconnected channel drops the events with a warning.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(Layout::LOGICAL_WIDTH, Layout::LOGICAL_HEIGHT))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.input_processor.set_scale_factor(window.scale_factor());
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed: {}", scale_factor);
                self.input_processor.set_scale_factor(*scale_factor);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_cursor_moved(*position);
                self.buffer.push(event);
            }

            WindowEvent::CursorLeft { .. } => {
                let event = self.input_processor.process_cursor_left();
                self.buffer.push(event);
            }

            WindowEvent::Focused(focused) => {
                if let Some(event) = self.input_processor.process_focus(*focused) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Key event ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            _ => {}
        }
    }

    /// Flush boundary: winit has delivered every pending event.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
