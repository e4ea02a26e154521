//=========================================================================
// Engine
//=========================================================================
//
// Entry point wiring the winit platform thread to the logic thread.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_config()           ├─ spawns logic thread
//         ├─ with_surface()          ├─ runs platform (main thread)
//         ├─ with_window_title()     └─ joins logic thread on exit
//         └─ with_channel_capacity()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::controller::GameController;
use crate::core::input::PointerInterpreter;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::surface::{LogSurface, RenderSurface};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineError =========================================================

/// Fatal runtime errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to spawn logic thread: {0}")]
    ThreadSpawn(#[from] io::Error),

    #[error("logic thread panicked")]
    LogicThreadPanicked,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Channel capacity**: 128 events
/// - **Window title**: `Revolutionerna`
/// - **Config**: [`GameConfig::default`]
/// - **Surface**: [`LogSurface`]
///
/// # Examples
///
/// ```no_run
/// use revolution_cards::core::config::GameConfig;
/// use revolution_cards::EngineBuilder;
///
/// let config = GameConfig::builder().with_deck_visible_cap(4).build()?;
///
/// EngineBuilder::new()
///     .with_window_title("Revolutions")
///     .with_channel_capacity(256)
///     .with_config(config)
///     .build()
///     .run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EngineBuilder {
    channel_capacity: usize,
    window_title: String,
    config: GameConfig,
    surface: Option<Box<dyn RenderSurface>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            channel_capacity: 128,
            window_title: "Revolutionerna".to_string(),
            config: GameConfig::default(),
            surface: None,
        }
    }

    /// Sets the channel capacity for platform → logic communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets where snapshots are presented. Default: [`LogSurface`].
    pub fn with_surface(mut self, surface: impl RenderSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Builds the engine, dealing both games.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (channel: {}, title: {:?})",
            self.channel_capacity, self.window_title
        );

        let surface = self
            .surface
            .unwrap_or_else(|| Box::new(LogSurface::new()));

        Engine {
            controller: GameController::new(&self.config, surface),
            channel_capacity: self.channel_capacity,
            window_title: self.window_title,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread)
///   │     └─► PointerInterpreter → GameController → RenderSurface
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input
/// ```
pub struct Engine {
    controller: GameController,
    channel_capacity: usize,
    window_title: String,
}

impl Engine {
    /// Runs until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded platform → logic channel
    /// 2. Spawns the logic thread
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: waits for the logic thread
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the logic thread cannot be spawned or
    /// panics, or if the platform fails.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime");

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the logic thread ------------------------------------
        let orchestrator =
            CoreSystemsOrchestrator::new(self.controller, PointerInterpreter::default(), rx);
        let core_handle = orchestrator.spawn_core_thread()?;
        info!("Logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window_title);
        let platform_result = platform.run();
        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for logic thread ----------------------------
        let join_result = core_handle.join();
        if join_result.is_err() {
            error!("Logic thread panicked");
        }

        platform_result?;
        join_result.map_err(|_| EngineError::LogicThreadPanicked)?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::games::GameSignal;
    use crate::core::router::View;
    use crate::core::surface::Snapshot;

    struct NullSurface;

    impl RenderSurface for NullSurface {
        fn present(&mut self, _snapshot: &Snapshot, _signals: &[GameSignal]) {}
    }

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.window_title, "Revolutionerna");
        assert!(builder.surface.is_none());
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let config = GameConfig::builder().with_shuffle_seed(1).build().unwrap();
        let engine = EngineBuilder::new()
            .with_window_title("Test")
            .with_channel_capacity(32)
            .with_config(config)
            .with_surface(NullSurface)
            .build();

        assert_eq!(engine.window_title, "Test");
        assert_eq!(engine.channel_capacity, 32);
        assert_eq!(engine.controller.active_view(), Some(View::Home));
    }

    #[test]
    fn build_applies_config() {
        let config = GameConfig::builder().with_deck_visible_cap(5).build().unwrap();
        let engine = EngineBuilder::new().with_config(config).build();

        assert_eq!(engine.controller.cause().bank().len(), 5);
    }
}
