//=========================================================================
// Core Systems
//=========================================================================
//
// Game state and the logic thread that drives it.
//
// Architecture:
// ```text
//   PlatformEvent ──> EventCollector ──> PointerInterpreter ──> UiCommand
//                                                                  │
//                                     RenderSurface <── GameController
// ```
//
// The orchestrator owns the controller outright; no game state is shared
// across threads. It blocks on the platform channel and handles input in
// arrival order, one event at a time.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod cards;
pub mod config;
pub mod controller;
pub mod drag;
pub mod games;
pub mod input;
pub mod layout;
pub mod message_bus;
pub(crate) mod platform_bridge;
pub mod router;
pub mod surface;

//=== Public API ==========================================================

pub use platform_bridge::PlatformError;

//=== External Dependencies ===============================================

use std::io;
use std::thread;

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use controller::{GameController, UiCommand};
use input::{InputEvent, PointerInterpreter};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Logic-thread owner of the controller and input interpretation.
pub(crate) struct CoreSystemsOrchestrator {
    controller: GameController,
    interpreter: PointerInterpreter,
    collector: EventCollector,
    commands: Vec<UiCommand>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        controller: GameController,
        interpreter: PointerInterpreter,
        receiver: Receiver<PlatformEvent>,
    ) -> Self {
        Self {
            controller,
            interpreter,
            collector: EventCollector::new(receiver),
            commands: Vec::with_capacity(8),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Spawns the logic thread.
    pub(crate) fn spawn_core_thread(self) -> io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("logic".into())
            .spawn(move || {
                let mut orchestrator = self;
                orchestrator.run();
            })
    }

    /// Presents the initial state, then handles input until shutdown.
    pub(crate) fn run(&mut self) {
        self.controller.present();

        while self.collector.collect() == TickControl::Continue {
            for batch in self.collector.take_batches() {
                for event in batch {
                    self.process(event);
                }
            }
        }

        info!("Logic thread exiting");
    }

    /// Interprets one event and applies the resulting commands in order.
    fn process(&mut self, event: InputEvent) {
        self.commands.clear();
        self.interpreter
            .interpret(event, &self.controller, &mut self.commands);

        for command in self.commands.drain(..) {
            debug!("Handling {:?}", command);
            self.controller.handle(command);
        }
    }

    #[cfg(test)]
    pub(crate) fn controller(&self) -> &GameController {
        &self.controller
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
