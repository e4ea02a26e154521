//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiver of platform events with bounded draining and
// shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect() → input_batches → TickControl
//
// `collect()` blocks until at least one event arrives, then drains what
// else is queued (bounded to keep the logic thread responsive).
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Logic loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events into ordered input batches.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    const MAX_EVENTS_PER_COLLECT: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Waits for platform events and gathers them into batches.
    ///
    /// Returns `Exit` on `WindowClosed` or when the platform side hung up.
    pub(crate) fn collect(&mut self) -> TickControl {
        self.input_batches.clear();

        match self.receiver.recv() {
            Ok(event) => {
                if self.handle_event(event) == TickControl::Exit {
                    return TickControl::Exit;
                }
            }
            Err(_) => return TickControl::Exit,
        }

        let mut drained = 1;
        while drained < Self::MAX_EVENTS_PER_COLLECT {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_COLLECT {
            warn!("Event queue backlog: drained {} events in one pass", drained);
        }

        TickControl::Continue
    }

    /// Input batches gathered by the last `collect()`.
    #[cfg(test)]
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// Takes ownership of collected input batches, leaving an empty vec.
    pub(crate) fn take_batches(&mut self) -> Vec<Vec<InputEvent>> {
        std::mem::take(&mut self.input_batches)
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs { discrete, continuous } => {
                if !discrete.is_empty() {
                    self.input_batches.push(discrete);
                }
                if !continuous.is_empty() {
                    self.input_batches.push(continuous);
                }
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
