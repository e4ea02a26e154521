//=========================================================================
// Input Buffer
//=========================================================================
//
// Collects input events between flushes into two categories:
//
// - `discrete`: presses, releases, keys, leave/focus events (ordered,
//   consecutive duplicates dropped)
// - `continuous`: the latest pointer position only
//
// Drained on every flush by the platform.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: Option<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: None,
        }
    }

    //--- Buffering --------------------------------------------------------

    /// Routes `event` to the matching category.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.push_continuous(event);
        } else {
            self.push_discrete(event);
        }
    }

    /// Replaces the stored pointer position.
    fn push_continuous(&mut self, event: InputEvent) {
        self.continuous = Some(event);
    }

    /// Appends a discrete event unless it repeats the previous one.
    fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes everything buffered, or `None` when nothing was.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(16));
        let continuous = self.continuous.take().into_iter().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
