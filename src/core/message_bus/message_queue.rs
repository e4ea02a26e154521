//=========================================================================
// Message Queue Trait
//=========================================================================
//
// Type-erased view of a `Vec<M>` so queues of different message types
// can share one HashMap.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Message;

//=========================================================================

/// Operations the bus needs without knowing the message type.
pub(super) trait MessageQueue: Send {
    /// Drops all messages, keeping the allocation.
    fn clear_queue(&mut self);

    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> MessageQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::games::{Game, GameSignal};

    #[test]
    fn clear_queue_keeps_capacity() {
        let mut queue: Vec<GameSignal> = Vec::with_capacity(16);
        queue.push(GameSignal::Dealt(Game::Timeline));
        queue.push(GameSignal::LevelComplete(Game::Cause));
        let capacity = queue.capacity();

        let erased: &mut dyn MessageQueue = &mut queue;
        erased.clear_queue();

        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), capacity);
    }

    #[test]
    fn downcast_recovers_signals() {
        let mut queue = vec![GameSignal::Dealt(Game::Cause)];

        let erased: &mut dyn MessageQueue = &mut queue;
        assert_eq!(erased.len(), 1);

        let signals = erased.as_any().downcast_ref::<Vec<GameSignal>>();
        assert_eq!(signals.map(|v| v[0].clone()), Some(GameSignal::Dealt(Game::Cause)));
        assert!(erased.as_any().downcast_ref::<Vec<u32>>().is_none());
    }
}
