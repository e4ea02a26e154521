//=========================================================================
// Message Bus
//=========================================================================
//
// Per-type message queues used to hand game signals from the controller
// to the rendering surface.
//
// Pattern (once per handled command):
//   controller → push<M>() ... → surface reads read<M>() → clear<M>()
//
//=========================================================================

//=== Module Declarations =================================================

mod message_queue;

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::error;

//=== Internal Dependencies ===============================================

use message_queue::MessageQueue;

//=== Message Trait =======================================================

/// Anything `Send + 'static` can travel on the bus.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== MessageBus ==========================================================

/// Type-keyed message queues.
#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Message Operations -----------------------------------------------

    /// Appends a message to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        let queue = self
            .queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()));

        match queue.as_any_mut().downcast_mut::<Vec<M>>() {
            Some(queue) => queue.push(msg),
            None => error!("MessageBus queue type mismatch for {}", std::any::type_name::<M>()),
        }
    }

    /// Messages of type `M` pushed since the last clear, oldest first.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of queued messages of type `M`.
    pub fn count<M: Message>(&self) -> usize {
        self.queues
            .get(&TypeId::of::<M>())
            .map(|q| q.len())
            .unwrap_or(0)
    }

    /// Clears messages of type `M`, keeping the allocation.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Clears every queue.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
