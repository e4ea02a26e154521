//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the winit platform thread and the logic thread.
//
// Components:
// - `interface`: Event types and error definitions
// - `event_collector`: Logic-side event collection and batching
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
