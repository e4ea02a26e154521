//=========================================================================
// Revolution Cards: Library Root
//=========================================================================
//
// Drag-and-drop history game: order revolution events on a timeline and
// sort causes and consequences into thematic chains.
//
// Typical usage:
// ```no_run
// use revolution_cards::EngineBuilder;
//
// EngineBuilder::new().build().run()?;
// # Ok::<(), revolution_cards::EngineError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game model, controller and input interpretation. It
// is usable without a window (tests, alternative front ends).
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit window and event loop and is not part of
// the public API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
