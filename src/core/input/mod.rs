//=========================================================================
// Input System
//=========================================================================
//
// Platform-independent input events and their translation into game
// commands.
//
// Components:
// - `event`: pointer and key events produced by the platform layer
// - `bindings`: keyboard shortcut table
// - `pointer`: gesture interpretation (drag, drop, click)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bindings;
pub mod event;
pub mod pointer;

//=== Public API ==========================================================

pub use bindings::{KeyAction, KeyBindings};
pub use event::{InputEvent, KeyCode, MouseButton};
pub use pointer::PointerInterpreter;
