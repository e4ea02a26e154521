//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use revolution_cards::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Configuration
pub use crate::core::config::{ConfigError, GameConfig, ScoreTemplate};

// Game model
pub use crate::core::cards::{CardId, CauseCard, Chain, EventCard, Revolution, Role};
pub use crate::core::games::{CardTag, Game, GameSignal, Grade, SlotKey};

// Controller and rendering
pub use crate::core::controller::{GameController, UiCommand};
pub use crate::core::drag::ZoneId;
pub use crate::core::router::View;
pub use crate::core::surface::{LogSurface, RenderSurface, Snapshot};
