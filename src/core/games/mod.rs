//=========================================================================
// Game Engines
//=========================================================================
//
// The two exercises and the types they share.
//
// Architecture:
//   Dealer ── shuffle() ──> TimelineGame   (fixed numbered slots)
//          └─ shuffle() ──> CauseChainGame (role × chain grid, capped deck)
//
// Each engine owns its placement map and grading tags. Neither touches
// the rendering surface; the controller derives snapshots from them.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod cause_chain;
mod dealer;
pub mod timeline;

//=== Public API ==========================================================

pub use cause_chain::{CauseChainGame, CauseTarget, SlotKey};
pub use dealer::Dealer;
pub use timeline::{TimelineGame, TimelineTarget};

//=== Game ================================================================

/// Identifies one of the two exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Timeline,
    Cause,
}

//=== CardTag =============================================================

/// Presentational grading mark. Cleared at the start of every grading
/// pass and whenever the card moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardTag {
    Correct,
    Wrong,
}

//=== Grade ===============================================================

/// Outcome of a grading pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub score: usize,
    pub total: usize,
}

impl Grade {
    /// Every card is in its correct place.
    pub fn is_complete(&self) -> bool {
        self.score == self.total
    }
}

//=== GameSignal ==========================================================

/// Notifications published on the message bus for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSignal {
    /// A game was (re)dealt.
    Dealt(Game),

    /// A grading pass finished.
    Graded { game: Game, grade: Grade, summary: String },

    /// A grading pass found every card correct.
    LevelComplete(Game),
}
