//=========================================================================
// Board Layout
//=========================================================================
//
// Fixed logical geometry of the board (1024×720) and hit testing.
//
// ```text
//  y   0 ┌ nav: [Hem] [Tidslinje] [Orsaker] ───────────────────────┐
//  y  64 │ bank (cards, wrapped in rows)                           │
//  y 240 │ timeline slots (6 per row)  /  cause grid (roles×chains)│
//  y 660 │ [Kontrollera] [Börja om]                                │
//        └─────────────────────────────────────────────────────────┘
// ```
//
// Hits resolve buttons first, then cards, then drop zones.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::cards::CardId;
use crate::core::controller::GameController;
use crate::core::drag::ZoneId;
use crate::core::games::{Game, SlotKey};
use crate::core::router::View;

//=== Rect ================================================================

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open on the right and bottom edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

//=== Hit Targets =========================================================

/// Clickable buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Nav(View),
    Check(Game),
    Reset(Game),
}

/// What lies under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Button(ButtonId),
    Card(CardId),
    Zone(ZoneId),
}

//=== Layout ==============================================================

/// Geometry parameters of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: Self::LOGICAL_WIDTH,
            height: Self::LOGICAL_HEIGHT,
        }
    }
}

impl Layout {
    pub const LOGICAL_WIDTH: f32 = 1024.0;
    pub const LOGICAL_HEIGHT: f32 = 720.0;

    const MARGIN: f32 = 16.0;
    const BANK_TOP: f32 = 64.0;
    const BANK_HEIGHT: f32 = 160.0;
    const BOARD_TOP: f32 = 240.0;
    const BUTTON_TOP: f32 = 660.0;

    //--- Buttons ----------------------------------------------------------

    pub fn nav_button(&self, view: View) -> Rect {
        let index = View::ALL.iter().position(|v| *v == view).unwrap_or(0) as f32;
        Rect::new(Self::MARGIN + index * 176.0, 8.0, 160.0, 40.0)
    }

    pub fn check_button(&self) -> Rect {
        Rect::new(Self::MARGIN, Self::BUTTON_TOP, 160.0, 44.0)
    }

    pub fn reset_button(&self) -> Rect {
        Rect::new(Self::MARGIN + 176.0, Self::BUTTON_TOP, 160.0, 44.0)
    }

    /// Buttons visible on `view`.
    pub fn buttons(&self, view: Option<View>) -> Vec<(ButtonId, Rect)> {
        let mut buttons: Vec<(ButtonId, Rect)> = View::ALL
            .iter()
            .map(|&v| (ButtonId::Nav(v), self.nav_button(v)))
            .collect();

        let game = match view {
            Some(View::Timeline) => Some(Game::Timeline),
            Some(View::Cause) => Some(Game::Cause),
            _ => None,
        };
        if let Some(game) = game {
            buttons.push((ButtonId::Check(game), self.check_button()));
            buttons.push((ButtonId::Reset(game), self.reset_button()));
        }
        buttons
    }

    //--- Bank -------------------------------------------------------------

    pub fn bank(&self) -> Rect {
        Rect::new(
            Self::MARGIN,
            Self::BANK_TOP,
            self.width - 2.0 * Self::MARGIN,
            Self::BANK_HEIGHT,
        )
    }

    /// Position of the `index`-th bank card.
    pub fn bank_card(&self, game: Game, index: usize) -> Rect {
        let (columns, w, h) = match game {
            Game::Timeline => (8, 116.0, 40.0),
            Game::Cause => (4, 240.0, 48.0),
        };
        let column = (index % columns) as f32;
        let row = (index / columns) as f32;
        Rect::new(
            Self::MARGIN + 8.0 + column * (w + 8.0),
            Self::BANK_TOP + 8.0 + row * (h + 8.0),
            w,
            h,
        )
    }

    //--- Slots ------------------------------------------------------------

    pub fn timeline_slot(&self, index: usize) -> Rect {
        const COLUMNS: usize = 6;
        let column = (index % COLUMNS) as f32;
        let row = (index / COLUMNS) as f32;
        Rect::new(
            Self::MARGIN + column * 164.0,
            Self::BOARD_TOP + row * 56.0,
            156.0,
            48.0,
        )
    }

    /// Cause grid cell: one row per chain, one column per role.
    pub fn cause_slot(&self, key: SlotKey) -> Rect {
        let column = key.role as usize as f32;
        let row = key.chain as usize as f32;
        Rect::new(176.0 + column * 272.0, Self::BOARD_TOP + row * 80.0, 264.0, 72.0)
    }

    //--- Hit Testing ------------------------------------------------------

    /// Topmost thing under `(x, y)` on the active view.
    pub fn hit(&self, controller: &GameController, x: f32, y: f32) -> Option<Hit> {
        let view = controller.active_view();

        if let Some((button, _)) = self
            .buttons(view)
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
        {
            return Some(Hit::Button(button));
        }

        if let Some(card) = self.card_at(controller, x, y) {
            return Some(Hit::Card(card));
        }

        self.zone_at(controller, x, y).map(Hit::Zone)
    }

    /// Drop zone under `(x, y)` on the active view.
    pub fn zone_at(&self, controller: &GameController, x: f32, y: f32) -> Option<ZoneId> {
        match controller.active_game()? {
            Game::Timeline => {
                let slots = controller.timeline().slots().len();
                if let Some(index) = (0..slots).find(|&i| self.timeline_slot(i).contains(x, y)) {
                    return Some(ZoneId::TimelineSlot(index));
                }
                self.bank().contains(x, y).then_some(ZoneId::TimelineBank)
            }
            Game::Cause => {
                if let Some(key) = controller
                    .cause()
                    .grid()
                    .iter()
                    .find(|key| self.cause_slot(**key).contains(x, y))
                {
                    return Some(ZoneId::CauseSlot(*key));
                }
                self.bank().contains(x, y).then_some(ZoneId::CauseBank)
            }
        }
    }

    fn card_at(&self, controller: &GameController, x: f32, y: f32) -> Option<CardId> {
        match controller.active_game()? {
            Game::Timeline => {
                let timeline = controller.timeline();
                let in_bank = timeline
                    .bank()
                    .iter()
                    .enumerate()
                    .find(|(i, _)| self.bank_card(Game::Timeline, *i).contains(x, y))
                    .map(|(_, card)| *card);

                in_bank.or_else(|| {
                    timeline
                        .slots()
                        .iter()
                        .enumerate()
                        .find(|(i, _)| self.timeline_slot(*i).contains(x, y))
                        .and_then(|(_, card)| *card)
                })
            }
            Game::Cause => {
                let cause = controller.cause();
                let in_bank = cause
                    .bank()
                    .iter()
                    .enumerate()
                    .find(|(i, _)| self.bank_card(Game::Cause, *i).contains(x, y))
                    .map(|(_, card)| *card);

                in_bank.or_else(|| {
                    cause
                        .grid()
                        .iter()
                        .find(|key| self.cause_slot(**key).contains(x, y))
                        .and_then(|key| cause.occupant(*key))
                })
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
