//=========================================================================
// Rendering Surface
//=========================================================================
//
// Derived, read-only picture of the game state handed to whatever draws
// the board.
//
// Architecture:
//   GameController ── snapshot() ──> Snapshot ──> RenderSurface::present()
//
// Snapshots are rebuilt from the engines after every handled command, so
// a surface never has to diff or patch anything itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::cards::{CardId, Revolution, Role};
use crate::core::drag::ZoneId;
use crate::core::games::{CardTag, CauseChainGame, Game, GameSignal, SlotKey, TimelineGame};
use crate::core::router::View;

//=== ButtonStates ========================================================

/// Enablement of the two "check" buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStates {
    pub timeline_check: bool,
    pub cause_check: bool,
}

impl ButtonStates {
    /// Recomputes enablement from the current placement.
    pub fn of(timeline: &TimelineGame, cause: &CauseChainGame) -> Self {
        Self {
            timeline_check: timeline.can_check(),
            cause_check: cause.can_check(),
        }
    }

    pub fn check_enabled(&self, game: Game) -> bool {
        match game {
            Game::Timeline => self.timeline_check,
            Game::Cause => self.cause_check,
        }
    }
}

//=== CardView ============================================================

/// Colouring of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    American,
    French,
    Chain(Role),
}

/// One visible card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub label: &'static str,
    pub style: CardStyle,
    pub tag: Option<CardTag>,
    pub dragging: bool,
}

//=== Per-Game Views ======================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineView {
    pub bank: Vec<CardView>,
    pub slots: Vec<Option<CardView>>,
    pub score_text: String,
    pub complete: bool,
    pub check_enabled: bool,
}

impl TimelineView {
    fn capture(game: &TimelineGame, dragged: Option<CardId>, check_enabled: bool) -> Self {
        let card = |id: CardId| {
            game.event(id).map(|event| CardView {
                id,
                label: event.label,
                style: match event.revolution {
                    Revolution::American => CardStyle::American,
                    Revolution::French => CardStyle::French,
                },
                tag: game.tag(id),
                dragging: dragged == Some(id),
            })
        };

        Self {
            bank: game.bank().iter().filter_map(|&id| card(id)).collect(),
            slots: game.slots().iter().map(|slot| slot.and_then(card)).collect(),
            score_text: game.score_text().to_string(),
            complete: game.is_complete(),
            check_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CauseView {
    pub bank: Vec<CardView>,
    /// Grid slots in chain-major order.
    pub slots: Vec<(SlotKey, Option<CardView>)>,
    pub deck_remaining: usize,
    pub score_text: String,
    pub complete: bool,
    pub check_enabled: bool,
}

impl CauseView {
    fn capture(game: &CauseChainGame, dragged: Option<CardId>, check_enabled: bool) -> Self {
        let card = |id: CardId| {
            game.card(id).map(|cause| CardView {
                id,
                label: cause.label,
                style: CardStyle::Chain(cause.role),
                tag: game.tag(id),
                dragging: dragged == Some(id),
            })
        };

        Self {
            bank: game.bank().iter().filter_map(|&id| card(id)).collect(),
            slots: game
                .grid()
                .iter()
                .map(|&key| (key, game.occupant(key).and_then(card)))
                .collect(),
            deck_remaining: game.deck_remaining(),
            score_text: game.score_text().to_string(),
            complete: game.is_complete(),
            check_enabled,
        }
    }
}

//=== Snapshot ============================================================

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub active_view: Option<View>,
    pub hovered: Option<ZoneId>,
    pub buttons: ButtonStates,
    pub timeline: TimelineView,
    pub cause: CauseView,
}

impl Snapshot {
    pub fn capture(
        active_view: Option<View>,
        hovered: Option<ZoneId>,
        dragged: Option<CardId>,
        timeline: &TimelineGame,
        cause: &CauseChainGame,
    ) -> Self {
        let buttons = ButtonStates::of(timeline, cause);
        Self {
            active_view,
            hovered,
            buttons,
            timeline: TimelineView::capture(timeline, dragged, buttons.timeline_check),
            cause: CauseView::capture(cause, dragged, buttons.cause_check),
        }
    }

    /// The card currently being dragged, wherever it sits.
    pub fn dragging(&self) -> Option<&CardView> {
        self.timeline
            .bank
            .iter()
            .chain(self.timeline.slots.iter().flatten())
            .chain(self.cause.bank.iter())
            .chain(self.cause.slots.iter().filter_map(|(_, card)| card.as_ref()))
            .find(|card| card.dragging)
    }
}

//=== RenderSurface =======================================================

/// Receives a fresh snapshot after every handled command.
pub trait RenderSurface: Send {
    fn present(&mut self, snapshot: &Snapshot, signals: &[GameSignal]);
}

//=== LogSurface ==========================================================

/// Surface that narrates the game through `log`.
#[derive(Debug, Default)]
pub struct LogSurface {
    last_view: Option<View>,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for LogSurface {
    fn present(&mut self, snapshot: &Snapshot, signals: &[GameSignal]) {
        if snapshot.active_view != self.last_view {
            if let Some(view) = snapshot.active_view {
                info!("Showing {}", view.name());
            }
            self.last_view = snapshot.active_view;
        }

        for signal in signals {
            match signal {
                GameSignal::Dealt(game) => debug!("{:?} dealt", game),
                GameSignal::Graded { game, summary, .. } => info!("{:?}: {}", game, summary),
                GameSignal::LevelComplete(game) => info!("{:?}: level complete!", game),
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::{default_cause_cards, default_timeline_events};
    use crate::core::config::ScoreTemplate;
    use crate::core::games::{Dealer, TimelineTarget};

    fn games() -> (TimelineGame, CauseChainGame) {
        let mut dealer = Dealer::seeded(11);
        let timeline =
            TimelineGame::new(default_timeline_events(), ScoreTemplate::default(), &mut dealer);
        let cause =
            CauseChainGame::new(default_cause_cards(), 3, ScoreTemplate::default(), &mut dealer);
        (timeline, cause)
    }

    #[test]
    fn fresh_deal_snapshot() {
        let (timeline, cause) = games();

        let snapshot = Snapshot::capture(Some(View::Home), None, None, &timeline, &cause);

        assert_eq!(snapshot.timeline.bank.len(), 18);
        assert!(snapshot.timeline.slots.iter().all(Option::is_none));
        assert_eq!(snapshot.cause.bank.len(), 3);
        assert_eq!(snapshot.cause.deck_remaining, 9);
        assert_eq!(snapshot.cause.slots.len(), 12);
        assert_eq!(snapshot.buttons, ButtonStates::default());
        assert!(snapshot.dragging().is_none());
    }

    #[test]
    fn dragged_card_is_marked() {
        let (mut timeline, cause) = games();
        let card = timeline.bank()[0];
        timeline.place(card, TimelineTarget::Slot(4));

        let snapshot = Snapshot::capture(None, None, Some(card), &timeline, &cause);

        let slotted = snapshot.timeline.slots[4].as_ref().map(|c| c.id);
        assert_eq!(slotted, Some(card));
        assert_eq!(snapshot.dragging().map(|c| c.id), Some(card));
    }

    #[test]
    fn cause_cards_are_styled_by_role() {
        let (timeline, cause) = games();

        let snapshot = Snapshot::capture(None, None, None, &timeline, &cause);

        for view in &snapshot.cause.bank {
            let role = cause.card(view.id).map(|c| c.role);
            assert_eq!(Some(view.style), role.map(CardStyle::Chain));
        }
    }

    #[test]
    fn log_surface_tracks_view_changes() {
        let (timeline, cause) = games();
        let mut surface = LogSurface::new();

        let snapshot = Snapshot::capture(Some(View::Cause), None, None, &timeline, &cause);
        surface.present(&snapshot, &[GameSignal::Dealt(Game::Cause)]);

        assert_eq!(surface.last_view, Some(View::Cause));
    }
}
