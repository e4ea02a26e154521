//=========================================================================
// Drag Controller
//=========================================================================
//
// Tracks the single card being dragged and the zone under it.
//
// Lifecycle:
//   begin_drag(card) → drag_over(zone)* / drag_leave(zone)* → drop(zone)? → end_drag()
//
// `end_drag()` closes every gesture, including cancelled ones, so the
// dragged reference can never outlive the gesture. Hover marks are purely
// visual and never touch placement.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::cards::CardId;
use crate::core::games::{CauseTarget, Game, SlotKey, TimelineTarget};

//=== ZoneId ==============================================================

/// A drop target on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneId {
    TimelineBank,
    TimelineSlot(usize),
    CauseBank,
    CauseSlot(SlotKey),
}

impl ZoneId {
    /// Game whose cards this zone accepts.
    pub fn game(&self) -> Game {
        match self {
            ZoneId::TimelineBank | ZoneId::TimelineSlot(_) => Game::Timeline,
            ZoneId::CauseBank | ZoneId::CauseSlot(_) => Game::Cause,
        }
    }

    pub fn timeline_target(&self) -> Option<TimelineTarget> {
        match *self {
            ZoneId::TimelineBank => Some(TimelineTarget::Bank),
            ZoneId::TimelineSlot(index) => Some(TimelineTarget::Slot(index)),
            _ => None,
        }
    }

    pub fn cause_target(&self) -> Option<CauseTarget> {
        match *self {
            ZoneId::CauseBank => Some(CauseTarget::Bank),
            ZoneId::CauseSlot(key) => Some(CauseTarget::Slot(key)),
            _ => None,
        }
    }
}

//=== DragController ======================================================

/// Single-pointer drag state.
#[derive(Debug, Default)]
pub struct DragController {
    dragged: Option<CardId>,
    hovered: Option<ZoneId>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Gesture Lifecycle ------------------------------------------------

    /// Starts dragging `card`, replacing any stale reference.
    pub fn begin_drag(&mut self, card: CardId) {
        if let Some(stale) = self.dragged.replace(card) {
            debug!("Drag of {} superseded by {}", stale, card);
        } else {
            debug!("Drag started: {}", card);
        }
    }

    /// Ends the current gesture, dropped or not.
    pub fn end_drag(&mut self) {
        if let Some(card) = self.dragged.take() {
            debug!("Drag ended: {}", card);
        }
        self.hovered = None;
    }

    /// Marks `zone` as the hover target while a card is dragged.
    pub fn drag_over(&mut self, zone: ZoneId) {
        if self.dragged.is_none() {
            return;
        }
        if self.hovered != Some(zone) {
            trace!("Hovering {:?}", zone);
            self.hovered = Some(zone);
        }
    }

    /// Clears the hover mark if it belongs to `zone`.
    pub fn drag_leave(&mut self, zone: ZoneId) {
        if self.hovered == Some(zone) {
            self.hovered = None;
        }
    }

    /// Clears the hover mark and returns the card to place, if any.
    ///
    /// The dragged reference itself stays set until [`end_drag`](Self::end_drag).
    pub fn drop(&mut self, zone: ZoneId) -> Option<CardId> {
        self.drag_leave(zone);
        let card = self.dragged;
        if card.is_none() {
            debug!("Drop on {:?} without a dragged card ignored", zone);
        }
        card
    }

    //--- Queries ----------------------------------------------------------

    pub fn dragged(&self) -> Option<CardId> {
        self.dragged
    }

    pub fn hovered(&self) -> Option<ZoneId> {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::{Chain, Role};

    const CARD: CardId = CardId("e1763-war");

    #[test]
    fn begin_then_end_without_drop_clears_reference() {
        let mut drag = DragController::new();

        drag.begin_drag(CARD);
        assert_eq!(drag.dragged(), Some(CARD));

        drag.end_drag();
        assert_eq!(drag.dragged(), None);
        assert_eq!(drag.hovered(), None);
    }

    #[test]
    fn end_drag_clears_hover_too() {
        let mut drag = DragController::new();
        drag.begin_drag(CARD);
        drag.drag_over(ZoneId::TimelineSlot(3));

        drag.end_drag();

        assert_eq!(drag.hovered(), None);
    }

    #[test]
    fn end_drag_without_gesture_is_harmless() {
        let mut drag = DragController::new();
        drag.end_drag();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn hover_requires_an_active_drag() {
        let mut drag = DragController::new();

        drag.drag_over(ZoneId::TimelineSlot(0));
        assert_eq!(drag.hovered(), None);

        drag.begin_drag(CARD);
        drag.drag_over(ZoneId::TimelineSlot(0));
        assert_eq!(drag.hovered(), Some(ZoneId::TimelineSlot(0)));
    }

    #[test]
    fn drag_leave_only_clears_matching_zone() {
        let mut drag = DragController::new();
        drag.begin_drag(CARD);
        drag.drag_over(ZoneId::TimelineSlot(1));

        drag.drag_leave(ZoneId::TimelineSlot(2));
        assert_eq!(drag.hovered(), Some(ZoneId::TimelineSlot(1)));

        drag.drag_leave(ZoneId::TimelineSlot(1));
        assert_eq!(drag.hovered(), None);
    }

    #[test]
    fn drop_without_drag_returns_none() {
        let mut drag = DragController::new();
        assert_eq!(drag.drop(ZoneId::TimelineBank), None);
    }

    #[test]
    fn drop_returns_card_and_clears_hover() {
        let mut drag = DragController::new();
        drag.begin_drag(CARD);
        drag.drag_over(ZoneId::TimelineSlot(0));

        assert_eq!(drag.drop(ZoneId::TimelineSlot(0)), Some(CARD));
        assert_eq!(drag.hovered(), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn new_drag_replaces_stale_reference() {
        let mut drag = DragController::new();
        drag.begin_drag(CARD);
        drag.begin_drag(CardId("c1-tax"));
        assert_eq!(drag.dragged(), Some(CardId("c1-tax")));
    }

    #[test]
    fn zones_know_their_game() {
        let key = SlotKey::new(Role::Cause, Chain::Bread);

        assert_eq!(ZoneId::TimelineBank.game(), Game::Timeline);
        assert_eq!(ZoneId::CauseSlot(key).game(), Game::Cause);
        assert_eq!(ZoneId::CauseSlot(key).cause_target(), Some(CauseTarget::Slot(key)));
        assert_eq!(ZoneId::CauseSlot(key).timeline_target(), None);
        assert_eq!(ZoneId::TimelineSlot(2).timeline_target(), Some(TimelineTarget::Slot(2)));
    }
}
