//=========================================================================
// Card Model
//=========================================================================
//
// Immutable reference data for both exercises.
//
// Architecture:
//   EventCard  (timeline)    ── id, label, year, revolution
//   CauseCard  (cause chain) ── id, label, role, chain
//
// Cards are never mutated by gameplay. Placement and grading state live
// in the game engines and refer to cards by `CardId` only.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Module Declarations =================================================

mod dataset;

//=== Public API ==========================================================

pub use dataset::{default_cause_cards, default_timeline_events};

//=== CardId ==============================================================

/// Stable identifier of a card, unique across both datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub &'static str);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

//=== Revolution ==========================================================

/// Which revolution an event card belongs to. Drives card colouring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revolution {
    American,
    French,
}

//=== EventCard ===========================================================

/// A dated event for the timeline exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: CardId,
    pub label: &'static str,
    pub year: i32,
    pub revolution: Revolution,
}

impl EventCard {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        year: i32,
        revolution: Revolution,
    ) -> Self {
        Self {
            id: CardId(id),
            label,
            year,
            revolution,
        }
    }
}

/// Returns card ids in canonical chronological order.
///
/// Sorted by year, ties broken by label. The sort is stable, so cards
/// with identical year and label keep their dataset order.
pub fn chronological_order(events: &[EventCard]) -> Vec<CardId> {
    let mut sorted: Vec<&EventCard> = events.iter().collect();
    sorted.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.label.cmp(b.label)));
    sorted.into_iter().map(|e| e.id).collect()
}

//=== Role ================================================================

/// Position of a card within a cause/consequence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Underlying cause.
    Cause,

    /// Direct consequence.
    Consequence,

    /// Long-term consequence.
    LongTerm,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Cause, Role::Consequence, Role::LongTerm];

    /// Column heading shown above the role's slots.
    pub fn heading(&self) -> &'static str {
        match self {
            Role::Cause => "Orsak",
            Role::Consequence => "Konsekvens",
            Role::LongTerm => "Långsiktig konsekvens",
        }
    }
}

//=== Chain ===============================================================

/// Thematic chain a cause card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chain {
    Taxation,
    Representation,
    Bread,
    Enlightenment,
}

impl Chain {
    pub const ALL: [Chain; 4] = [
        Chain::Taxation,
        Chain::Representation,
        Chain::Bread,
        Chain::Enlightenment,
    ];

    /// Row heading shown beside the chain's slots.
    pub fn heading(&self) -> &'static str {
        match self {
            Chain::Taxation => "Skatter",
            Chain::Representation => "Inflytande",
            Chain::Bread => "Bröd",
            Chain::Enlightenment => "Idéer",
        }
    }
}

//=== CauseCard ===========================================================

/// A cause or consequence card for the chain exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseCard {
    pub id: CardId,
    pub label: &'static str,
    pub role: Role,
    pub chain: Chain,
}

impl CauseCard {
    pub const fn new(id: &'static str, label: &'static str, role: Role, chain: Chain) -> Self {
        Self {
            id: CardId(id),
            label,
            role,
            chain,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chronological_order_sorts_by_year_then_label() {
        let events = vec![
            EventCard::new("b", "Beta", 1789, Revolution::French),
            EventCard::new("c", "Alpha", 1790, Revolution::French),
            EventCard::new("a", "Alpha", 1789, Revolution::French),
            EventCard::new("d", "Zulu", 1700, Revolution::American),
        ];

        let order = chronological_order(&events);
        assert_eq!(order, vec![CardId("d"), CardId("a"), CardId("b"), CardId("c")]);
    }

    #[test]
    fn chronological_order_does_not_touch_dataset() {
        let events = default_timeline_events();
        let before = events.clone();
        let _ = chronological_order(&events);
        assert_eq!(events, before);
    }

    #[test]
    fn card_id_displays_raw_id() {
        assert_eq!(CardId("e1763-war").to_string(), "e1763-war");
    }
}
