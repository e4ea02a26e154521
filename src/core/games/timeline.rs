//=========================================================================
// Timeline Game
//=========================================================================
//
// Chronological ordering exercise with fixed numbered slots.
//
// Placement model:
//   bank:  Vec<CardId>            (deal order, dropped cards appended)
//   slots: Vec<Option<CardId>>    (one per event, at most one card each)
//
// Every card is in exactly one of the two at all times. Grading compares
// slot i with the i-th id of the canonical chronological order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{CardTag, Dealer, Grade};
use crate::core::cards::{chronological_order, CardId, EventCard};
use crate::core::config::ScoreTemplate;

//=== Targets & Containers ================================================

/// Where a timeline card can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineTarget {
    Bank,
    Slot(usize),
}

/// Where a timeline card currently is. Same shape as [`TimelineTarget`].
pub type TimelineContainer = TimelineTarget;

//=== TimelineGame ========================================================

/// Timeline engine: dataset, placement map, grading and reset.
pub struct TimelineGame {
    events: Vec<EventCard>,
    canonical: Vec<CardId>,
    bank: Vec<CardId>,
    slots: Vec<Option<CardId>>,
    tags: HashMap<CardId, CardTag>,
    score_template: ScoreTemplate,
    score_text: String,
    complete: bool,
}

impl TimelineGame {
    //--- Construction -----------------------------------------------------

    /// Creates the game and performs the initial deal.
    pub fn new(events: Vec<EventCard>, score_template: ScoreTemplate, dealer: &mut Dealer) -> Self {
        let canonical = chronological_order(&events);
        let mut game = Self {
            slots: vec![None; events.len()],
            bank: Vec::with_capacity(events.len()),
            tags: HashMap::new(),
            events,
            canonical,
            score_template,
            score_text: String::new(),
            complete: false,
        };
        game.deal(dealer);
        game
    }

    //--- Deal & Reset -----------------------------------------------------

    /// Empties every slot and fills the bank with a fresh permutation.
    fn deal(&mut self, dealer: &mut Dealer) {
        let ids: Vec<CardId> = self.events.iter().map(|e| e.id).collect();

        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.bank = dealer.shuffled(&ids);
        self.tags.clear();

        debug!("Timeline dealt: {} cards, {} slots", self.bank.len(), self.slots.len());
    }

    /// Clears score and completion, returns every card to the bank and
    /// re-deals.
    pub fn reset(&mut self, dealer: &mut Dealer) {
        self.score_text.clear();
        self.complete = false;
        self.deal(dealer);
        info!("Timeline reset");
    }

    /// Hides the "level complete" indicator without touching placement.
    pub fn dismiss_complete(&mut self) {
        self.complete = false;
    }

    //--- Placement --------------------------------------------------------

    /// Moves `card` to `target`.
    ///
    /// Dropping onto an occupied slot sends the occupant back to the bank.
    /// Returns `false` (and changes nothing) for unknown cards or slot
    /// indices out of range.
    pub fn place(&mut self, card: CardId, target: TimelineTarget) -> bool {
        let Some(from) = self.container_of(card) else {
            debug!("Ignoring placement of unknown timeline card {}", card);
            return false;
        };

        match target {
            TimelineTarget::Slot(index) => {
                if index >= self.slots.len() {
                    debug!("Ignoring drop on missing timeline slot {}", index);
                    return false;
                }
                if from == TimelineTarget::Slot(index) {
                    self.tags.remove(&card);
                    return true;
                }

                self.detach(card, from);
                if let Some(occupant) = self.slots[index].replace(card) {
                    debug!("Slot {} occupant {} returned to bank", index, occupant);
                    self.tags.remove(&occupant);
                    self.bank.push(occupant);
                }
            }
            TimelineTarget::Bank => {
                self.detach(card, from);
                self.bank.push(card);
            }
        }

        self.tags.remove(&card);
        debug!("Timeline card {} placed at {:?}", card, target);
        true
    }

    fn detach(&mut self, card: CardId, from: TimelineContainer) {
        match from {
            TimelineTarget::Bank => self.bank.retain(|c| *c != card),
            TimelineTarget::Slot(index) => self.slots[index] = None,
        }
    }

    //--- Grading ----------------------------------------------------------

    /// Grading is allowed once every slot holds a card.
    pub fn can_check(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Grades the current placement.
    ///
    /// Tags each placed card Correct or Wrong, stores the score summary,
    /// and raises the completion flag on a perfect score. The dataset and
    /// placement are left untouched.
    pub fn check(&mut self) -> Grade {
        self.tags.clear();

        let mut score = 0;
        for (slot, expected) in self.slots.iter().zip(&self.canonical) {
            let Some(card) = slot else { continue };

            let tag = if card == expected {
                score += 1;
                CardTag::Correct
            } else {
                CardTag::Wrong
            };
            self.tags.insert(*card, tag);
        }

        let grade = Grade {
            score,
            total: self.canonical.len(),
        };
        self.score_text = self.score_template.render(grade.score, grade.total);
        if grade.is_complete() {
            self.complete = true;
        }

        info!("Timeline graded: {}/{}", grade.score, grade.total);
        grade
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, card: CardId) -> bool {
        self.events.iter().any(|e| e.id == card)
    }

    pub fn event(&self, card: CardId) -> Option<&EventCard> {
        self.events.iter().find(|e| e.id == card)
    }

    pub fn container_of(&self, card: CardId) -> Option<TimelineContainer> {
        if self.bank.contains(&card) {
            return Some(TimelineTarget::Bank);
        }
        self.slots
            .iter()
            .position(|slot| *slot == Some(card))
            .map(TimelineTarget::Slot)
    }

    pub fn bank(&self) -> &[CardId] {
        &self.bank
    }

    pub fn slots(&self) -> &[Option<CardId>] {
        &self.slots
    }

    pub fn canonical_order(&self) -> &[CardId] {
        &self.canonical
    }

    pub fn tag(&self, card: CardId) -> Option<CardTag> {
        self.tags.get(&card).copied()
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::default_timeline_events;
    use std::collections::HashSet;

    //--- Test Helpers -----------------------------------------------------

    fn new_game(seed: u64) -> (TimelineGame, Dealer) {
        let mut dealer = Dealer::seeded(seed);
        let game = TimelineGame::new(default_timeline_events(), ScoreTemplate::default(), &mut dealer);
        (game, dealer)
    }

    fn place_all(game: &mut TimelineGame, order: &[CardId]) {
        for (i, id) in order.iter().enumerate() {
            assert!(game.place(*id, TimelineTarget::Slot(i)));
        }
    }

    fn all_ids(game: &TimelineGame) -> Vec<CardId> {
        let mut ids: Vec<CardId> = game
            .bank()
            .iter()
            .copied()
            .chain(game.slots().iter().flatten().copied())
            .collect();
        ids.sort();
        ids
    }

    fn dataset_ids() -> Vec<CardId> {
        let mut ids: Vec<CardId> = default_timeline_events().iter().map(|e| e.id).collect();
        ids.sort();
        ids
    }

    //--- Deal -------------------------------------------------------------

    #[test]
    fn deal_puts_every_card_in_bank_once() {
        let (game, _) = new_game(1);

        assert_eq!(game.bank().len(), 18);
        assert_eq!(game.slots().len(), 18);
        assert!(game.slots().iter().all(Option::is_none));
        assert_eq!(all_ids(&game), dataset_ids());
    }

    #[test]
    fn reset_twice_gives_complete_independent_deals() {
        let (mut game, mut dealer) = new_game(3);
        let order = game.canonical_order().to_vec();
        place_all(&mut game, &order[..5]);
        game.check();

        game.reset(&mut dealer);
        let first = game.bank().to_vec();
        assert_eq!(game.score_text(), "");
        assert_eq!(all_ids(&game), dataset_ids());

        game.reset(&mut dealer);
        let second = game.bank().to_vec();
        assert_eq!(game.score_text(), "");
        assert_eq!(all_ids(&game), dataset_ids());
        assert!(game.slots().iter().all(Option::is_none));
        assert_ne!(first, second);
    }

    //--- Placement --------------------------------------------------------

    #[test]
    fn placing_moves_card_out_of_bank() {
        let (mut game, _) = new_game(1);
        let card = game.bank()[0];

        assert!(game.place(card, TimelineTarget::Slot(4)));

        assert_eq!(game.container_of(card), Some(TimelineTarget::Slot(4)));
        assert!(!game.bank().contains(&card));
        assert_eq!(game.bank().len(), 17);
    }

    #[test]
    fn dropping_on_occupied_slot_displaces_occupant() {
        let (mut game, _) = new_game(1);
        let first = game.bank()[0];
        let second = game.bank()[1];

        game.place(first, TimelineTarget::Slot(0));
        game.place(second, TimelineTarget::Slot(0));

        assert_eq!(game.slots()[0], Some(second));
        assert_eq!(game.container_of(first), Some(TimelineTarget::Bank));
        assert_eq!(all_ids(&game), dataset_ids());
    }

    #[test]
    fn moving_between_slots_frees_the_source() {
        let (mut game, _) = new_game(1);
        let card = game.bank()[0];

        game.place(card, TimelineTarget::Slot(0));
        game.place(card, TimelineTarget::Slot(5));

        assert_eq!(game.slots()[0], None);
        assert_eq!(game.slots()[5], Some(card));
    }

    #[test]
    fn out_of_range_slot_is_ignored() {
        let (mut game, _) = new_game(1);
        let card = game.bank()[0];

        assert!(!game.place(card, TimelineTarget::Slot(18)));
        assert_eq!(game.container_of(card), Some(TimelineTarget::Bank));
    }

    #[test]
    fn unknown_card_is_ignored() {
        let (mut game, _) = new_game(1);
        assert!(!game.place(CardId("c1-tax"), TimelineTarget::Slot(0)));
        assert!(game.slots().iter().all(Option::is_none));
    }

    #[test]
    fn card_can_return_to_bank() {
        let (mut game, _) = new_game(1);
        let card = game.bank()[0];

        game.place(card, TimelineTarget::Slot(2));
        game.place(card, TimelineTarget::Bank);

        assert_eq!(game.slots()[2], None);
        assert_eq!(game.bank().last(), Some(&card));
    }

    //--- Grading ----------------------------------------------------------

    #[test]
    fn can_check_only_when_all_slots_filled() {
        let (mut game, _) = new_game(1);
        let order = game.canonical_order().to_vec();

        place_all(&mut game, &order[..17]);
        assert!(!game.can_check());

        game.place(order[17], TimelineTarget::Slot(17));
        assert!(game.can_check());
        assert!(game.bank().is_empty());
    }

    #[test]
    fn chronological_placement_scores_full_marks() {
        let (mut game, _) = new_game(1);
        let order = game.canonical_order().to_vec();
        place_all(&mut game, &order);

        let grade = game.check();

        assert_eq!(grade, Grade { score: 18, total: 18 });
        assert!(game.is_complete());
        assert_eq!(game.score_text(), "Du fick 18 av 18 rätt.");
        assert!(order.iter().all(|id| game.tag(*id) == Some(CardTag::Correct)));
    }

    #[test]
    fn one_adjacent_swap_costs_two_points() {
        let (mut game, _) = new_game(1);
        let mut order = game.canonical_order().to_vec();
        order.swap(6, 7);
        place_all(&mut game, &order);

        let grade = game.check();

        assert_eq!(grade, Grade { score: 16, total: 18 });
        assert!(!game.is_complete());
        assert_eq!(game.tag(order[6]), Some(CardTag::Wrong));
        assert_eq!(game.tag(order[7]), Some(CardTag::Wrong));
        assert_eq!(game.tag(order[8]), Some(CardTag::Correct));
    }

    #[test]
    fn grading_does_not_change_placement_or_dataset() {
        let (mut game, _) = new_game(1);
        let order = game.canonical_order().to_vec();
        place_all(&mut game, &order);
        let slots_before = game.slots().to_vec();

        game.check();

        assert_eq!(game.slots(), slots_before.as_slice());
        assert_eq!(game.canonical_order(), order.as_slice());
    }

    #[test]
    fn moving_a_card_clears_its_tag() {
        let (mut game, _) = new_game(1);
        let order = game.canonical_order().to_vec();
        place_all(&mut game, &order);
        game.check();

        game.place(order[0], TimelineTarget::Bank);

        assert_eq!(game.tag(order[0]), None);
        assert_eq!(game.tag(order[1]), Some(CardTag::Correct));
    }

    #[test]
    fn regrading_replaces_previous_tags() {
        let (mut game, _) = new_game(1);
        let order = game.canonical_order().to_vec();
        place_all(&mut game, &order);
        game.check();

        // Swap two cards through the bank, then regrade.
        game.place(order[0], TimelineTarget::Bank);
        game.place(order[1], TimelineTarget::Slot(0));
        game.place(order[0], TimelineTarget::Slot(1));
        let grade = game.check();

        assert_eq!(grade.score, 16);
        let tagged: HashSet<_> = order.iter().filter(|id| game.tag(**id).is_some()).collect();
        assert_eq!(tagged.len(), 18);
        assert_eq!(game.tag(order[0]), Some(CardTag::Wrong));
    }

    #[test]
    fn reset_clears_complete_flag_and_tags() {
        let (mut game, mut dealer) = new_game(1);
        let order = game.canonical_order().to_vec();
        place_all(&mut game, &order);
        game.check();
        assert!(game.is_complete());

        game.reset(&mut dealer);

        assert!(!game.is_complete());
        assert!(order.iter().all(|id| game.tag(*id).is_none()));
        assert!(!game.can_check());
    }
}
