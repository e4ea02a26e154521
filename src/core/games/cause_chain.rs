//=========================================================================
// Cause-Chain Game
//=========================================================================
//
// Sorting exercise: cause / consequence / long-term cards into a grid of
// thematic chains, dealt from a capacity-limited deck.
//
// Placement model:
//   deck:  shuffled order + pointer    (held back, not yet visible)
//   bank:  Vec<CardId>                 (visible, topped up to the cap)
//   slots: HashMap<SlotKey, CardId>    (one per role × chain, at most one card)
//
// Flow:
//   deal() → deck.draw() ×cap → bank
//   place() out of bank → refill() → bank back to cap (while deck lasts)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{CardTag, Dealer, Grade};
use crate::core::cards::{CardId, CauseCard, Chain, Role};
use crate::core::config::ScoreTemplate;

//=== SlotKey =============================================================

/// Grid coordinate of a cause slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub role: Role,
    pub chain: Chain,
}

impl SlotKey {
    pub const fn new(role: Role, chain: Chain) -> Self {
        Self { role, chain }
    }

    /// A card belongs here iff both role and chain match.
    pub fn accepts(&self, card: &CauseCard) -> bool {
        self.role == card.role && self.chain == card.chain
    }
}

//=== Targets & Containers ================================================

/// Where a cause card can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CauseTarget {
    Bank,
    Slot(SlotKey),
}

/// Where a cause card currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CauseContainer {
    Deck,
    Bank,
    Slot(SlotKey),
}

//=== Deck ================================================================

/// Held-back part of the shuffled card set.
#[derive(Debug, Default)]
struct Deck {
    order: Vec<CardId>,
    next: usize,
}

impl Deck {
    fn new(order: Vec<CardId>) -> Self {
        Self { order, next: 0 }
    }

    fn draw(&mut self) -> Option<CardId> {
        let card = self.order.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    fn remaining(&self) -> &[CardId] {
        &self.order[self.next..]
    }

    fn is_exhausted(&self) -> bool {
        self.next >= self.order.len()
    }
}

//=== CauseChainGame ======================================================

/// Cause-chain engine: grid, deck, bank, grading and reset.
pub struct CauseChainGame {
    cards: Vec<CauseCard>,
    grid: Vec<SlotKey>,
    deck: Deck,
    bank: Vec<CardId>,
    slots: HashMap<SlotKey, CardId>,
    visible_cap: usize,
    tags: HashMap<CardId, CardTag>,
    score_template: ScoreTemplate,
    score_text: String,
    complete: bool,
}

impl CauseChainGame {
    //--- Construction -----------------------------------------------------

    /// Creates the game and performs the initial deal.
    ///
    /// The grid holds one slot for every (role, chain) pair, chain-major.
    pub fn new(
        cards: Vec<CauseCard>,
        visible_cap: usize,
        score_template: ScoreTemplate,
        dealer: &mut Dealer,
    ) -> Self {
        let grid = Chain::ALL
            .iter()
            .flat_map(|&chain| Role::ALL.iter().map(move |&role| SlotKey::new(role, chain)))
            .collect();

        let mut game = Self {
            cards,
            grid,
            deck: Deck::default(),
            bank: Vec::with_capacity(visible_cap),
            slots: HashMap::new(),
            visible_cap,
            tags: HashMap::new(),
            score_template,
            score_text: String::new(),
            complete: false,
        };
        game.deal(dealer);
        game
    }

    //--- Deal & Reset -----------------------------------------------------

    fn deal(&mut self, dealer: &mut Dealer) {
        let ids: Vec<CardId> = self.cards.iter().map(|c| c.id).collect();

        self.slots.clear();
        self.bank.clear();
        self.tags.clear();
        self.deck = Deck::new(dealer.shuffled(&ids));
        self.refill();

        debug!(
            "Cause chain dealt: {} in bank, {} held in deck",
            self.bank.len(),
            self.deck.remaining().len()
        );
    }

    /// Tops the bank up from the deck, never beyond the visible cap.
    ///
    /// Returns how many cards were dealt. Calling it again without a
    /// placement in between deals nothing.
    pub fn refill(&mut self) -> usize {
        let mut dealt = 0;
        while self.bank.len() < self.visible_cap {
            let Some(card) = self.deck.draw() else { break };
            self.bank.push(card);
            dealt += 1;
        }
        dealt
    }

    /// Clears score, completion, slots and bank, then re-deals with the
    /// deck pointer back at the start.
    pub fn reset(&mut self, dealer: &mut Dealer) {
        self.score_text.clear();
        self.complete = false;
        self.deal(dealer);
        info!("Cause chain reset");
    }

    /// Hides the "level complete" indicator without touching placement.
    pub fn dismiss_complete(&mut self) {
        self.complete = false;
    }

    //--- Placement --------------------------------------------------------

    /// Moves `card` to `target`.
    ///
    /// Dropping onto an occupied slot sends the occupant back to the bank.
    /// A card leaving the bank triggers a refill. Returns `false` (and
    /// changes nothing) for unknown cards, cards still in the deck and
    /// slots outside the grid.
    pub fn place(&mut self, card: CardId, target: CauseTarget) -> bool {
        let from = match self.container_of(card) {
            Some(CauseContainer::Deck) => {
                debug!("Ignoring placement of undealt card {}", card);
                return false;
            }
            Some(from) => from,
            None => {
                debug!("Ignoring placement of unknown cause card {}", card);
                return false;
            }
        };

        match target {
            CauseTarget::Slot(key) => {
                if !self.grid.contains(&key) {
                    debug!("Ignoring drop on missing cause slot {:?}", key);
                    return false;
                }
                if from == CauseContainer::Slot(key) {
                    self.tags.remove(&card);
                    return true;
                }

                self.detach(card, from);
                if let Some(occupant) = self.slots.insert(key, card) {
                    debug!("Slot {:?} occupant {} returned to bank", key, occupant);
                    self.tags.remove(&occupant);
                    self.bank.push(occupant);
                }
            }
            CauseTarget::Bank => {
                self.detach(card, from);
                self.bank.push(card);
            }
        }

        self.tags.remove(&card);
        if from == CauseContainer::Bank {
            let dealt = self.refill();
            if dealt > 0 {
                debug!("Refilled bank with {} card(s) from deck", dealt);
            }
        }

        debug!("Cause card {} placed at {:?}", card, target);
        true
    }

    fn detach(&mut self, card: CardId, from: CauseContainer) {
        match from {
            CauseContainer::Bank => self.bank.retain(|c| *c != card),
            CauseContainer::Slot(key) => {
                self.slots.remove(&key);
            }
            CauseContainer::Deck => {}
        }
    }

    //--- Grading ----------------------------------------------------------

    /// Grading is allowed once the bank is empty and the deck exhausted.
    pub fn can_check(&self) -> bool {
        self.bank.is_empty() && self.deck.is_exhausted()
    }

    /// Grades the current placement.
    ///
    /// A slotted card is correct iff the slot's role and chain both match
    /// the card. Cards left in the bank are always wrong.
    pub fn check(&mut self) -> Grade {
        self.tags.clear();

        let mut score = 0;
        for (key, id) in &self.slots {
            let correct = self
                .cards
                .iter()
                .find(|c| c.id == *id)
                .is_some_and(|card| key.accepts(card));

            let tag = if correct {
                score += 1;
                CardTag::Correct
            } else {
                CardTag::Wrong
            };
            self.tags.insert(*id, tag);
        }
        for id in &self.bank {
            self.tags.insert(*id, CardTag::Wrong);
        }

        let grade = Grade {
            score,
            total: self.cards.len(),
        };
        self.score_text = self.score_template.render(grade.score, grade.total);
        if grade.is_complete() {
            self.complete = true;
        }

        info!("Cause chain graded: {}/{}", grade.score, grade.total);
        grade
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, card: CardId) -> bool {
        self.cards.iter().any(|c| c.id == card)
    }

    pub fn card(&self, card: CardId) -> Option<&CauseCard> {
        self.cards.iter().find(|c| c.id == card)
    }

    pub fn container_of(&self, card: CardId) -> Option<CauseContainer> {
        if self.bank.contains(&card) {
            return Some(CauseContainer::Bank);
        }
        if let Some((key, _)) = self.slots.iter().find(|(_, id)| **id == card) {
            return Some(CauseContainer::Slot(*key));
        }
        if self.deck.remaining().contains(&card) {
            return Some(CauseContainer::Deck);
        }
        None
    }

    /// Grid slots, chain-major (each chain's cause, consequence, long-term).
    pub fn grid(&self) -> &[SlotKey] {
        &self.grid
    }

    pub fn occupant(&self, key: SlotKey) -> Option<CardId> {
        self.slots.get(&key).copied()
    }

    pub fn bank(&self) -> &[CardId] {
        &self.bank
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining().len()
    }

    pub fn visible_cap(&self) -> usize {
        self.visible_cap
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
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
