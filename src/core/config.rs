//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunables for both exercises, assembled through a fluent builder.
//
// Architecture:
//   GameConfig::builder() ──with_*()──> GameConfigBuilder ──build()──> GameConfig
//                                                              │
//                                                              └─ validates datasets
//                                                                 and score template
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::cards::{
    default_cause_cards, default_timeline_events, CardId, CauseCard, EventCard,
};

//=== ConfigError =========================================================

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Score template lacks a required placeholder.
    #[error("score template {template:?} is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },

    /// The deck must deal at least one card at a time.
    #[error("deck visible cap must be positive")]
    ZeroDeckCap,

    /// A dataset has no cards.
    #[error("{0} dataset is empty")]
    EmptyDataset(&'static str),

    /// Two cards share an id (across both datasets).
    #[error("card id {0} appears more than once")]
    DuplicateCardId(CardId),

    /// Two cause cards target the same (role, chain) grid slot.
    #[error("cause cards {first} and {second} share a grid slot")]
    SharedGridSlot { first: CardId, second: CardId },
}

//=== ScoreTemplate =======================================================

/// Localised score summary, e.g. `"Du fick {score} av {total} rätt."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTemplate(String);

impl ScoreTemplate {
    pub const SCORE: &'static str = "{score}";
    pub const TOTAL: &'static str = "{total}";

    /// Parses a template; both `{score}` and `{total}` must be present.
    pub fn parse(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();

        for placeholder in [Self::SCORE, Self::TOTAL] {
            if !template.contains(placeholder) {
                return Err(ConfigError::MissingPlaceholder {
                    template,
                    placeholder,
                });
            }
        }

        Ok(Self(template))
    }

    /// Renders the summary for a grading pass.
    pub fn render(&self, score: usize, total: usize) -> String {
        self.0
            .replace(Self::SCORE, &score.to_string())
            .replace(Self::TOTAL, &total.to_string())
    }
}

impl Default for ScoreTemplate {
    fn default() -> Self {
        Self("Du fick {score} av {total} rätt.".to_string())
    }
}

//=== GameConfig ==========================================================

/// Validated settings shared by the controller and both game engines.
///
/// # Default Values
///
/// - **Score template**: `Du fick {score} av {total} rätt.`
/// - **Deck visible cap**: 3 cards
/// - **Shuffle seed**: none (fresh entropy on every run)
/// - **Datasets**: the built-in timeline and cause-chain cards
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub(crate) score_template: ScoreTemplate,
    pub(crate) deck_visible_cap: usize,
    pub(crate) shuffle_seed: Option<u64>,
    pub(crate) timeline_events: Vec<EventCard>,
    pub(crate) cause_cards: Vec<CauseCard>,
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    pub fn score_template(&self) -> &ScoreTemplate {
        &self.score_template
    }

    pub fn deck_visible_cap(&self) -> usize {
        self.deck_visible_cap
    }

    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }

    pub fn timeline_events(&self) -> &[EventCard] {
        &self.timeline_events
    }

    pub fn cause_cards(&self) -> &[CauseCard] {
        &self.cause_cards
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_template: ScoreTemplate::default(),
            deck_visible_cap: GameConfigBuilder::DEFAULT_DECK_CAP,
            shuffle_seed: None,
            timeline_events: default_timeline_events(),
            cause_cards: default_cause_cards(),
        }
    }
}

//=== GameConfigBuilder ===================================================

/// Builder for [`GameConfig`].
///
/// ```
/// use revolution_cards::core::config::{GameConfig, ScoreTemplate};
///
/// let config = GameConfig::builder()
///     .with_score_template(ScoreTemplate::parse("{score}/{total}").unwrap())
///     .with_deck_visible_cap(4)
///     .with_shuffle_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.deck_visible_cap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub const DEFAULT_DECK_CAP: usize = 3;

    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    pub fn with_score_template(mut self, template: ScoreTemplate) -> Self {
        self.config.score_template = template;
        self
    }

    /// Sets how many cause cards the bank shows at once.
    pub fn with_deck_visible_cap(mut self, cap: usize) -> Self {
        self.config.deck_visible_cap = cap;
        self
    }

    /// Makes every deal reproducible. Intended for tests and demos.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.config.shuffle_seed = Some(seed);
        self
    }

    pub fn with_timeline_events(mut self, events: Vec<EventCard>) -> Self {
        self.config.timeline_events = events;
        self
    }

    pub fn with_cause_cards(mut self, cards: Vec<CauseCard>) -> Self {
        self.config.cause_cards = cards;
        self
    }

    /// Validates and produces the configuration.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`] for the rejected cases.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let config = self.config;

        if config.deck_visible_cap == 0 {
            return Err(ConfigError::ZeroDeckCap);
        }
        if config.timeline_events.is_empty() {
            return Err(ConfigError::EmptyDataset("timeline"));
        }
        if config.cause_cards.is_empty() {
            return Err(ConfigError::EmptyDataset("cause"));
        }

        //--- Unique ids across both datasets ------------------------------
        let mut seen = HashSet::new();
        let ids = config
            .timeline_events
            .iter()
            .map(|e| e.id)
            .chain(config.cause_cards.iter().map(|c| c.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateCardId(id));
            }
        }

        //--- One cause card per grid slot ---------------------------------
        for (i, first) in config.cause_cards.iter().enumerate() {
            if let Some(second) = config.cause_cards[i + 1..]
                .iter()
                .find(|c| c.role == first.role && c.chain == first.chain)
            {
                return Err(ConfigError::SharedGridSlot {
                    first: first.id,
                    second: second.id,
                });
            }
        }

        debug!(
            "Game config built ({} timeline events, {} cause cards, deck cap {})",
            config.timeline_events.len(),
            config.cause_cards.len(),
            config.deck_visible_cap
        );

        Ok(config)
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
