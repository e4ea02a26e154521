//=========================================================================
// Game Controller
//=========================================================================
//
// Application state for the whole game, mutated only through UiCommands.
//
// Architecture:
//   UiCommand → handle() → router / drag / engines → MessageBus<GameSignal>
//                                                  → RenderSurface::present()
//
// Commands are applied strictly in arrival order. Every failure mode of
// a command (unknown view, stray drop, disabled check) is a logged no-op.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::cards::CardId;
use crate::core::config::GameConfig;
use crate::core::drag::{DragController, ZoneId};
use crate::core::games::{
    cause_chain::CauseContainer, CauseChainGame, Dealer, Game, GameSignal, Grade, TimelineGame,
};
use crate::core::message_bus::MessageBus;
use crate::core::router::{View, ViewRouter};
use crate::core::surface::{ButtonStates, RenderSurface, Snapshot};

//=== UiCommand ===========================================================

/// A user intent, already resolved from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Switch to the view with this element name, e.g. `cause-view`.
    Navigate(String),

    DragStart(CardId),
    DragOver(ZoneId),
    DragLeave(ZoneId),
    Drop(ZoneId),

    /// Terminates the current gesture, dropped or cancelled.
    DragEnd,

    Check(Game),
    Reset(Game),
}

//=== GameController ======================================================

/// Owns every piece of game state and the surface it is rendered to.
pub struct GameController {
    router: ViewRouter<View>,
    drag: DragController,
    timeline: TimelineGame,
    cause: CauseChainGame,
    dealer: Dealer,
    bus: MessageBus,
    surface: Box<dyn RenderSurface>,
}

impl GameController {
    //--- Construction -----------------------------------------------------

    /// Deals both games and starts on the home view.
    pub fn new(config: &GameConfig, surface: Box<dyn RenderSurface>) -> Self {
        let mut dealer = Dealer::new(config.shuffle_seed());

        let timeline = TimelineGame::new(
            config.timeline_events().to_vec(),
            config.score_template().clone(),
            &mut dealer,
        );
        let cause = CauseChainGame::new(
            config.cause_cards().to_vec(),
            config.deck_visible_cap(),
            config.score_template().clone(),
            &mut dealer,
        );

        let mut router = ViewRouter::new();
        router.register_default(View::Home);
        router.register(View::Timeline);
        router.register(View::Cause);

        let mut bus = MessageBus::new();
        bus.push(GameSignal::Dealt(Game::Timeline));
        bus.push(GameSignal::Dealt(Game::Cause));

        Self {
            router,
            drag: DragController::new(),
            timeline,
            cause,
            dealer,
            bus,
            surface,
        }
    }

    //--- Command Handling -------------------------------------------------

    /// Applies one command and presents the resulting snapshot.
    pub fn handle(&mut self, command: UiCommand) {
        self.apply(command);
        self.present();
    }

    /// Applies one command without presenting.
    pub fn apply(&mut self, command: UiCommand) {
        debug!("Command: {:?}", command);
        match command {
            UiCommand::Navigate(name) => {
                self.navigate(&name);
            }
            UiCommand::DragStart(card) => {
                self.start_drag(card);
            }
            UiCommand::DragOver(zone) => self.drag.drag_over(zone),
            UiCommand::DragLeave(zone) => self.drag.drag_leave(zone),
            UiCommand::Drop(zone) => {
                self.drop(zone);
            }
            UiCommand::DragEnd => self.drag.end_drag(),
            UiCommand::Check(game) => {
                self.check(game);
            }
            UiCommand::Reset(game) => self.reset(game),
        }
    }

    /// Sends the current snapshot and pending signals to the surface.
    pub fn present(&mut self) {
        let snapshot = self.snapshot();
        self.surface.present(&snapshot, self.bus.read::<GameSignal>());
        self.bus.clear::<GameSignal>();
    }

    //--- Navigation -------------------------------------------------------

    /// Shows the view named `name` and hides the "level complete" banners.
    ///
    /// Unknown names leave the current view and the banners untouched.
    pub fn navigate(&mut self, name: &str) -> bool {
        let view = match name.parse::<View>() {
            Ok(view) => view,
            Err(e) => {
                warn!("Navigation ignored: {}", e);
                return false;
            }
        };

        if !self.router.activate(view) {
            return false;
        }
        self.timeline.dismiss_complete();
        self.cause.dismiss_complete();
        true
    }

    //--- Dragging ---------------------------------------------------------

    /// Begins dragging a visible card. Unknown or undealt cards are ignored.
    pub fn start_drag(&mut self, card: CardId) -> bool {
        if self.game_of(card).is_none() {
            debug!("Drag start on unknown card {} ignored", card);
            return false;
        }
        if self.cause.container_of(card) == Some(CauseContainer::Deck) {
            debug!("Drag start on undealt card {} ignored", card);
            return false;
        }

        self.drag.begin_drag(card);
        true
    }

    /// Places the dragged card into `zone`.
    ///
    /// No-op without a dragged card, or when the zone belongs to the other
    /// game or does not exist. The dragged reference stays set until
    /// `DragEnd`.
    pub fn drop(&mut self, zone: ZoneId) -> bool {
        let Some(card) = self.drag.drop(zone) else {
            return false;
        };

        if self.game_of(card) != Some(zone.game()) {
            debug!("Card {} not accepted by {:?}", card, zone);
            return false;
        }

        let placed = match zone.game() {
            Game::Timeline => zone
                .timeline_target()
                .is_some_and(|target| self.timeline.place(card, target)),
            Game::Cause => zone
                .cause_target()
                .is_some_and(|target| self.cause.place(card, target)),
        };

        if placed {
            debug!("Buttons after drop: {:?}", self.buttons());
        }
        placed
    }

    //--- Grading & Reset --------------------------------------------------

    /// Grades `game` if its check button is enabled.
    pub fn check(&mut self, game: Game) -> Option<Grade> {
        if !self.buttons().check_enabled(game) {
            debug!("Check of {:?} ignored: button disabled", game);
            return None;
        }

        let (grade, summary) = match game {
            Game::Timeline => (self.timeline.check(), self.timeline.score_text().to_string()),
            Game::Cause => (self.cause.check(), self.cause.score_text().to_string()),
        };

        self.bus.push(GameSignal::Graded {
            game,
            grade,
            summary,
        });
        if grade.is_complete() {
            info!("{:?} level complete", game);
            self.bus.push(GameSignal::LevelComplete(game));
        }
        Some(grade)
    }

    /// Re-deals `game` and clears its score and tags.
    pub fn reset(&mut self, game: Game) {
        match game {
            Game::Timeline => self.timeline.reset(&mut self.dealer),
            Game::Cause => self.cause.reset(&mut self.dealer),
        }
        self.bus.push(GameSignal::Dealt(game));
    }

    //--- Queries ----------------------------------------------------------

    pub fn buttons(&self) -> ButtonStates {
        ButtonStates::of(&self.timeline, &self.cause)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            self.router.active(),
            self.drag.hovered(),
            self.drag.dragged(),
            &self.timeline,
            &self.cause,
        )
    }

    /// The game a card belongs to.
    pub fn game_of(&self, card: CardId) -> Option<Game> {
        if self.timeline.contains(card) {
            Some(Game::Timeline)
        } else if self.cause.contains(card) {
            Some(Game::Cause)
        } else {
            None
        }
    }

    /// Game shown by the active view, if any.
    pub fn active_game(&self) -> Option<Game> {
        match self.router.active()? {
            View::Home => None,
            View::Timeline => Some(Game::Timeline),
            View::Cause => Some(Game::Cause),
        }
    }

    pub fn active_view(&self) -> Option<View> {
        self.router.active()
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn timeline(&self) -> &TimelineGame {
        &self.timeline
    }

    pub fn cause(&self) -> &CauseChainGame {
        &self.cause
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::{Chain, Role};
    use crate::core::games::{CardTag, SlotKey, TimelineTarget};
    use std::sync::{Arc, Mutex};

    //--- Helpers ----------------------------------------------------------

    #[derive(Default)]
    struct Recorded {
        snapshots: Vec<Snapshot>,
        signals: Vec<GameSignal>,
    }

    struct RecordingSurface(Arc<Mutex<Recorded>>);

    impl RenderSurface for RecordingSurface {
        fn present(&mut self, snapshot: &Snapshot, signals: &[GameSignal]) {
            let mut recorded = self.0.lock().unwrap();
            recorded.snapshots.push(snapshot.clone());
            recorded.signals.extend_from_slice(signals);
        }
    }

    fn controller() -> (GameController, Arc<Mutex<Recorded>>) {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let config = GameConfig::builder().with_shuffle_seed(42).build().unwrap();
        let controller = GameController::new(&config, Box::new(RecordingSurface(recorded.clone())));
        (controller, recorded)
    }

    fn drag_to(controller: &mut GameController, card: CardId, zone: ZoneId) {
        controller.handle(UiCommand::DragStart(card));
        controller.handle(UiCommand::DragOver(zone));
        controller.handle(UiCommand::Drop(zone));
        controller.handle(UiCommand::DragEnd);
    }

    fn solve_timeline(controller: &mut GameController) {
        let canonical = controller.timeline().canonical_order().to_vec();
        for (i, card) in canonical.into_iter().enumerate() {
            drag_to(controller, card, ZoneId::TimelineSlot(i));
        }
    }

    fn solve_cause(controller: &mut GameController) {
        while let Some(&card) = controller.cause().bank().first() {
            let Some(info) = controller.cause().card(card) else { break };
            let key = SlotKey::new(info.role, info.chain);
            drag_to(controller, card, ZoneId::CauseSlot(key));
        }
    }

    //--- Navigation -------------------------------------------------------

    #[test]
    fn starts_on_home() {
        let (controller, _) = controller();
        assert_eq!(controller.active_view(), Some(View::Home));
        assert_eq!(controller.active_game(), None);
    }

    #[test]
    fn navigate_switches_view() {
        let (mut controller, recorded) = controller();

        controller.handle(UiCommand::Navigate("timeline-view".into()));

        assert_eq!(controller.active_view(), Some(View::Timeline));
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.snapshots.last().and_then(|s| s.active_view), Some(View::Timeline));
    }

    #[test]
    fn unknown_view_is_a_no_op() {
        let (mut controller, _) = controller();
        controller.navigate("cause-view");

        assert!(!controller.navigate("settings-view"));
        assert_eq!(controller.active_view(), Some(View::Cause));
    }

    #[test]
    fn navigation_clears_completion() {
        let (mut controller, _) = controller();
        solve_timeline(&mut controller);
        controller.handle(UiCommand::Check(Game::Timeline));
        assert!(controller.timeline().is_complete());

        controller.handle(UiCommand::Navigate("home-view".into()));

        assert!(!controller.timeline().is_complete());
        assert_eq!(controller.timeline().score_text(), "Du fick 18 av 18 rätt.");
    }

    //--- Dragging ---------------------------------------------------------

    #[test]
    fn drop_places_card_and_drag_end_clears_reference() {
        let (mut controller, _) = controller();
        let card = controller.timeline().bank()[0];

        drag_to(&mut controller, card, ZoneId::TimelineSlot(0));

        assert_eq!(controller.timeline().slots()[0], Some(card));
        assert!(!controller.drag().is_dragging());
        assert_eq!(controller.drag().hovered(), None);
    }

    #[test]
    fn drop_without_drag_changes_nothing() {
        let (mut controller, _) = controller();
        let before = controller.snapshot();

        controller.handle(UiCommand::Drop(ZoneId::TimelineSlot(0)));

        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn cross_game_drop_is_rejected() {
        let (mut controller, _) = controller();
        let card = controller.timeline().bank()[0];
        let key = SlotKey::new(Role::Cause, Chain::Taxation);

        controller.handle(UiCommand::DragStart(card));
        assert!(!controller.drop(ZoneId::CauseSlot(key)));
        controller.handle(UiCommand::DragEnd);

        assert_eq!(controller.cause().occupant(key), None);
        assert!(controller.timeline().bank().contains(&card));
    }

    #[test]
    fn drop_on_missing_slot_is_rejected() {
        let (mut controller, _) = controller();
        let card = controller.timeline().bank()[0];

        controller.handle(UiCommand::DragStart(card));
        assert!(!controller.drop(ZoneId::TimelineSlot(99)));
    }

    #[test]
    fn unknown_and_undealt_cards_cannot_be_dragged() {
        let (mut controller, _) = controller();

        assert!(!controller.start_drag(CardId("no-such-card")));

        let dealt: Vec<CardId> = controller.cause().bank().to_vec();
        let undealt = default_ids()
            .into_iter()
            .find(|id| controller.cause().contains(*id) && !dealt.contains(id));
        if let Some(card) = undealt {
            assert!(!controller.start_drag(card));
        }
        assert!(!controller.drag().is_dragging());
    }

    fn default_ids() -> Vec<CardId> {
        crate::core::cards::default_cause_cards()
            .into_iter()
            .map(|c| c.id)
            .collect()
    }

    #[test]
    fn cancelled_drag_leaves_placement_untouched() {
        let (mut controller, _) = controller();
        let card = controller.timeline().bank()[0];
        let before = controller.timeline().bank().to_vec();

        controller.handle(UiCommand::DragStart(card));
        controller.handle(UiCommand::DragOver(ZoneId::TimelineSlot(2)));
        controller.handle(UiCommand::DragEnd);

        assert_eq!(controller.timeline().bank(), before.as_slice());
        assert!(!controller.drag().is_dragging());
    }

    //--- Grading ----------------------------------------------------------

    #[test]
    fn check_ignored_while_disabled() {
        let (mut controller, recorded) = controller();

        assert_eq!(controller.check(Game::Timeline), None);
        controller.present();

        assert!(controller.timeline().score_text().is_empty());
        let recorded = recorded.lock().unwrap();
        assert!(!recorded.signals.iter().any(|s| matches!(s, GameSignal::Graded { .. })));
    }

    #[test]
    fn check_button_follows_placement() {
        let (mut controller, _) = controller();
        assert!(!controller.buttons().timeline_check);

        solve_timeline(&mut controller);
        assert!(controller.buttons().timeline_check);

        let first = controller.timeline().canonical_order()[0];
        drag_to(&mut controller, first, ZoneId::TimelineBank);
        assert!(!controller.buttons().timeline_check);
    }

    #[test]
    fn perfect_timeline_publishes_level_complete() {
        let (mut controller, recorded) = controller();
        solve_timeline(&mut controller);

        controller.handle(UiCommand::Check(Game::Timeline));

        let recorded = recorded.lock().unwrap();
        assert!(recorded.signals.contains(&GameSignal::LevelComplete(Game::Timeline)));
        assert!(recorded.signals.contains(&GameSignal::Graded {
            game: Game::Timeline,
            grade: Grade { score: 18, total: 18 },
            summary: "Du fick 18 av 18 rätt.".to_string(),
        }));
        let snapshot = recorded.snapshots.last().cloned().unwrap_or_default();
        assert!(snapshot.timeline.complete);
    }

    #[test]
    fn perfect_cause_chain_scores_full_marks() {
        let (mut controller, _) = controller();
        solve_cause(&mut controller);
        assert!(controller.buttons().cause_check);

        let grade = controller.check(Game::Cause);

        assert_eq!(grade, Some(Grade { score: 12, total: 12 }));
        assert!(controller.cause().is_complete());
    }

    #[test]
    fn signals_are_delivered_once() {
        let (mut controller, recorded) = controller();
        controller.present();
        controller.present();

        let recorded = recorded.lock().unwrap();
        let dealt = recorded
            .signals
            .iter()
            .filter(|s| matches!(s, GameSignal::Dealt(_)))
            .count();
        assert_eq!(dealt, 2);
    }

    //--- Reset ------------------------------------------------------------

    #[test]
    fn reset_clears_score_and_tags() {
        let (mut controller, _) = controller();
        solve_timeline(&mut controller);
        controller.check(Game::Timeline);
        let graded = controller.timeline().canonical_order()[0];
        assert_eq!(controller.timeline().tag(graded), Some(CardTag::Correct));

        controller.handle(UiCommand::Reset(Game::Timeline));

        assert!(controller.timeline().score_text().is_empty());
        assert_eq!(controller.timeline().tag(graded), None);
        assert_eq!(controller.timeline().bank().len(), 18);
        assert!(controller.timeline().slots().iter().all(Option::is_none));
        assert!(controller.timeline().container_of(graded) == Some(TimelineTarget::Bank));
    }

    #[test]
    fn reset_only_touches_its_game() {
        let (mut controller, _) = controller();
        let card = controller.timeline().bank()[0];
        drag_to(&mut controller, card, ZoneId::TimelineSlot(0));

        controller.reset(Game::Cause);

        assert_eq!(controller.timeline().slots()[0], Some(card));
    }
}
