//! Round-based game state machine.
//!
//! Menu -> Playing on `start`; every matching gesture advances to a new
//! round; a wrong gesture or a round timeout ends the run, persists the best
//! score and returns to the menu.

use serde::Serialize;

use crate::api::config::GameConfig;
use crate::api::host::Host;
use crate::api::types::{Gesture, RoundId, ScreenId};
use crate::core::time::RoundTimer;
use crate::game::action::{Action, ActionPicker};
use crate::game::best_score::{self, RunSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menu,
    Playing,
}

/// Pacing and persistence settings taken from the config.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRules {
    pub floor_ms: u32,
    pub max_additional_ms: u32,
    pub step_ms: u32,
    pub points_per_step: u32,
    pub locale: Option<String>,
    pub best_score_key: String,
}

impl From<&GameConfig> for RoundRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            floor_ms: config.round_floor_ms,
            max_additional_ms: config.max_additional_ms,
            step_ms: config.time_step_ms,
            points_per_step: config.points_per_step.max(1),
            locale: config.voice_locale.clone(),
            best_score_key: config.best_score_key.clone(),
        }
    }
}

pub struct GameState {
    rules: RoundRules,
    phase: Phase,
    screen: ScreenId,
    score: u32,
    additional_ms: u32,
    expected: Option<Action>,
    ended: bool,
    timer: RoundTimer,
    picker: ActionPicker,
    last_run: Option<RunSummary>,
}

impl GameState {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let rules = RoundRules::from(config);
        Self {
            additional_ms: rules.max_additional_ms,
            rules,
            phase: Phase::Menu,
            screen: ScreenId::Menu,
            score: 0,
            expected: None,
            ended: false,
            timer: RoundTimer::new(),
            picker: ActionPicker::new(seed),
            last_run: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_screen(&self) -> ScreenId {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time budget above the floor for the current round.
    pub fn additional_time_ms(&self) -> u32 {
        self.additional_ms
    }

    pub fn round_duration_ms(&self) -> u32 {
        self.rules.floor_ms + self.additional_ms
    }

    pub fn expected_action(&self) -> Option<Action> {
        self.expected
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn pending_round(&self) -> Option<RoundId> {
        self.timer.pending()
    }

    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    pub fn start(&mut self, host: &mut dyn Host) {
        if self.phase == Phase::Playing {
            log::warn!("start ignored: a run is already in progress");
            return;
        }
        self.phase = Phase::Playing;
        self.screen = ScreenId::Game;
        self.ended = false;
        self.score = 0;
        self.additional_ms = self.rules.max_additional_ms;
        self.expected = Some(self.picker.pick());
        log::info!("run started");
        self.schedule_round(host);
    }

    /// Arm the round timeout and announce the expected action.
    pub fn schedule_round(&mut self, host: &mut dyn Host) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(action) = self.expected else {
            return;
        };
        let duration = self.round_duration_ms();
        let round = self.timer.arm(host.scheduler(), duration);
        log::debug!(
            "round {} armed: {} within {}ms (score {})",
            round.0,
            action.gesture.name(),
            duration,
            self.score
        );
        if let Err(err) = host
            .announcer()
            .announce(action.instruction, self.rules.locale.as_deref())
        {
            log::warn!("announcement failed, round continues: {err}");
        }
    }

    /// Route a recognized gesture. Outside a run this does nothing.
    pub fn handle_gesture(&mut self, gesture: Gesture, host: &mut dyn Host) {
        if self.phase != Phase::Playing {
            log::debug!("{} ignored outside a run", gesture.name());
            return;
        }
        match self.expected {
            Some(action) if action.gesture == gesture => self.advance(host),
            expected => {
                log::debug!(
                    "wrong gesture {} (expected {})",
                    gesture.name(),
                    expected.map_or("none", |a| a.gesture.name())
                );
                self.end(host);
            }
        }
    }

    pub fn advance(&mut self, host: &mut dyn Host) {
        if self.phase != Phase::Playing {
            return;
        }
        self.timer.cancel(host.scheduler());
        self.score += 1;
        if self.score % self.rules.points_per_step == 0 {
            self.additional_ms = self.additional_ms.saturating_sub(self.rules.step_ms);
            log::debug!("difficulty up: {}ms above floor", self.additional_ms);
        }
        self.expected = Some(self.picker.pick());
        self.schedule_round(host);
    }

    /// Finish the run. Calling it again before the next `start` does nothing.
    pub fn end(&mut self, host: &mut dyn Host) -> Option<RunSummary> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.timer.cancel(host.scheduler());
        let summary = best_score::record(host.store_mut(), &self.rules.best_score_key, self.score);
        self.phase = Phase::Menu;
        self.screen = ScreenId::Menu;
        self.ended = true;
        self.expected = None;
        self.last_run = Some(summary);
        log::info!(
            "run ended with score {} (best {:?}{})",
            summary.score,
            summary.best,
            if summary.new_best { ", new best" } else { "" }
        );
        Some(summary)
    }

    /// Drop the current run without scoring it and cancel its timeout.
    pub fn abandon(&mut self, host: &mut dyn Host) {
        self.timer.cancel(host.scheduler());
        if self.phase == Phase::Playing {
            log::info!("run abandoned at score {}", self.score);
        }
        self.phase = Phase::Menu;
        self.screen = ScreenId::Menu;
        self.expected = None;
    }

    /// A host timer fired. Only the pending round of a live run counts.
    pub fn on_round_timeout(&mut self, round: RoundId, host: &mut dyn Host) -> bool {
        if !self.timer.fire(round) {
            log::warn!("stale timeout for round {} ignored", round.0);
            return false;
        }
        if self.ended || self.phase != Phase::Playing {
            return false;
        }
        log::debug!("round {} timed out", round.0);
        self.end(host).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::host::{Announcer, HeadlessHost, MemoryScoreStore, Scheduler, ScoreStore};
    use crate::core::time::ManualScheduler;
    use crate::error::ReflexError;

    fn game() -> (GameState, HeadlessHost) {
        (GameState::new(&GameConfig::default(), 1), HeadlessHost::new())
    }

    fn expected(game: &GameState) -> Gesture {
        game.expected_action().unwrap().gesture
    }

    fn wrong(gesture: Gesture) -> Gesture {
        match gesture {
            Gesture::Tap => Gesture::Slide,
            Gesture::Turn => Gesture::Tap,
            Gesture::Slide => Gesture::Turn,
        }
    }

    #[test]
    fn start_arms_first_round() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.active_screen(), ScreenId::Game);
        assert_eq!(game.score(), 0);
        assert_eq!(game.additional_time_ms(), 2000);
        assert_eq!(host.scheduler.pending(), 1);
        assert_eq!(host.scheduler.next_due(), Some(3000));
        let spoken = host.announcer.last().unwrap();
        assert_eq!(spoken.text, game.expected_action().unwrap().instruction);
        assert_eq!(spoken.locale.as_deref(), Some("en-US"));
    }

    #[test]
    fn three_correct_gestures_step_difficulty_once() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        for _ in 0..3 {
            let g = expected(&game);
            game.handle_gesture(g, &mut host);
        }
        assert_eq!(game.score(), 3);
        assert_eq!(game.additional_time_ms(), 2000 - 250);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(host.scheduler.pending(), 1);
        assert_eq!(host.announcer.spoken().len(), 4);
    }

    #[test]
    fn budget_never_goes_below_zero() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        for _ in 0..60 {
            let g = expected(&game);
            game.handle_gesture(g, &mut host);
        }
        assert_eq!(game.score(), 60);
        assert_eq!(game.additional_time_ms(), 0);
        assert_eq!(game.round_duration_ms(), 1000);
    }

    #[test]
    fn wrong_gesture_ends_run() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        let g = expected(&game);
        game.handle_gesture(g, &mut host);
        let g = wrong(expected(&game));
        game.handle_gesture(g, &mut host);
        assert_eq!(game.phase(), Phase::Menu);
        assert_eq!(game.active_screen(), ScreenId::Menu);
        assert!(game.is_ended());
        assert_eq!(host.scheduler.pending(), 0);
        assert_eq!(best_score::read(&host.store, "reflex.bestScore"), Some(1));
        assert!(game.last_run().unwrap().new_best);
    }

    #[test]
    fn timeout_ends_run() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        assert!(host.scheduler.advance(2999).is_empty());
        let fired = host.scheduler.advance(1);
        assert_eq!(fired.len(), 1);
        assert!(game.on_round_timeout(fired[0], &mut host));
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.is_ended());
    }

    #[test]
    fn late_timeout_after_end_is_ignored() {
        let store = MemoryScoreStore::new();
        let mut host = HeadlessHost::with_store(store);
        let mut game = GameState::new(&GameConfig::default(), 3);
        game.start(&mut host);
        let g = expected(&game);
        game.handle_gesture(g, &mut host);
        let round = game.pending_round().unwrap();
        assert!(game.end(&mut host).is_some());
        assert_eq!(host.store.writes(), 1);

        // The host timer raced the cancel and fired anyway.
        assert!(!game.on_round_timeout(round, &mut host));
        assert!(game.end(&mut host).is_none());
        assert_eq!(game.phase(), Phase::Menu);
        assert_eq!(game.active_screen(), ScreenId::Menu);
        assert_eq!(host.store.writes(), 1);
    }

    #[test]
    fn timeout_from_previous_round_is_ignored() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        let first = game.pending_round().unwrap();
        let g = expected(&game);
        game.handle_gesture(g, &mut host);
        assert!(!game.on_round_timeout(first, &mut host));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn abandon_cancels_timer_without_scoring() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        let round = game.pending_round().unwrap();
        game.abandon(&mut host);
        assert_eq!(host.scheduler.pending(), 0);
        assert_eq!(game.phase(), Phase::Menu);
        assert_eq!(game.active_screen(), ScreenId::Menu);
        assert!(game.last_run().is_none());
        assert_eq!(host.store.writes(), 0);
        assert!(!game.on_round_timeout(round, &mut host));
    }

    #[test]
    fn lower_score_keeps_stored_best() {
        let store = MemoryScoreStore::new().with_value("reflex.bestScore", "5");
        let mut host = HeadlessHost::with_store(store);
        let mut game = GameState::new(&GameConfig::default(), 9);
        game.start(&mut host);
        let g = wrong(expected(&game));
        game.handle_gesture(g, &mut host);
        assert_eq!(host.store.get("reflex.bestScore").as_deref(), Some("5"));
        assert_eq!(host.store.writes(), 0);
    }

    #[test]
    fn gestures_in_menu_are_inert() {
        let (mut game, mut host) = game();
        game.handle_gesture(Gesture::Tap, &mut host);
        game.advance(&mut host);
        assert_eq!(game.phase(), Phase::Menu);
        assert_eq!(game.score(), 0);
        assert!(!game.is_ended());
        assert_eq!(host.scheduler.pending(), 0);
    }

    #[test]
    fn restart_resets_run() {
        let (mut game, mut host) = game();
        game.start(&mut host);
        for _ in 0..4 {
            let g = expected(&game);
            game.handle_gesture(g, &mut host);
        }
        game.end(&mut host);
        game.start(&mut host);
        assert_eq!(game.score(), 0);
        assert_eq!(game.additional_time_ms(), 2000);
        assert!(!game.is_ended());
    }

    struct MuteHost {
        scheduler: ManualScheduler,
        store: MemoryScoreStore,
        mute: MuteAnnouncer,
    }

    struct MuteAnnouncer;

    impl Announcer for MuteAnnouncer {
        fn announce(&mut self, _text: &str, _locale: Option<&str>) -> Result<(), ReflexError> {
            Err(ReflexError::Announce("speech synthesis unavailable".into()))
        }
    }

    impl Host for MuteHost {
        fn scheduler(&mut self) -> &mut dyn Scheduler {
            &mut self.scheduler
        }

        fn announcer(&mut self) -> &mut dyn Announcer {
            &mut self.mute
        }

        fn store(&self) -> &dyn ScoreStore {
            &self.store
        }

        fn store_mut(&mut self) -> &mut dyn ScoreStore {
            &mut self.store
        }
    }

    #[test]
    fn announcement_failure_does_not_block_round() {
        let mut host = MuteHost {
            scheduler: ManualScheduler::new(),
            store: MemoryScoreStore::new(),
            mute: MuteAnnouncer,
        };
        let mut game = GameState::new(&GameConfig::default(), 5);
        game.start(&mut host);
        assert_eq!(host.scheduler.pending(), 1);
        let g = expected(&game);
        game.handle_gesture(g, &mut host);
        assert_eq!(game.score(), 1);
        assert_eq!(host.scheduler.pending(), 1);
    }
}
