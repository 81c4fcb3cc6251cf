//! Composition root
//!
//! `App` owns every piece of state the page shows and every periodic timer.
//! The platform shell forwards frame deltas and user actions; nothing in
//! here touches the DOM, so the whole flow is testable natively.

use crate::consts::{ACCRUAL_INTERVAL, MAX_FRAME_DT, MOTION_DT, SPAWN_INTERVAL};
use crate::economy::{BuildingKind, Economy};
use crate::loading::LoadingScreen;
use crate::platform::FixedInterval;
use crate::sim::{GameEvent, GameState, apply_input, autopilot, tick_motion, tick_spawn};
use crate::theme::Theme;
use crate::ui::{Modal, Tab, UiState};

/// A running mini-game and its two timers.
/// Dropping the session stops its loops.
#[derive(Debug, Clone)]
pub struct MiniGameSession {
    pub state: GameState,
    motion: FixedInterval,
    spawn: FixedInterval,
}

impl MiniGameSession {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            motion: FixedInterval::new(MOTION_DT),
            spawn: FixedInterval::new(SPAWN_INTERVAL),
        }
    }

    /// Run due ticks. Returns true if anything changed.
    fn update(&mut self, dt: f32, autopilot_on: bool) -> bool {
        let motion_ticks = self.motion.advance(dt);
        let spawn_ticks = self.spawn.advance(dt);

        for _ in 0..motion_ticks {
            if autopilot_on {
                let input = autopilot(&self.state);
                apply_input(&mut self.state, &input);
            }
            tick_motion(&mut self.state);
        }
        for _ in 0..spawn_ticks {
            tick_spawn(&mut self.state);
        }
        motion_ticks > 0 || spawn_ticks > 0
    }
}

/// Whole-page application state
#[derive(Debug, Clone)]
pub struct App {
    pub theme: Theme,
    pub economy: Economy,
    pub ui: UiState,
    pub loading: LoadingScreen,
    /// Let the mini-game play itself
    pub autopilot: bool,
    accrual: FixedInterval,
    session: Option<MiniGameSession>,
    /// Mini-game events not yet picked up by the shell
    events: Vec<GameEvent>,
    seed: u64,
    sessions_started: u64,
}

impl App {
    /// `clock_origin_ms` is the time of day used to stamp loading log lines
    pub fn new(theme: Theme, seed: u64, clock_origin_ms: f64) -> Self {
        Self {
            theme,
            economy: Economy::new(),
            ui: UiState::new(),
            loading: LoadingScreen::new(theme, clock_origin_ms),
            autopilot: false,
            accrual: FixedInterval::unbounded(ACCRUAL_INTERVAL),
            session: None,
            events: Vec::new(),
            seed,
            sessions_started: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.loading.is_done()
    }

    /// Advance every timer by a wall-clock delta in seconds.
    /// Accrual gets the whole delta; loading and the mini-game see at most
    /// `MAX_FRAME_DT` of it.
    pub fn update(&mut self, dt: f32) {
        let frame_dt = dt.min(MAX_FRAME_DT);
        if self.is_loading() {
            self.loading.update(frame_dt);
        }

        for _ in 0..self.accrual.advance(dt) {
            self.economy.accrue();
        }

        let autopilot_on = self.autopilot;
        if let Some(session) = self.session.as_mut()
            && session.update(frame_dt, autopilot_on)
        {
            for event in session.state.drain_events() {
                if let GameEvent::EnemyDestroyed { points, .. } = event {
                    self.economy.credit(points);
                }
                self.events.push(event);
            }
        }
    }

    /// Take mini-game events (sound cues) produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.ui.select_tab(tab);
    }

    /// Click on a game card. Only a playable card opens the mini-game.
    pub fn open_game(&mut self, card_index: usize) -> bool {
        if self.is_loading() {
            return false;
        }
        let playable = self
            .theme
            .games()
            .get(card_index)
            .is_some_and(|card| card.is_playable());
        if !playable || !self.ui.open(Modal::MiniGame) {
            return false;
        }
        if self.session.is_none() {
            self.sessions_started += 1;
            let seed = self
                .seed
                .wrapping_add(self.sessions_started.wrapping_mul(0x9E37_79B9_7F4A_7C15));
            self.session = Some(MiniGameSession::new(seed));
            log::info!("Mini-game opened (seed {})", seed);
        }
        true
    }

    /// Open the token conversion stub
    pub fn open_convert(&mut self) -> bool {
        !self.is_loading() && self.ui.open(Modal::Convert)
    }

    /// Close the open modal. Closing the mini-game ends its session.
    pub fn close_modal(&mut self) -> Option<Modal> {
        let closed = self.ui.close();
        if closed == Some(Modal::MiniGame)
            && let Some(session) = self.session.take()
        {
            log::info!(
                "Mini-game closed with score {} after {} ticks",
                session.state.score,
                session.state.time_ticks
            );
        }
        closed
    }

    pub fn session(&self) -> Option<&MiniGameSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut MiniGameSession> {
        self.session.as_mut()
    }

    /// Pointer moved over the play field (field column 0-100)
    pub fn aim(&mut self, field_x: f32) {
        if let Some(session) = self.session.as_mut() {
            session.state.aim(field_x);
        }
    }

    /// Click/tap on the play field
    pub fn fire(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.state.fire();
        }
    }

    /// Buy a building; unaffordable purchases are ignored
    pub fn purchase(&mut self, kind: BuildingKind) -> Option<u32> {
        self.economy.purchase(kind)
    }

    /// The wallet button is a placeholder
    pub fn connect_wallet(&self) {
        log::info!("Connect Wallet clicked (not available in this demo)");
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameClock;
    use crate::sim::EnemyVariant;
    use glam::Vec2;

    fn loaded_app() -> App {
        let mut app = App::new(Theme::Quantum, 1234, 0.0);
        app.loading.finish();
        app
    }

    #[test]
    fn test_loading_gates_the_main_view() {
        let mut app = App::new(Theme::Quantum, 1, 0.0);
        assert!(app.is_loading());
        assert!(!app.open_game(0));
        assert!(!app.open_convert());

        for _ in 0..31 {
            app.update(0.1);
        }
        assert!(!app.is_loading());
        assert!(app.open_game(0));
    }

    #[test]
    fn test_accrual_runs_once_per_second() {
        let mut app = loaded_app();
        assert_eq!(app.purchase(BuildingKind::DataNode), Some(1));
        assert_eq!(app.economy.balance(), 0.0);

        for _ in 0..32 {
            app.update(0.125);
        }
        assert_eq!(app.economy.ticks, 4);
        assert_eq!(app.economy.balance(), 2.0);
    }

    #[test]
    fn test_accrual_catches_up_after_long_gap() {
        let mut app = App::new(Theme::Quantum, 9, 0.0);
        app.loading.finish();
        app.economy.credit(40);
        app.purchase(BuildingKind::NeuralCore);
        let start = app.economy.balance();

        let mut clock = FrameClock::new();
        app.update(clock.delta(0.0));
        // Hidden tab: no frames for a minute, then a slow 5 fps stretch
        app.update(clock.delta(60_000.0));
        for frame in 1..=50 {
            app.update(clock.delta(60_000.0 + frame as f64 * 200.0));
        }

        assert_eq!(app.economy.ticks, 70);
        assert_eq!(app.economy.balance() - start, 140.0);
    }

    #[test]
    fn test_long_gap_does_not_flood_the_mini_game() {
        let mut app = loaded_app();
        app.open_game(0);
        app.update(60.0);
        let session = app.session().unwrap();
        assert!(session.state.time_ticks <= crate::consts::MAX_SUBSTEPS as u64);
        assert!(session.state.enemies.len() <= 1);
    }

    #[test]
    fn test_only_active_card_opens_game() {
        let mut app = loaded_app();
        assert!(!app.open_game(1));
        assert!(!app.open_game(5));
        assert!(!app.open_game(99));
        assert!(app.session().is_none());

        assert!(app.open_game(0));
        assert!(app.session().is_some());
        assert!(app.ui.is_open(Modal::MiniGame));
    }

    #[test]
    fn test_convert_and_game_are_exclusive() {
        let mut app = loaded_app();
        assert!(app.open_convert());
        assert!(!app.open_game(0));
        assert!(app.session().is_none());
        assert_eq!(app.close_modal(), Some(Modal::Convert));
        assert!(app.open_game(0));
        assert!(!app.open_convert());
    }

    #[test]
    fn test_hits_credit_the_balance() {
        let mut app = loaded_app();
        app.open_game(0);
        {
            let session = app.session_mut().unwrap();
            session
                .state
                .push_enemy(Vec2::new(50.0, 40.0), 0.5, EnemyVariant::Normal);
            session.state.fire();
            session.state.bullets[0].pos.y = 45.0;
        }

        app.update(MOTION_DT);
        assert_eq!(app.economy.balance(), 20.0);
        let events = app.drain_events();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyDestroyed { points: 10, .. }))
        );
        assert!(app.drain_events().is_empty());
    }

    #[test]
    fn test_overlapping_bullets_credit_per_bullet() {
        let mut app = loaded_app();
        app.open_game(0);
        {
            let session = app.session_mut().unwrap();
            session
                .state
                .push_enemy(Vec2::new(20.0, 30.0), 0.5, EnemyVariant::Normal);
            session.state.aim(20.0);
            session.state.fire();
            session.state.aim(22.0);
            session.state.fire();
            session.state.bullets[0].pos.y = 35.0;
            session.state.bullets[1].pos.y = 36.0;
        }

        app.update(MOTION_DT);
        assert_eq!(app.economy.balance(), 30.0);
        assert_eq!(app.session().unwrap().state.score, 20);
    }

    #[test]
    fn test_closing_game_ends_session_keeps_balance() {
        let mut app = loaded_app();
        app.open_game(0);
        app.economy.credit(30);
        app.aim(75.0);
        app.fire();
        assert_eq!(app.session().unwrap().state.bullets[0].pos.x, 75.0);

        assert_eq!(app.close_modal(), Some(Modal::MiniGame));
        assert!(app.session().is_none());
        assert_eq!(app.economy.balance(), 40.0);

        // Input without a session is ignored
        app.fire();
        app.update(1.0);
        assert!(app.drain_events().is_empty());
    }

    #[test]
    fn test_new_session_gets_fresh_seed() {
        let mut app = loaded_app();
        app.open_game(0);
        let first = app.session().unwrap().state.seed;
        app.close_modal();
        app.open_game(0);
        let second = app.session().unwrap().state.seed;
        assert_ne!(first, second);
        assert_eq!(app.session().unwrap().state.score, 0);
    }

    #[test]
    fn test_spawn_loop_runs_while_open() {
        let mut app = loaded_app();
        app.open_game(0);
        for _ in 0..30 {
            app.update(0.1);
        }
        let session = app.session().unwrap();
        assert!(!session.state.enemies.is_empty());
        assert!(session.state.enemies.len() <= crate::consts::MAX_ENEMIES);
    }
}
