use glam::Vec2;
use serde::Serialize;

use crate::api::config::GameConfig;
use crate::api::host::Host;
use crate::api::types::{RoundId, ScreenId, Signal};
use crate::components::label::DrawContext;
use crate::core::layout::{GameArea, LayoutMetrics};
use crate::game::action::Action;
use crate::game::best_score::{self, RunSummary};
use crate::game::screen::Screens;
use crate::game::state::{GameState, Phase};
use crate::input::event::InputEvent;
use crate::renderer::traits::Surface;

/// Serializable view of the app for host UIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub screen: ScreenId,
    pub phase: Phase,
    pub score: u32,
    pub additional_time_ms: u32,
    pub round_duration_ms: u32,
    pub expected_action: Option<Action>,
    pub is_ended: bool,
    pub best_score: Option<u32>,
    pub last_run: Option<RunSummary>,
    pub area: GameArea,
}

/// The application context: layout, screens, game state and host.
///
/// Constructed once by the host and driven by three kinds of callbacks:
/// input events, round timeouts and frame renders.
pub struct App<H: Host> {
    metrics: LayoutMetrics,
    viewport: Vec2,
    area: GameArea,
    screens: Screens,
    game: GameState,
    best: Option<u32>,
    host: H,
}

impl<H: Host> App<H> {
    pub fn new(config: GameConfig, host: H, seed: u64) -> Self {
        let metrics = config.layout();
        let viewport = Vec2::new(metrics.min_long(), metrics.min_short());
        let area = GameArea::compute(viewport.x, viewport.y, &metrics);
        let mut screens = Screens::new(&config);
        screens.layout(&area, &metrics);
        let game = GameState::new(&config, seed);
        let best = best_score::read(host.store(), &config.best_score_key);
        Self {
            metrics,
            viewport,
            area,
            screens,
            game,
            best,
            host,
        }
    }

    pub fn area(&self) -> &GameArea {
        &self.area
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Recompute the play area and reposition every component.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.area = GameArea::compute(width, height, &self.metrics);
        self.screens.layout(&self.area, &self.metrics);
        log::debug!(
            "layout {:?}: {:.0}x{:.0} at ({:.0}, {:.0}), scale {:.2}",
            self.area.orientation,
            self.area.width,
            self.area.height,
            self.area.left,
            self.area.top,
            self.area.scale
        );
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.screens.active_mut().pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.screens.active_mut().pointer_down(Vec2::new(x, y));
    }

    /// Deliver the release to every active component, then act on signals.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        let signals = self.screens.active_mut().pointer_up(Vec2::new(x, y));
        for signal in signals {
            self.dispatch(signal);
        }
    }

    fn dispatch(&mut self, signal: Signal) {
        match signal {
            Signal::Start => self.game.start(&mut self.host),
            Signal::Gesture(gesture) => {
                log::debug!("gesture {}", gesture.name());
                self.game.handle_gesture(gesture, &mut self.host);
            }
        }
        self.sync_screen();
    }

    /// Stop for good: abandon any run and cancel its host timer.
    pub fn shutdown(&mut self) {
        self.game.abandon(&mut self.host);
        self.screens.activate(self.game.active_screen());
    }

    /// A host timer armed for `round` fired.
    pub fn on_round_timeout(&mut self, round: RoundId) {
        if self.game.on_round_timeout(round, &mut self.host) {
            self.sync_screen();
        }
    }

    fn sync_screen(&mut self) {
        if let Some(run) = self.game.last_run() {
            self.best = run.best;
        }
        self.screens.activate(self.game.active_screen());
    }

    /// Best score as of the last load or finished run.
    pub fn best_score(&self) -> Option<u32> {
        self.best
    }

    /// Draw the active screen. Never changes game state.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(0.0, 0.0, self.viewport.x, self.viewport.y);
        let ctx = DrawContext {
            best_score: match self.screens.active_id() {
                ScreenId::Menu => self.best_score(),
                ScreenId::Game => None,
            },
        };
        self.screens.active().draw(surface, &ctx);
    }

    /// Whether the pointer is over an active component.
    pub fn is_hovering(&self) -> bool {
        self.screens.active().is_hovering()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            screen: self.screens.active_id(),
            phase: self.game.phase(),
            score: self.game.score(),
            additional_time_ms: self.game.additional_time_ms(),
            round_duration_ms: self.game.round_duration_ms(),
            expected_action: self.game.expected_action(),
            is_ended: self.game.is_ended(),
            best_score: self.best_score(),
            last_run: self.game.last_run(),
            area: self.area,
        }
    }
}
