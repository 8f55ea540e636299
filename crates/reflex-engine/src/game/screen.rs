use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::{ScreenId, Signal};
use crate::components::catalog;
use crate::components::control::Widget;
use crate::components::label::DrawContext;
use crate::core::layout::{GameArea, LayoutMetrics};
use crate::renderer::traits::Surface;

/// An ordered set of widgets. Order decides layout slots.
pub struct Screen {
    id: ScreenId,
    widgets: Vec<Box<dyn Widget>>,
}

impl Screen {
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            widgets: Vec::new(),
        }
    }

    pub fn with(mut self, widget: impl Widget + 'static) -> Self {
        self.widgets.push(Box::new(widget));
        self
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn widgets(&self) -> impl Iterator<Item = &dyn Widget> {
        self.widgets.iter().map(|w| &**w)
    }

    pub fn find(&self, name: &str) -> Option<&dyn Widget> {
        self.widgets().find(|w| w.name() == name)
    }

    pub fn layout(&mut self, area: &GameArea, metrics: &LayoutMetrics) {
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            widget.update(area, index, metrics);
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        for widget in &mut self.widgets {
            widget.pointer_move(pos);
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        for widget in &mut self.widgets {
            widget.pointer_down(pos);
        }
    }

    /// Every widget sees the release; signals come back in widget order.
    pub fn pointer_up(&mut self, pos: Vec2) -> Vec<Signal> {
        self.widgets
            .iter_mut()
            .filter_map(|w| w.pointer_up(pos))
            .collect()
    }

    pub fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) {
        for widget in &self.widgets {
            widget.draw(surface, ctx);
        }
    }

    pub fn reset_pointers(&mut self) {
        for widget in &mut self.widgets {
            widget.reset_pointer();
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.widgets.iter().any(|w| w.is_hovered())
    }
}

/// The menu and game screens; exactly one is active.
pub struct Screens {
    menu: Screen,
    game: Screen,
    active: ScreenId,
}

impl Screens {
    pub fn new(config: &GameConfig) -> Self {
        let menu = Screen::new(ScreenId::Menu)
            .with(catalog::start_button())
            .with(catalog::best_score_panel());
        let game = Screen::new(ScreenId::Game)
            .with(catalog::tap_it())
            .with(catalog::turn_it(config))
            .with(catalog::slide_it(config));
        Self {
            menu,
            game,
            active: ScreenId::Menu,
        }
    }

    pub fn active_id(&self) -> ScreenId {
        self.active
    }

    pub fn get(&self, id: ScreenId) -> &Screen {
        match id {
            ScreenId::Menu => &self.menu,
            ScreenId::Game => &self.game,
        }
    }

    fn get_mut(&mut self, id: ScreenId) -> &mut Screen {
        match id {
            ScreenId::Menu => &mut self.menu,
            ScreenId::Game => &mut self.game,
        }
    }

    pub fn active(&self) -> &Screen {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> &mut Screen {
        self.get_mut(self.active)
    }

    /// Switch screens. The incoming screen starts with no hover or press.
    pub fn activate(&mut self, id: ScreenId) -> bool {
        if self.active == id {
            return false;
        }
        log::debug!("screen {} -> {}", self.active.name(), id.name());
        self.active = id;
        self.active_mut().reset_pointers();
        true
    }

    pub fn layout(&mut self, area: &GameArea, metrics: &LayoutMetrics) {
        self.menu.layout(area, metrics);
        self.game.layout(area, metrics);
    }
}
