use glam::Vec2;

use crate::api::types::{Color, Signal};
use crate::components::label::{DrawContext, Label};
use crate::components::pointer::{Hover, PointerState};
use crate::components::region::Region;
use crate::core::layout::{GameArea, LayoutMetrics};
use crate::input::gesture::{Recognizer, Release};
use crate::renderer::traits::Surface;

/// How much hovered components are lightened.
const HOVER_LIGHTEN: f32 = 0.2;
/// Outline width of a pressed component, relative to its size.
const PRESS_OUTLINE: f32 = 0.03;

/// An interactive component as a screen sees it.
pub trait Widget {
    fn name(&self) -> &str;

    /// Re-derive size and position from the layout and this widget's slot index.
    fn update(&mut self, area: &GameArea, index: usize, metrics: &LayoutMetrics);

    fn pointer_move(&mut self, pos: Vec2) -> Hover;

    /// Returns whether the press started on this widget.
    fn pointer_down(&mut self, pos: Vec2) -> bool;

    /// Always runs the release hook, then clears the press.
    fn pointer_up(&mut self, pos: Vec2) -> Option<Signal>;

    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext);

    fn contains(&self, pos: Vec2) -> bool;
    fn is_hovered(&self) -> bool;
    fn is_pressed(&self) -> bool;
    fn size(&self) -> f32;

    /// Forget hover and press state, e.g. when its screen becomes active.
    fn reset_pointer(&mut self);
}

/// A labeled shape with a gesture recognizer attached.
pub struct Control<R, G> {
    name: &'static str,
    label: Label,
    fill: Color,
    region: R,
    recognizer: G,
    pointer: PointerState,
    size: f32,
    margin: f32,
}

impl<R: Region, G: Recognizer> Control<R, G> {
    pub fn new(name: &'static str, label: Label, fill: Color, region: R, recognizer: G) -> Self {
        Self {
            name,
            label,
            fill,
            region,
            recognizer,
            pointer: PointerState::default(),
            size: 0.0,
            margin: 0.0,
        }
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl<R: Region, G: Recognizer> Widget for Control<R, G> {
    fn name(&self) -> &str {
        self.name
    }

    fn update(&mut self, area: &GameArea, index: usize, metrics: &LayoutMetrics) {
        let slot = area.slot(index, metrics);
        self.size = slot.size;
        self.margin = slot.margin;
        self.region.place(&slot);
        log::debug!(
            "{}: slot {} at ({:.1}, {:.1}) size {:.1}",
            self.name,
            index,
            slot.origin.x,
            slot.origin.y,
            slot.size
        );
    }

    fn pointer_move(&mut self, pos: Vec2) -> Hover {
        let change = self.pointer.track(self.region.contains(pos));
        match change {
            Hover::Entered => {
                log::trace!("{}: pointer entered", self.name);
                self.recognizer.enter();
            }
            Hover::Left => {
                log::trace!("{}: pointer left", self.name);
                self.recognizer.leave();
            }
            Hover::Unchanged => {}
        }
        change
    }

    fn pointer_down(&mut self, pos: Vec2) -> bool {
        // Touch input has no hover before the press.
        self.pointer_move(pos);
        let started = self.pointer.press(self.pointer.hovered());
        if started {
            self.recognizer.press(pos);
        }
        started
    }

    fn pointer_up(&mut self, pos: Vec2) -> Option<Signal> {
        self.pointer_move(pos);
        let release = Release {
            pos,
            pressed: self.pointer.pressed(),
            hovered: self.pointer.hovered(),
            size: self.size,
        };
        let signal = self.recognizer.release(&release);
        self.pointer.release();
        signal
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) {
        let fill = if self.pointer.hovered() {
            self.fill.lighten(HOVER_LIGHTEN)
        } else {
            self.fill
        };
        self.region.fill(surface, fill);
        if self.pointer.pressed() {
            surface.begin_path();
            self.region.trace(surface);
            surface.stroke(Color::WHITE, self.size * PRESS_OUTLINE);
        }
        self.label.draw(surface, self.region.center(), self.size, ctx);
    }

    fn contains(&self, pos: Vec2) -> bool {
        self.region.contains(pos)
    }

    fn is_hovered(&self) -> bool {
        self.pointer.hovered()
    }

    fn is_pressed(&self) -> bool {
        self.pointer.pressed()
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn reset_pointer(&mut self) {
        self.pointer.reset();
        self.recognizer.reset();
    }
}
