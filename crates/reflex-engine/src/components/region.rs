//! Hit-testable shapes.
//!
//! A region lays itself out in a slot, answers point containment with exact
//! geometry, and can trace its outline onto a surface without painting it.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::Color;
use crate::core::layout::Slot;
use crate::renderer::traits::Surface;

/// Rounded bar corner radius as a fraction of bar height.
pub const BAR_CORNER_RATIO: f32 = 0.25;

pub trait Region {
    /// Position and size the shape inside a layout slot.
    fn place(&mut self, slot: &Slot);

    /// Exact point containment.
    fn contains(&self, point: Vec2) -> bool;

    /// Append the outline to the current path (no fill, no stroke).
    fn trace(&self, surface: &mut dyn Surface);

    /// Where the label goes.
    fn center(&self) -> Vec2;

    fn fill(&self, surface: &mut dyn Surface, color: Color) {
        surface.begin_path();
        self.trace(surface);
        surface.fill(color);
    }

    /// Hit-test through the surface's own path test instead of geometry.
    fn path_contains(&self, surface: &mut dyn Surface, point: Vec2) -> bool {
        surface.begin_path();
        self.trace(surface);
        surface.is_point_in_path(point.x, point.y)
    }
}

/// A disc filling its slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Region for Circle {
    fn place(&mut self, slot: &Slot) {
        self.center = slot.center();
        self.radius = slot.size / 2.0;
    }

    fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }

    fn trace(&self, surface: &mut dyn Surface) {
        surface.arc(self.center.x, self.center.y, self.radius, 0.0, TAU);
        surface.close_path();
    }

    fn center(&self) -> Vec2 {
        self.center
    }
}

/// A rounded rectangle. Placed in a slot it becomes a half-height bar
/// centered vertically in the cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundedRect {
    /// Top-left corner.
    pub origin: Vec2,
    pub size: Vec2,
    pub corner_radius: f32,
}

impl RoundedRect {
    pub fn new(origin: Vec2, size: Vec2, corner_radius: f32) -> Self {
        Self {
            origin,
            size,
            corner_radius,
        }
    }

    /// Corner radius clamped so opposite corners never overlap.
    fn radius(&self) -> f32 {
        self.corner_radius
            .min(self.size.x / 2.0)
            .min(self.size.y / 2.0)
            .max(0.0)
    }
}

impl Region for RoundedRect {
    fn place(&mut self, slot: &Slot) {
        let height = slot.size / 2.0;
        self.origin = slot.origin + Vec2::new(0.0, slot.size / 4.0);
        self.size = Vec2::new(slot.size, height);
        self.corner_radius = height * BAR_CORNER_RATIO;
    }

    fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        let r = self.radius();
        // Distance past the inner (corner-center) rectangle on each axis.
        let excess = ((point - self.center()).abs() - (half - Vec2::splat(r))).max(Vec2::ZERO);
        excess.length_squared() <= r * r
    }

    fn trace(&self, surface: &mut dyn Surface) {
        let Vec2 { x, y } = self.origin;
        let Vec2 { x: w, y: h } = self.size;
        let r = self.radius();
        surface.move_to(x + r, y);
        surface.line_to(x + w - r, y);
        surface.quadratic_curve_to(x + w, y, x + w, y + r);
        surface.line_to(x + w, y + h - r);
        surface.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
        surface.line_to(x + r, y + h);
        surface.quadratic_curve_to(x, y + h, x, y + h - r);
        surface.line_to(x, y + r);
        surface.quadratic_curve_to(x, y, x + r, y);
        surface.close_path();
    }

    fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}
