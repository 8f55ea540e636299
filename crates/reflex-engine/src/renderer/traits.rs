//! Immediate-mode 2D drawing capability.
//!
//! Mirrors the subset of `CanvasRenderingContext2D` the game draws with. The
//! browser bridge forwards each call to the real canvas context.

use crate::api::types::Color;

/// Font settings for centered labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in surface pixels.
    pub size_px: f32,
    pub color: Color,
    pub bold: bool,
}

impl TextStyle {
    /// CSS font shorthand, e.g. `bold 24px sans-serif`.
    pub fn css_font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px sans-serif", self.size_px.round())
    }
}

/// A 2D drawing surface.
///
/// Path calls build the current path; `fill`/`stroke` paint it. Text is
/// always center-aligned on a middle baseline.
pub trait Surface {
    /// Clear a rectangle to transparent.
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn close_path(&mut self);

    fn fill(&mut self, color: Color);
    fn stroke(&mut self, color: Color, line_width: f32);

    /// Whether a point lies inside the current path.
    fn is_point_in_path(&self, x: f32, y: f32) -> bool;

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}
