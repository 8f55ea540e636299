use std::borrow::Cow;

use glam::Vec2;

use crate::api::types::Color;
use crate::renderer::traits::{Surface, TextStyle};

/// Label font size as a fraction of the scaled component size.
pub const LABEL_FONT_RATIO: f32 = 0.2;

/// Read-only values a frame may display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawContext {
    pub best_score: Option<u32>,
}

/// Where a label's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelText {
    Static(String),
    /// Rendered from the persisted best score each frame.
    BestScore,
}

/// Centered text drawn on top of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: LabelText,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: LabelText::Static(text.into()),
            color,
        }
    }

    pub fn best_score(color: Color) -> Self {
        Self {
            text: LabelText::BestScore,
            color,
        }
    }

    /// The text to draw this frame.
    pub fn resolve(&self, ctx: &DrawContext) -> Cow<'_, str> {
        match &self.text {
            LabelText::Static(text) => Cow::Borrowed(text.as_str()),
            LabelText::BestScore => match ctx.best_score {
                Some(best) => Cow::Owned(format!("Best: {best}")),
                None => Cow::Borrowed("No best yet"),
            },
        }
    }

    /// Draw the label centered at `anchor`. Empty labels draw nothing.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        anchor: Vec2,
        component_size: f32,
        ctx: &DrawContext,
    ) {
        let text = self.resolve(ctx);
        if text.is_empty() {
            return;
        }
        let style = TextStyle {
            size_px: component_size * LABEL_FONT_RATIO,
            color: self.color,
            bold: true,
        };
        surface.fill_text(&text, anchor.x, anchor.y, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn font_scales_with_component() {
        let mut surface = RecordingSurface::new();
        let label = Label::new("Tap It!", Color::WHITE);
        label.draw(&mut surface, Vec2::new(50.0, 60.0), 200.0, &DrawContext::default());
        match &surface.commands()[0] {
            DrawCommand::Text { text, x, y, style } => {
                assert_eq!(text, "Tap It!");
                assert_eq!((*x, *y), (50.0, 60.0));
                assert!((style.size_px - 40.0).abs() < 1e-4);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn empty_label_is_skipped() {
        let mut surface = RecordingSurface::new();
        Label::new("", Color::WHITE).draw(&mut surface, Vec2::ZERO, 100.0, &DrawContext::default());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn best_score_text() {
        let label = Label::best_score(Color::WHITE);
        let ctx = DrawContext {
            best_score: Some(12),
        };
        assert_eq!(label.resolve(&ctx), "Best: 12");
        assert_eq!(label.resolve(&DrawContext::default()), "No best yet");
    }
}
