//! Responsive play-area layout.
//!
//! The play area keeps a fixed short:long aspect ratio derived from how many
//! components must fit along each axis. It fills the viewport along one axis
//! and is centered along the other.

use glam::Vec2;
use serde::Serialize;

/// Which viewport dimension is longer. Square viewports count as landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn of(width: f32, height: f32) -> Self {
        if width >= height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Unscaled component dimensions and slot counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub base_size: f32,
    pub base_margin: f32,
    pub slots_long: u32,
    pub slots_short: u32,
}

impl LayoutMetrics {
    pub fn new(base_size: f32, base_margin: f32, slots_long: u32, slots_short: u32) -> Self {
        Self {
            base_size,
            base_margin,
            slots_long,
            slots_short,
        }
    }

    fn span(&self, slots: u32) -> f32 {
        slots as f32 * self.base_size + (slots + 1) as f32 * self.base_margin
    }

    /// Smallest allowed long-axis extent: all slots plus the margins around them.
    pub fn min_long(&self) -> f32 {
        self.span(self.slots_long)
    }

    /// Smallest allowed short-axis extent.
    pub fn min_short(&self) -> f32 {
        self.span(self.slots_short)
    }

    /// Short:long ratio the play area always keeps.
    pub fn ratio(&self) -> f32 {
        self.min_short() / self.min_long()
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::new(100.0, 20.0, 3, 1)
    }
}

/// The laid-out play rectangle and the uniform scale applied to components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameArea {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub orientation: Orientation,
}

impl GameArea {
    /// Fit the play area into a viewport.
    pub fn compute(viewport_width: f32, viewport_height: f32, metrics: &LayoutMetrics) -> Self {
        let viewport_width = viewport_width.max(0.0);
        let viewport_height = viewport_height.max(0.0);
        let orientation = Orientation::of(viewport_width, viewport_height);
        let (long, short) = match orientation {
            Orientation::Landscape => (viewport_width, viewport_height),
            Orientation::Portrait => (viewport_height, viewport_width),
        };

        let ratio = metrics.ratio();
        let desired_short = long * ratio;
        let (area_long, area_short) = if desired_short > short {
            // Not enough room across: the short axis is the limit.
            (short / ratio, short)
        } else {
            (long, desired_short)
        };
        let area_long = area_long.max(metrics.min_long());
        let area_short = area_short.max(metrics.min_short());
        let scale = area_long / metrics.min_long();

        let long_offset = ((long - area_long) / 2.0).max(0.0);
        let short_offset = ((short - area_short) / 2.0).max(0.0);

        match orientation {
            Orientation::Landscape => Self {
                top: short_offset,
                left: long_offset,
                width: area_long,
                height: area_short,
                scale,
                orientation,
            },
            Orientation::Portrait => Self {
                top: long_offset,
                left: short_offset,
                width: area_short,
                height: area_long,
                scale,
                orientation,
            },
        }
    }

    /// Cell occupied by the component at `index` along the long axis.
    pub fn slot(&self, index: usize, metrics: &LayoutMetrics) -> Slot {
        let size = metrics.base_size * self.scale;
        let margin = metrics.base_margin * self.scale;
        let offset = (size + margin) * index as f32;
        let shift = match self.orientation {
            Orientation::Landscape => Vec2::new(offset, 0.0),
            Orientation::Portrait => Vec2::new(0.0, offset),
        };
        Slot {
            origin: Vec2::new(self.left + margin, self.top + margin) + shift,
            size,
            margin,
        }
    }
}

impl Default for GameArea {
    fn default() -> Self {
        let metrics = LayoutMetrics::default();
        Self::compute(metrics.min_long(), metrics.min_short(), &metrics)
    }
}

/// Square cell a component lays itself out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Top-left corner of the cell.
    pub origin: Vec2,
    /// Scaled component size.
    pub size: f32,
    /// Scaled margin.
    pub margin: f32,
}

impl Slot {
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.size / 2.0)
    }
}
