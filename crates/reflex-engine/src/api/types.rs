use serde::Serialize;

/// A recognized gameplay gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gesture {
    Tap,
    Turn,
    Slide,
}

impl Gesture {
    pub const ALL: [Gesture; 3] = [Gesture::Tap, Gesture::Turn, Gesture::Slide];

    /// Catalog name of the gesture (`TAP`, `TURN`, `SLIDE`).
    pub fn name(self) -> &'static str {
        match self {
            Gesture::Tap => "TAP",
            Gesture::Turn => "TURN",
            Gesture::Slide => "SLIDE",
        }
    }
}

/// What a component reports at the end of a press/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The menu's start button was activated.
    Start,
    /// A game component recognized its gesture.
    Gesture(Gesture),
}

/// Identifies one armed round timeout.
/// Generations only grow, so a stale id never matches the pending round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoundId(pub u64);

/// Opaque handle returned by a host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Which screen is receiving input and being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    #[default]
    Menu,
    Game,
}

impl ScreenId {
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Menu => "menu",
            ScreenId::Game => "game",
        }
    }
}

/// 8-bit RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move each channel `amount` (0.0 to 1.0) of the way toward white.
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// CSS `rgb()` notation for canvas fill styles.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_names() {
        let names: Vec<_> = Gesture::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names, ["TAP", "TURN", "SLIDE"]);
    }

    #[test]
    fn lighten_moves_toward_white() {
        let c = Color::rgb(0, 100, 255).lighten(0.5);
        assert_eq!(c, Color::rgb(128, 178, 255));
        assert_eq!(Color::BLACK.lighten(0.0), Color::BLACK);
    }

    #[test]
    fn css_notation() {
        assert_eq!(Color::rgb(1, 2, 3).css(), "rgb(1, 2, 3)");
    }
}
