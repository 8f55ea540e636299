//! Press/release recognizers.
//!
//! A recognizer sees the press that started inside its component and the
//! release that ends the cycle, wherever the pointer ended up. Each cycle
//! yields either one signal or nothing.

use glam::Vec2;

use crate::api::types::{Gesture, Signal};

/// The end of a press/release cycle as seen by one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub pos: Vec2,
    /// A press started inside this component during the cycle.
    pub pressed: bool,
    /// The release position is over this component.
    pub hovered: bool,
    /// Current scaled component size.
    pub size: f32,
}

pub trait Recognizer {
    fn enter(&mut self) {}
    fn leave(&mut self) {}
    fn press(&mut self, _pos: Vec2) {}
    fn release(&mut self, release: &Release) -> Option<Signal>;
    fn reset(&mut self) {}
}

/// Fires on any release that follows a press, with no movement limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapRecognizer;

impl Recognizer for TapRecognizer {
    fn release(&mut self, release: &Release) -> Option<Signal> {
        release.pressed.then_some(Signal::Gesture(Gesture::Tap))
    }
}

/// Fires when the drag exceeds `threshold × size` on BOTH axes.
/// A long purely horizontal or purely vertical drag is not a turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnRecognizer {
    threshold: f32,
    origin: Option<Vec2>,
}

impl TurnRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }
}

impl Recognizer for TurnRecognizer {
    fn press(&mut self, pos: Vec2) {
        self.origin = Some(pos);
    }

    fn release(&mut self, release: &Release) -> Option<Signal> {
        let origin = self.origin.take()?;
        if !release.pressed {
            return None;
        }
        let delta = (release.pos - origin).abs();
        let min = self.threshold * release.size;
        (delta.x > min && delta.y > min).then_some(Signal::Gesture(Gesture::Turn))
    }

    fn reset(&mut self) {
        self.origin = None;
    }
}

/// Fires when the horizontal drag exceeds `threshold × size`.
/// Vertical movement is ignored.
#[derive(Debug, Clone, Copy)]
pub struct SlideRecognizer {
    threshold: f32,
    origin_x: Option<f32>,
}

impl SlideRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin_x: None,
        }
    }
}

impl Recognizer for SlideRecognizer {
    fn press(&mut self, pos: Vec2) {
        self.origin_x = Some(pos.x);
    }

    fn release(&mut self, release: &Release) -> Option<Signal> {
        let origin_x = self.origin_x.take()?;
        if !release.pressed {
            return None;
        }
        let dx = (release.pos.x - origin_x).abs();
        (dx > self.threshold * release.size).then_some(Signal::Gesture(Gesture::Slide))
    }

    fn reset(&mut self) {
        self.origin_x = None;
    }
}

/// Button semantics: fires only when released while still over the
/// component that was pressed.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRecognizer {
    signal: Signal,
}

impl ButtonRecognizer {
    pub fn new(signal: Signal) -> Self {
        Self { signal }
    }
}

impl Recognizer for ButtonRecognizer {
    fn release(&mut self, release: &Release) -> Option<Signal> {
        (release.pressed && release.hovered).then_some(self.signal)
    }
}

/// Display-only components.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inert;

impl Recognizer for Inert {
    fn release(&mut self, _release: &Release) -> Option<Signal> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 100.0;

    fn release_at(x: f32, y: f32) -> Release {
        Release {
            pos: Vec2::new(x, y),
            pressed: true,
            hovered: false,
            size: SIZE,
        }
    }

    fn cycle(r: &mut dyn Recognizer, to: Vec2) -> Option<Signal> {
        r.press(Vec2::ZERO);
        r.release(&release_at(to.x, to.y))
    }

    #[test]
    fn tap_needs_a_press() {
        let mut tap = TapRecognizer;
        assert_eq!(tap.release(&release_at(500.0, 500.0)), Some(Signal::Gesture(Gesture::Tap)));
        let mut unpressed = release_at(0.0, 0.0);
        unpressed.pressed = false;
        assert_eq!(tap.release(&unpressed), None);
    }

    #[test]
    fn straight_drags_are_not_turns() {
        let mut turn = TurnRecognizer::new(0.30);
        for dx in [-1000.0, -31.0, 0.0, 31.0, 45.0, 1000.0] {
            assert_eq!(cycle(&mut turn, Vec2::new(dx, 0.0)), None, "dx = {dx}");
            assert_eq!(cycle(&mut turn, Vec2::new(0.0, dx)), None, "dy = {dx}");
        }
    }

    #[test]
    fn diagonal_drag_is_a_turn() {
        let mut turn = TurnRecognizer::new(0.30);
        assert_eq!(cycle(&mut turn, Vec2::new(31.0, 31.0)), Some(Signal::Gesture(Gesture::Turn)));
        assert_eq!(cycle(&mut turn, Vec2::new(-40.0, 35.0)), Some(Signal::Gesture(Gesture::Turn)));
        // Exactly at the threshold is not enough.
        assert_eq!(cycle(&mut turn, Vec2::new(30.0, 50.0)), None);
    }

    #[test]
    fn turn_fires_once_per_press() {
        let mut turn = TurnRecognizer::new(0.30);
        assert!(cycle(&mut turn, Vec2::new(50.0, 50.0)).is_some());
        // A second release without a new press stays silent.
        assert_eq!(turn.release(&release_at(50.0, 50.0)), None);
    }

    #[test]
    fn slide_thresholds() {
        let mut slide = SlideRecognizer::new(0.45);
        assert_eq!(
            cycle(&mut slide, Vec2::new(0.46 * SIZE, -300.0)),
            Some(Signal::Gesture(Gesture::Slide))
        );
        assert_eq!(cycle(&mut slide, Vec2::new(0.44 * SIZE, 1000.0)), None);
        assert_eq!(
            cycle(&mut slide, Vec2::new(-0.5 * SIZE, 0.0)),
            Some(Signal::Gesture(Gesture::Slide))
        );
    }

    #[test]
    fn reset_forgets_press() {
        let mut slide = SlideRecognizer::new(0.45);
        slide.press(Vec2::ZERO);
        slide.reset();
        assert_eq!(slide.release(&release_at(100.0, 0.0)), None);
    }

    #[test]
    fn button_requires_press_and_hover() {
        let mut button = ButtonRecognizer::new(Signal::Start);
        let mut r = release_at(0.0, 0.0);
        assert_eq!(button.release(&r), None);
        r.hovered = true;
        assert_eq!(button.release(&r), Some(Signal::Start));
        r.pressed = false;
        assert_eq!(button.release(&r), None);
    }

    #[test]
    fn inert_never_fires() {
        let mut inert = Inert;
        let mut r = release_at(0.0, 0.0);
        r.hovered = true;
        assert_eq!(inert.release(&r), None);
    }
}
