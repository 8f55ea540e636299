/// Boundary crossing reported by a pointer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Entered,
    Left,
    Unchanged,
}

/// Per-component pointer lifecycle: idle, hovered, pressed inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    hovered: bool,
    pressed: bool,
}

impl PointerState {
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Update the hover flag from a fresh hit-test.
    pub fn track(&mut self, inside: bool) -> Hover {
        let change = match (self.hovered, inside) {
            (false, true) => Hover::Entered,
            (true, false) => Hover::Left,
            _ => Hover::Unchanged,
        };
        self.hovered = inside;
        change
    }

    /// Start a press if the pointer went down inside. Returns whether it did.
    pub fn press(&mut self, inside: bool) -> bool {
        if inside {
            self.pressed = true;
        }
        inside
    }

    /// End the press cycle. Returns whether a press had started.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave() {
        let mut p = PointerState::default();
        assert_eq!(p.track(true), Hover::Entered);
        assert_eq!(p.track(true), Hover::Unchanged);
        assert!(p.hovered());
        assert_eq!(p.track(false), Hover::Left);
        assert_eq!(p.track(false), Hover::Unchanged);
    }

    #[test]
    fn press_only_inside() {
        let mut p = PointerState::default();
        assert!(!p.press(false));
        assert!(!p.pressed());
        assert!(p.press(true));
        assert!(p.release());
        assert!(!p.release());
    }
}
