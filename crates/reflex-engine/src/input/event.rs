use glam::Vec2;

/// Input the app understands. Pointer positions are in surface coordinates,
/// already corrected for any CSS-to-bitmap scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The viewport changed size or orientation.
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    /// Pointer position, if this is a pointer event.
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerMove { x, y }
            | InputEvent::PointerUp { x, y } => Some(Vec2::new(x, y)),
            InputEvent::Resize { .. } => None,
        }
    }
}
