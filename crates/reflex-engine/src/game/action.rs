use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::api::types::Gesture;

/// A gesture and the instruction announced for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "name")]
    pub gesture: Gesture,
    pub instruction: &'static str,
}

pub const ACTIONS: [Action; 3] = [
    Action {
        gesture: Gesture::Tap,
        instruction: "Tap it!",
    },
    Action {
        gesture: Gesture::Turn,
        instruction: "Turn it!",
    },
    Action {
        gesture: Gesture::Slide,
        instruction: "Slide it!",
    },
];

/// Uniform draws with replacement: the previous action may come up again.
#[derive(Debug, Clone)]
pub struct ActionPicker {
    rng: SmallRng,
}

impl ActionPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self) -> Action {
        ACTIONS[self.rng.gen_range(0..ACTIONS.len())]
    }
}
