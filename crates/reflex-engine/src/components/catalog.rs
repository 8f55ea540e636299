//! The concrete components of both screens.

use crate::api::config::GameConfig;
use crate::api::types::{Color, Signal};
use crate::components::control::Control;
use crate::components::label::Label;
use crate::components::region::{Circle, RoundedRect};
use crate::input::gesture::{
    ButtonRecognizer, Inert, SlideRecognizer, TapRecognizer, TurnRecognizer,
};

pub const TAP_COLOR: Color = Color::rgb(231, 76, 60);
pub const TURN_COLOR: Color = Color::rgb(52, 152, 219);
pub const SLIDE_COLOR: Color = Color::rgb(46, 204, 113);
pub const START_COLOR: Color = Color::rgb(155, 89, 182);
pub const BEST_SCORE_COLOR: Color = Color::rgb(127, 140, 141);
pub const LABEL_COLOR: Color = Color::WHITE;

pub fn tap_it() -> Control<Circle, TapRecognizer> {
    Control::new(
        "tap-it",
        Label::new("Tap It!", LABEL_COLOR),
        TAP_COLOR,
        Circle::default(),
        TapRecognizer,
    )
}

pub fn turn_it(config: &GameConfig) -> Control<Circle, TurnRecognizer> {
    Control::new(
        "turn-it",
        Label::new("Turn It!", LABEL_COLOR),
        TURN_COLOR,
        Circle::default(),
        TurnRecognizer::new(config.turn_threshold),
    )
}

pub fn slide_it(config: &GameConfig) -> Control<RoundedRect, SlideRecognizer> {
    Control::new(
        "slide-it",
        Label::new("Slide It!", LABEL_COLOR),
        SLIDE_COLOR,
        RoundedRect::default(),
        SlideRecognizer::new(config.slide_threshold),
    )
}

pub fn start_button() -> Control<Circle, ButtonRecognizer> {
    Control::new(
        "start",
        Label::new("Start", LABEL_COLOR),
        START_COLOR,
        Circle::default(),
        ButtonRecognizer::new(Signal::Start),
    )
}

pub fn best_score_panel() -> Control<RoundedRect, Inert> {
    Control::new(
        "best-score",
        Label::best_score(LABEL_COLOR),
        BEST_SCORE_COLOR,
        RoundedRect::default(),
        Inert,
    )
}
