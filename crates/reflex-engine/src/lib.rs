pub mod api;
pub mod components;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::app::{App, GameSnapshot};
pub use api::config::GameConfig;
pub use api::host::{
    Announcement, Announcer, HeadlessHost, Host, LogAnnouncer, MemoryScoreStore, Scheduler,
    ScoreStore,
};
pub use api::types::{Color, Gesture, RoundId, ScreenId, Signal, TimerHandle};
pub use components::control::{Control, Widget};
pub use components::label::{DrawContext, Label, LabelText};
pub use components::pointer::{Hover, PointerState};
pub use components::region::{Circle, Region, RoundedRect};
pub use crate::core::layout::{GameArea, LayoutMetrics, Orientation, Slot};
pub use crate::core::time::{ManualScheduler, RoundTimer};
pub use error::ReflexError;
pub use game::action::{Action, ActionPicker, ACTIONS};
pub use game::best_score::RunSummary;
pub use game::screen::{Screen, Screens};
pub use game::state::{GameState, Phase, RoundRules};
pub use input::event::InputEvent;
pub use input::gesture::{
    ButtonRecognizer, Inert, Recognizer, Release, SlideRecognizer, TapRecognizer, TurnRecognizer,
};
pub use renderer::{DrawCommand, RecordingSurface, Surface, TextStyle};
