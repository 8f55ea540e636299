pub mod action;
pub mod best_score;
pub mod screen;
pub mod state;
