pub mod event;
pub mod gesture;
