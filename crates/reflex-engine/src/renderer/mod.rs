pub mod recording;
pub mod traits;

pub use recording::{DrawCommand, RecordingSurface};
pub use traits::{Surface, TextStyle};
