pub mod queue;
pub mod song;

pub use queue::{ErrorResponse, QueueResponse};
pub use song::SongRecord;
