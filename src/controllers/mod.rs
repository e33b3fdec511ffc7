pub mod normalizer;
pub mod queue;
pub mod root;
pub use normalizer::{extract_songs, normalize_song};
pub use queue::QueueController;
pub use root::RootController;
