use serde::{Deserialize, Serialize};

use super::song::SongRecord;

pub const QUEUE_SOURCE: &str = "songify";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct QueueResponse {
    pub success: bool,
    pub source: String,
    pub songs: Vec<SongRecord>,
}

impl QueueResponse {
    pub fn new(songs: Vec<SongRecord>) -> Self {
        QueueResponse {
            success: true,
            source: QUEUE_SOURCE.to_string(),
            songs,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: error.into(),
        }
    }
}
