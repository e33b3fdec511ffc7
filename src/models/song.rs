use serde::{Deserialize, Serialize};

/// Canonical song as returned to the front-end. Every field is always present.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub requested_by: String,
}

impl SongRecord {
    pub fn with_title(title: impl Into<String>) -> Self {
        SongRecord {
            title: title.into(),
            ..SongRecord::default()
        }
    }
}
