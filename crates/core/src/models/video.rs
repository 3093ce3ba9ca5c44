//! Video reference record and DTO.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A video reference as stored in `videos.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: RecordId,
    pub url: String,
    pub title: String,
}

/// DTO for creating a video.
///
/// Both fields are optional at the deserialization layer so a missing field
/// surfaces as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVideo {
    pub url: Option<String>,
    pub title: Option<String>,
}
