use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::video::validator::check_video_fields;
use crate::domain::validator::Entity;
use crate::domain::RequestResult;

/// A published video. All fields are required.
///
/// The factory only rejects on missing fields, but its rejection lists
/// every field rule the input breaks. A present-but-short description
/// builds fine and is left to `VideoValidator`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    /// Assigned by persistence; `None` until stored
    id: Option<Uuid>,

    title: String,

    description: String,

    /// Where the media is served from
    url: String,

    /// Owner (identity provider user id)
    user_id: String,

    /// Creation timestamp
    created_at: DateTime<Utc>,

    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Video {
    /// Create a new, not yet persisted video
    pub fn create(title: &str, description: &str, url: &str, user_id: &str) -> RequestResult<Video> {
        let now = Utc::now();
        Self::build(None, title, description, url, user_id, now, now)
    }

    /// Rebuild a video from stored columns
    pub fn from_persistence(
        id: Uuid,
        title: &str,
        description: &str,
        url: &str,
        user_id: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> RequestResult<Video> {
        Self::build(Some(id), title, description, url, user_id, created_at, updated_at)
    }

    fn build(
        id: Option<Uuid>,
        title: &str,
        description: &str,
        url: &str,
        user_id: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> RequestResult<Video> {
        // Presence decides; the report covers every rule the input breaks
        let required = [title, description, url, user_id];
        if required.iter().any(|value| value.trim().is_empty()) {
            return check_video_fields(title, description, url, user_id).into();
        }

        RequestResult::Success(Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            user_id: user_id.to_string(),
            created_at,
            updated_at,
        })
    }

    /// Same video addressed by `id`; used on the update path
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Video {
    const NAME: &'static str = "Video";

    fn has_identity(&self) -> bool {
        self.id.is_some()
    }
}
