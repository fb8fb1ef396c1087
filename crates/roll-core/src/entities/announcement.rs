use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

/// A dashboard announcement, authored by a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub title: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload: title and content only; authorship comes from the
/// session on the backend side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementUpsertReq {
    pub title: String,
    pub content: String,
}

impl Entity for Announcement {
    fn id(&self) -> &str {
        &self.id
    }
}
