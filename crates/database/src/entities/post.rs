use serde::{Deserialize, Serialize};

/// A post as stored, the read model for the posts listing. Timestamps are
/// RFC 3339 strings, matching the persisted representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRow {
    pub post_id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub status: String,
    pub created_at: String,
}
