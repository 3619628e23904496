//! Post model matching the publicaciones collection.

use serde::{Deserialize, Serialize};

/// A user-authored feed item with an image and text.
///
/// The displayed like count is always derived from `likers`; it is never
/// stored independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "comentario")]
    pub body: String,
    /// User ids that have liked this post. Absent on the wire means empty.
    #[serde(rename = "like", default)]
    pub likers: Vec<String>,
    /// Server-assigned creation timestamp, kept as delivered.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: String,
    pub image_url: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "comentario")]
    pub body: String,
}

/// Request body for replacing a post's liker list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeUpdate {
    #[serde(rename = "like")]
    pub likers: Vec<String>,
}
