//! Comment model matching the comentarios collection.

use serde::{Deserialize, Serialize};

/// A comment on a post. Comments arrive in API order and are never paginated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "idPublicacion")]
    pub post_id: String,
    #[serde(rename = "comentario")]
    pub text: String,
}

/// Request body for appending a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub user_id: String,
    #[serde(rename = "idPublicacion")]
    pub post_id: String,
    #[serde(rename = "comentario")]
    pub text: String,
}
