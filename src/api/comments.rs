//! Comment endpoints.

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{Comment, NewComment};

impl ApiClient {
    /// GET /comentarios/:postId - List a post's comments in API order.
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/comentarios/{}", post_id)).await
    }

    /// POST /comentarios/put - Append a comment, returning the server record.
    ///
    /// The returned record carries the server-assigned id and is the
    /// canonical form of the comment; callers must not synthesize a local
    /// stand-in.
    pub async fn create_comment(&self, new_comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json("/comentarios/put", new_comment).await
    }
}
