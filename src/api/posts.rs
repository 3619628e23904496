//! Post endpoints.

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{LikeUpdate, NewPost, Post};

impl ApiClient {
    /// GET /publicaciones - List all posts in server order.
    ///
    /// The server's order is the display order; no client-side sort or
    /// pagination is applied.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("/publicaciones").await
    }

    /// POST /publicaciones - Create a new post, returning the server record.
    pub async fn create_post(&self, new_post: &NewPost) -> Result<Post, ApiError> {
        self.post_json("/publicaciones", new_post).await
    }

    /// PUT /publicaciones/put/:id/:userId - Replace a post's liker list.
    ///
    /// Whole-array replacement with no versioning; the server is the source
    /// of truth and a concurrent update from another client wins silently.
    pub async fn update_likes(
        &self,
        post_id: &str,
        user_id: &str,
        likers: &[String],
    ) -> Result<(), ApiError> {
        let body = LikeUpdate {
            likers: likers.to_vec(),
        };
        self.put_json(&format!("/publicaciones/put/{}/{}", post_id, user_id), &body)
            .await
    }
}
