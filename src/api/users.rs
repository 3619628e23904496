//! User profile endpoints.

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{NewUserProfile, UserProfile};

impl ApiClient {
    /// GET /users/:userId - Fetch a user profile by id.
    ///
    /// An unknown id maps to `ApiError::NotFound`; feed aggregation degrades
    /// that to a missing author rather than failing the whole load.
    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("/users/{}", user_id)).await
    }

    /// POST /users - Create the profile record after provider sign-up.
    pub async fn create_user(&self, profile: &NewUserProfile) -> Result<UserProfile, ApiError> {
        self.post_json("/users", profile).await
    }
}
