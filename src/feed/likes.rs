//! Pure like projection and toggle logic.
//!
//! The liker list on the post is the single source of the displayed count;
//! everything here is side-effect free and recomputed after every mutation.

use crate::models::Post;

/// Whether `user_id` has liked the post.
pub fn liked_by(post: &Post, user_id: &str) -> bool {
    post.likers.iter().any(|id| id == user_id)
}

/// Displayed like count, always the length of the liker list.
pub fn like_count(post: &Post) -> usize {
    post.likers.len()
}

/// Toggle membership of `user_id` in a liker list.
///
/// Removes the id if present (preserving the order of the rest), appends it
/// otherwise. Toggling twice restores the original membership.
pub fn toggle(likers: &[String], user_id: &str) -> Vec<String> {
    if likers.iter().any(|id| id == user_id) {
        likers.iter().filter(|id| *id != user_id).cloned().collect()
    } else {
        let mut updated = likers.to_vec();
        updated.push(user_id.to_string());
        updated
    }
}
