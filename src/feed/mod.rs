//! Feed aggregation service.
//!
//! The home feed and the post detail screen both need the same shape: posts
//! with their comments, author nicknames and like state resolved before
//! anything renders. The original app fan-out-fetched these one request at a
//! time and refetched the same profile once per post; here related entities
//! resolve with bounded concurrency and profiles are memoized per load.

mod likes;

pub use likes::{like_count, liked_by, toggle};

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::api::ApiClient;
use crate::auth::Session;
use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{Comment, NewComment, NewPost, Post, UserProfile};

/// Form limits mirroring the composer screens.
const MAX_POST_TITLE_LEN: usize = 40;
const MAX_POST_BODY_LEN: usize = 250;
const MAX_COMMENT_LEN: usize = 500;

/// A fully resolved feed entry: everything the home feed renders.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub post: Post,
    /// Missing when the author's profile does not exist; the view shows a
    /// placeholder.
    pub author: Option<UserProfile>,
    pub comments: Vec<Comment>,
    pub liked_by_viewer: bool,
    pub like_count: usize,
}

/// A comment with its author resolved, as shown on the detail screen.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub author: Option<UserProfile>,
}

/// A single post with per-comment authors resolved.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: Option<UserProfile>,
    pub comments: Vec<CommentView>,
    pub liked_by_viewer: bool,
    pub like_count: usize,
}

/// User input for a new post. The image must already be uploaded; the draft
/// carries its public URL.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub image_url: String,
}

impl PostDraft {
    /// Validate the draft. Runs before any network call.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.image_url.trim().is_empty() {
            return Err(ApiError::Validation(
                "An image is required to publish".to_string(),
            ));
        }
        if self.title.chars().count() > MAX_POST_TITLE_LEN {
            return Err(ApiError::Validation(format!(
                "Title exceeds {} characters",
                MAX_POST_TITLE_LEN
            )));
        }
        if self.body.chars().count() > MAX_POST_BODY_LEN {
            return Err(ApiError::Validation(format!(
                "Description exceeds {} characters",
                MAX_POST_BODY_LEN
            )));
        }
        Ok(())
    }
}

/// Aggregates posts, comments, author profiles and like state into
/// render-ready values, and applies the mutations the screens trigger.
#[derive(Debug, Clone)]
pub struct FeedService {
    api: ApiClient,
    fetch_concurrency: usize,
}

impl FeedService {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        Self {
            api,
            fetch_concurrency: config.fetch_concurrency.max(1),
        }
    }

    /// Load the home feed for a viewer.
    ///
    /// Posts keep server order. Every distinct author is fetched exactly
    /// once per load; comment lists resolve with bounded concurrency but
    /// are all present before this returns.
    pub async fn load_feed(&self, session: &Session) -> Result<Vec<FeedItem>, ApiError> {
        let posts = self.api.list_posts().await?;
        tracing::debug!("Loaded {} posts", posts.len());

        let authors = self
            .resolve_profiles(posts.iter().map(|p| p.user_id.as_str()))
            .await?;

        let comments: Vec<Vec<Comment>> =
            stream::iter(posts.iter().map(|post| self.api.list_comments(&post.id)))
                .buffered(self.fetch_concurrency)
                .try_collect()
                .await?;

        let items = posts
            .into_iter()
            .zip(comments)
            .map(|(post, comments)| {
                let author = authors.get(&post.user_id).cloned().flatten();
                let liked_by_viewer = likes::liked_by(&post, &session.user_id);
                let like_count = likes::like_count(&post);
                FeedItem {
                    post,
                    author,
                    comments,
                    liked_by_viewer,
                    like_count,
                }
            })
            .collect();

        Ok(items)
    }

    /// Load one post with its comments and the authors of both, for the
    /// detail screen.
    pub async fn load_post_detail(
        &self,
        post_id: &str,
        session: &Session,
    ) -> Result<PostDetail, ApiError> {
        let posts = self.api.list_posts().await?;
        let post = posts
            .into_iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ApiError::NotFound(format!("Post {} not found", post_id)))?;

        let comments = self.api.list_comments(post_id).await?;

        let author_ids = std::iter::once(post.user_id.as_str())
            .chain(comments.iter().map(|c| c.user_id.as_str()));
        let authors = self.resolve_profiles(author_ids).await?;

        let author = authors.get(&post.user_id).cloned().flatten();
        let comments = comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(&comment.user_id).cloned().flatten();
                CommentView { comment, author }
            })
            .collect();

        let liked_by_viewer = likes::liked_by(&post, &session.user_id);
        let like_count = likes::like_count(&post);

        Ok(PostDetail {
            post,
            author,
            comments,
            liked_by_viewer,
            like_count,
        })
    }

    /// Toggle the viewer's like on a feed item.
    ///
    /// The flip is applied locally first, then persisted. On failure the
    /// local state is rolled back and the error returned; local and server
    /// state never diverge past this call.
    pub async fn toggle_like(
        &self,
        item: &mut FeedItem,
        session: &Session,
    ) -> Result<bool, ApiError> {
        let result = self.persist_toggle(&mut item.post, session).await;
        item.liked_by_viewer = likes::liked_by(&item.post, &session.user_id);
        item.like_count = likes::like_count(&item.post);
        result.map(|_| item.liked_by_viewer)
    }

    /// Toggle the viewer's like on the detail screen.
    pub async fn toggle_like_detail(
        &self,
        detail: &mut PostDetail,
        session: &Session,
    ) -> Result<bool, ApiError> {
        let result = self.persist_toggle(&mut detail.post, session).await;
        detail.liked_by_viewer = likes::liked_by(&detail.post, &session.user_id);
        detail.like_count = likes::like_count(&detail.post);
        result.map(|_| detail.liked_by_viewer)
    }

    /// Publish a comment and append the server's canonical record locally.
    ///
    /// The server-returned record is the source of truth; no client-side
    /// stub with a fabricated id is ever shown.
    pub async fn publish_comment(
        &self,
        detail: &mut PostDetail,
        session: &Session,
        text: &str,
    ) -> Result<(), ApiError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation(
                "Comment text is required".to_string(),
            ));
        }
        if text.chars().count() > MAX_COMMENT_LEN {
            return Err(ApiError::Validation(format!(
                "Comment exceeds {} characters",
                MAX_COMMENT_LEN
            )));
        }

        let new_comment = NewComment {
            user_id: session.user_id.clone(),
            post_id: detail.post.id.clone(),
            text: text.to_string(),
        };
        let created = self.api.create_comment(&new_comment).await?;

        let author = match self.api.get_user(&created.user_id).await {
            Ok(profile) => Some(profile),
            Err(ApiError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        detail.comments.push(CommentView {
            comment: created,
            author,
        });
        Ok(())
    }

    /// Publish a new post, returning the server record.
    pub async fn publish_post(
        &self,
        session: &Session,
        draft: &PostDraft,
    ) -> Result<Post, ApiError> {
        draft.validate()?;

        let new_post = NewPost {
            user_id: session.user_id.clone(),
            image_url: draft.image_url.trim().to_string(),
            title: draft.title.trim().to_string(),
            body: draft.body.trim().to_string(),
        };
        let post = self.api.create_post(&new_post).await?;
        tracing::info!("Published post {}", post.id);
        Ok(post)
    }

    /// Flip the viewer's membership in the liker list and persist it,
    /// restoring the previous list if the PUT fails.
    async fn persist_toggle(&self, post: &mut Post, session: &Session) -> Result<(), ApiError> {
        let toggled = likes::toggle(&post.likers, &session.user_id);
        let previous = std::mem::replace(&mut post.likers, toggled);

        if let Err(e) = self
            .api
            .update_likes(&post.id, &session.user_id, &post.likers)
            .await
        {
            tracing::warn!("Like update for post {} failed, rolling back", post.id);
            post.likers = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Fetch each distinct profile id once, with bounded concurrency.
    ///
    /// A profile that does not exist resolves to `None`; any other failure
    /// aborts the load.
    async fn resolve_profiles<'a, I>(
        &self,
        ids: I,
    ) -> Result<HashMap<String, Option<UserProfile>>, ApiError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = ids
            .filter(|id| !id.is_empty() && seen.insert(id.to_string()))
            .map(|id| id.to_string())
            .collect();

        let resolved: Vec<(String, Option<UserProfile>)> =
            stream::iter(distinct.into_iter().map(|id| async move {
                match self.api.get_user(&id).await {
                    Ok(profile) => Ok((id, Some(profile))),
                    Err(ApiError::NotFound(_)) => {
                        tracing::debug!("Profile {} not found, leaving author unset", id);
                        Ok((id, None))
                    }
                    Err(e) => Err(e),
                }
            }))
            .buffer_unordered(self.fetch_concurrency)
            .try_collect()
            .await?;

        Ok(resolved.into_iter().collect())
    }
}
