//! Comment endpoints and the [`CommentHandle`] wrapper

use std::ops::Deref;

use discuit_domain::{Comment, CommentVote, CommentsPage, NewComment, UpdateComment, UserGroup};
use reqwest::Method;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::DiscuitClient;
use super::errors::ApiError;

impl DiscuitClient {
    /// Comment on a post
    ///
    /// # Arguments
    ///
    /// * `post_id` - Public id of the post
    /// * `body` - Comment text
    /// * `parent_id` - Comment being replied to; `None` for a top-level
    ///   comment
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self, body))]
    pub async fn comment(
        &self,
        post_id: &str,
        body: &str,
        parent_id: Option<&str>,
    ) -> Result<CommentHandle<'_>, ApiError> {
        let path = format!("posts/{}/comments", encode(post_id));
        let request =
            NewComment { body: body.to_string(), parent_comment_id: parent_id.map(str::to_owned) };

        let comment: Comment = self.send_json(Method::POST, &path, &[], &request).await?;
        debug!(comment_id = %comment.id, depth = comment.depth, "comment created");
        Ok(CommentHandle::new(self, comment))
    }

    /// Fetch one page of comments under a post
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn get_comments(
        &self,
        post_id: &str,
        next: Option<&str>,
    ) -> Result<CommentHandlesPage<'_>, ApiError> {
        let path = format!("posts/{}/comments", encode(post_id));
        let query: Vec<(&str, String)> =
            next.map(|cursor| ("next", cursor.to_string())).into_iter().collect();

        let page: CommentsPage = self.get(&path, &query).await?;
        debug!(count = page.comments.len(), has_next = page.next.is_some(), "comments listed");
        Ok(CommentHandlesPage::new(self, page))
    }

    /// Upvote a comment
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    pub async fn upvote_comment(&self, comment_id: &str) -> Result<CommentHandle<'_>, ApiError> {
        self.vote_comment(comment_id, true).await
    }

    /// Downvote a comment
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    pub async fn downvote_comment(
        &self,
        comment_id: &str,
    ) -> Result<CommentHandle<'_>, ApiError> {
        self.vote_comment(comment_id, false).await
    }

    #[instrument(skip(self))]
    async fn vote_comment(&self, comment_id: &str, up: bool) -> Result<CommentHandle<'_>, ApiError> {
        let vote = CommentVote { comment_id: comment_id.to_string(), up };
        let comment: Comment = self.send_json(Method::POST, "_commentVote", &[], &vote).await?;
        Ok(CommentHandle::new(self, comment))
    }

    /// Delete a comment
    ///
    /// `delete_as` defaults to `UserGroup::Normal`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server refuses
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        delete_as: Option<UserGroup>,
    ) -> Result<CommentHandle<'_>, ApiError> {
        let path = format!("posts/{}/comments/{}", encode(post_id), encode(comment_id));
        let query = [("deleteAs", delete_as.unwrap_or_default().as_str().to_string())];

        let comment: Comment = self.request(Method::DELETE, &path, &query, None).await?;
        Ok(CommentHandle::new(self, comment))
    }

    /// Replace a comment's body
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self, body))]
    pub async fn update_comment(
        &self,
        post_id: &str,
        body: &str,
        comment_id: &str,
    ) -> Result<CommentHandle<'_>, ApiError> {
        let path = format!("posts/{}/comments/{}", encode(post_id), encode(comment_id));
        let update = UpdateComment { body: body.to_string() };

        let comment: Comment = self.send_json(Method::PUT, &path, &[], &update).await?;
        Ok(CommentHandle::new(self, comment))
    }
}

/// A comment together with the client that fetched it.
///
/// Like [`PostHandle`](super::posts::PostHandle), every action returns a
/// new handle and leaves this one untouched.
#[derive(Debug, Clone)]
pub struct CommentHandle<'c> {
    client: &'c DiscuitClient,
    comment: Comment,
}

impl<'c> CommentHandle<'c> {
    pub fn new(client: &'c DiscuitClient, comment: Comment) -> Self {
        Self { client, comment }
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn into_inner(self) -> Comment {
        self.comment
    }

    pub fn client(&self) -> &'c DiscuitClient {
        self.client
    }

    pub async fn upvote(&self) -> Result<CommentHandle<'c>, ApiError> {
        self.client.upvote_comment(&self.comment.id).await
    }

    pub async fn downvote(&self) -> Result<CommentHandle<'c>, ApiError> {
        self.client.downvote_comment(&self.comment.id).await
    }

    pub async fn delete(&self, delete_as: Option<UserGroup>) -> Result<CommentHandle<'c>, ApiError> {
        self.client
            .delete_comment(&self.comment.post_public_id, &self.comment.id, delete_as)
            .await
    }

    pub async fn edit(&self, body: &str) -> Result<CommentHandle<'c>, ApiError> {
        self.client.update_comment(&self.comment.post_public_id, body, &self.comment.id).await
    }

    /// Reply to this comment.
    pub async fn reply(&self, body: &str) -> Result<CommentHandle<'c>, ApiError> {
        self.client.comment(&self.comment.post_public_id, body, Some(&self.comment.id)).await
    }
}

/// One page of comments, every comment already wrapped.
#[derive(Debug, Clone)]
pub struct CommentHandlesPage<'c> {
    pub comments: Vec<CommentHandle<'c>>,
    pub next: Option<String>,
}

impl<'c> CommentHandlesPage<'c> {
    pub fn new(client: &'c DiscuitClient, page: CommentsPage) -> Self {
        let comments =
            page.comments.into_iter().map(|comment| CommentHandle::new(client, comment)).collect();
        Self { comments, next: page.next }
    }

    pub fn into_inner(self) -> CommentsPage {
        CommentsPage {
            comments: self.comments.into_iter().map(CommentHandle::into_inner).collect(),
            next: self.next,
        }
    }
}

impl Deref for CommentHandle<'_> {
    type Target = Comment;

    fn deref(&self) -> &Comment {
        &self.comment
    }
}
