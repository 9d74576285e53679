//! Post endpoints and the [`PostHandle`] wrapper

use std::ops::Deref;

use discuit_domain::{NewPost, Post, PostVote, PostsPage, PostsQuery, UpdatePost, UserGroup};
use reqwest::Method;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

use super::client::DiscuitClient;
use super::comments::CommentHandle;
use super::errors::ApiError;

impl DiscuitClient {
    /// Fetch a post by its public id
    ///
    /// # Errors
    ///
    /// Returns error if the post does not exist or the request fails
    #[instrument(skip(self))]
    pub async fn get_post(&self, public_id: &str) -> Result<PostHandle<'_>, ApiError> {
        let path = format!("posts/{}", encode(public_id));
        let post: Post = self.get(&path, &[]).await?;
        Ok(PostHandle::new(self, post))
    }

    /// Fetch one page of a feed
    ///
    /// Use `PostsQuery::default()` for the home feed, newest first, ten per
    /// page.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn get_posts(&self, query: &PostsQuery) -> Result<PostHandlesPage<'_>, ApiError> {
        let page: PostsPage = self.get("posts", &query.to_query_pairs()).await?;

        debug!(count = page.posts.len(), has_next = page.next.is_some(), "posts listed");
        Ok(PostHandlesPage::new(self, page))
    }

    /// Create a post
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` without sending anything if a link
    /// post has no link or an image post has no image
    #[instrument(skip(self, data), fields(post_type = %data.post_type, community = %data.community))]
    pub async fn new_post(&self, data: &NewPost) -> Result<PostHandle<'_>, ApiError> {
        if let Err(err) = data.validate() {
            warn!(error = %err, "refusing to send invalid post");
            return Err(err.into());
        }

        let post: Post = self.send_json(Method::POST, "posts", &[], data).await?;
        debug!(public_id = %post.public_id, "post created");
        Ok(PostHandle::new(self, post))
    }

    /// Upvote a post by its id
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    pub async fn upvote_post(&self, post_id: &str) -> Result<PostHandle<'_>, ApiError> {
        self.vote_post(post_id, true).await
    }

    /// Downvote a post by its id
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    pub async fn downvote_post(&self, post_id: &str) -> Result<PostHandle<'_>, ApiError> {
        self.vote_post(post_id, false).await
    }

    #[instrument(skip(self))]
    async fn vote_post(&self, post_id: &str, up: bool) -> Result<PostHandle<'_>, ApiError> {
        let vote = PostVote { post_id: post_id.to_string(), up };
        let post: Post = self.send_json(Method::POST, "_postVote", &[], &vote).await?;
        Ok(PostHandle::new(self, post))
    }

    /// Delete a post
    ///
    /// # Arguments
    ///
    /// * `public_id` - Public id of the post
    /// * `delete_as` - Capacity to delete in; defaults to `UserGroup::Normal`
    /// * `delete_content` - Also wipe the body/link/image; defaults to `false`
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server refuses
    #[instrument(skip(self))]
    pub async fn delete_post(
        &self,
        public_id: &str,
        delete_as: Option<UserGroup>,
        delete_content: Option<bool>,
    ) -> Result<PostHandle<'_>, ApiError> {
        let path = format!("posts/{}", encode(public_id));
        let query = [
            ("deleteAs", delete_as.unwrap_or_default().as_str().to_string()),
            ("deleteContent", delete_content.unwrap_or(false).to_string()),
        ];

        let post: Post = self.request(Method::DELETE, &path, &query, None).await?;
        Ok(PostHandle::new(self, post))
    }

    /// Edit a post's title and/or body
    ///
    /// Fields passed as `None` are not sent and stay as they are on the
    /// server.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self, title, body))]
    pub async fn update_post(
        &self,
        public_id: &str,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<PostHandle<'_>, ApiError> {
        let path = format!("posts/{}", encode(public_id));
        let update =
            UpdatePost { title: title.map(str::to_owned), body: body.map(str::to_owned) };

        let post: Post = self.send_json(Method::PUT, &path, &[], &update).await?;
        Ok(PostHandle::new(self, post))
    }
}

/// A post together with the client that fetched it.
///
/// Actions never modify the handle they are called on; they return a new
/// handle holding the server's updated post. Rebind to refresh in place:
///
/// ```no_run
/// # async fn demo(client: &discuit_client::DiscuitClient) -> Result<(), discuit_client::ApiError> {
/// let mut post = client.get_post("abc123").await?;
/// post = post.upvote().await?;
/// println!("{} upvotes", post.upvotes);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PostHandle<'c> {
    client: &'c DiscuitClient,
    post: Post,
}

impl<'c> PostHandle<'c> {
    pub fn new(client: &'c DiscuitClient, post: Post) -> Self {
        Self { client, post }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn into_inner(self) -> Post {
        self.post
    }

    pub fn client(&self) -> &'c DiscuitClient {
        self.client
    }

    pub async fn upvote(&self) -> Result<PostHandle<'c>, ApiError> {
        self.client.upvote_post(&self.post.id).await
    }

    pub async fn downvote(&self) -> Result<PostHandle<'c>, ApiError> {
        self.client.downvote_post(&self.post.id).await
    }

    pub async fn delete(
        &self,
        delete_as: Option<UserGroup>,
        delete_content: Option<bool>,
    ) -> Result<PostHandle<'c>, ApiError> {
        self.client.delete_post(&self.post.public_id, delete_as, delete_content).await
    }

    /// Edit the post; omitted fields are filled from this handle's copy, not
    /// re-fetched.
    pub async fn edit(
        &self,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<PostHandle<'c>, ApiError> {
        let title = title.unwrap_or(self.post.title.as_str());
        let body = body.or(self.post.body.as_deref());
        self.client.update_post(&self.post.public_id, Some(title), body).await
    }

    /// Add a top-level comment.
    pub async fn comment(&self, body: &str) -> Result<CommentHandle<'c>, ApiError> {
        self.client.comment(&self.post.public_id, body, None).await
    }
}

/// One page of a feed, every post already wrapped.
#[derive(Debug, Clone)]
pub struct PostHandlesPage<'c> {
    pub posts: Vec<PostHandle<'c>>,
    /// Cursor for the next page; `None` on the last one.
    pub next: Option<String>,
}

impl<'c> PostHandlesPage<'c> {
    pub fn new(client: &'c DiscuitClient, page: PostsPage) -> Self {
        let posts = page.posts.into_iter().map(|post| PostHandle::new(client, post)).collect();
        Self { posts, next: page.next }
    }

    pub fn into_inner(self) -> PostsPage {
        PostsPage {
            posts: self.posts.into_iter().map(PostHandle::into_inner).collect(),
            next: self.next,
        }
    }
}

impl Deref for PostHandle<'_> {
    type Target = Post;

    fn deref(&self) -> &Post {
        &self.post
    }
}
