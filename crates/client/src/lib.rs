//! # Discuit Client
//!
//! Typed async client for the Discuit REST API.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON/TOML files)
//! - HTTP transport wrapper
//! - Session credential tracking (cookies and CSRF token)
//! - Endpoint methods for posts, comments, votes, users and communities
//!
//! ## Architecture
//! - Entity shapes and request payloads live in `discuit-domain`
//! - Contains all "impure" code (network, filesystem, environment)
//!
//! ```no_run
//! use discuit_client::{config, DiscuitClient};
//! use discuit_client::domain::PostsQuery;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DiscuitClient::new(config::load()?)?;
//! client.initialize().await?;
//! let page = client.get_posts(&PostsQuery::default().limit(5)).await?;
//! for post in &page.posts {
//!     println!("{} ({} points)", post.title, post.score());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod http;

pub use api::{
    ApiError, ApiErrorCategory, CommentHandle, CommentHandlesPage, DiscuitClient,
    DiscuitClientBuilder, PostHandle, PostHandlesPage, ResponseHook, Session, SessionState,
    SessionStore,
};
pub use discuit_domain as domain;
pub use http::{HttpClient, HttpClientBuilder};
