//! Discuit API client
//!
//! This module provides the typed client for the Discuit REST API. It
//! handles session credentials, request building and JSON decoding.
//!
//! # Architecture
//!
//! - One request pipeline ([`DiscuitClient`]) used by every endpoint
//! - Session credentials maintained by a response hook run on every response
//! - Endpoint methods grouped by resource (posts, comments, users,
//!   communities)
//! - Post and comment wrappers that delegate actions back to the client
//!
//! Nothing is retried, cached or timed out by default.

pub mod client;
pub mod comments;
pub mod communities;
pub mod errors;
pub mod posts;
pub mod session;
pub mod users;

pub use client::{DiscuitClient, DiscuitClientBuilder};
pub use comments::{CommentHandle, CommentHandlesPage};
pub use errors::{ApiError, ApiErrorCategory};
pub use posts::{PostHandle, PostHandlesPage};
pub use session::{ResponseHook, Session, SessionState, SessionStore};
