//! # Discuit Domain
//!
//! Data shapes for the Discuit link-aggregator API.
//!
//! This crate contains:
//! - Entity payloads returned by the server (Post, Comment, User, ...)
//! - Request payloads and feed query options
//! - Domain error types and Result definitions
//! - Client configuration structure
//!
//! ## Architecture
//! - No dependencies on other Discuit crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
