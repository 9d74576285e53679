//! API constants
//!
//! Centralized location for wire-level names and defaults shared by the
//! domain and client crates.

// Host and path
pub const DEFAULT_BASE_URL: &str = "https://discuit.org";
pub const API_PATH: &str = "api/";

// Session cookies and headers
pub const SESSION_COOKIE: &str = "SID";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_RESPONSE_HEADER: &str = "csrf-token";
pub const CSRF_REQUEST_HEADER: &str = "X-Csrf-Token";

/// Placeholder written into the cookie header for a credential that has not
/// been received yet.
pub const UNSET_CREDENTIAL: &str = "null";

// Feed defaults
pub const DEFAULT_FEED_LIMIT: u32 = 10;
