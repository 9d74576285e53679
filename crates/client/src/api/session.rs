//! Session credentials and the response hook that maintains them
//!
//! The server hands out a session id (`SID` cookie) and a CSRF token
//! (`csrftoken` cookie, or the `csrf-token` header) on any response, not only
//! on the auth endpoints. Every response therefore passes through
//! [`ResponseHook::on_response`] before the pipeline looks at its status.

use discuit_domain::constants::{
    CSRF_COOKIE, CSRF_RESPONSE_HEADER, SESSION_COOKIE, UNSET_CREDENTIAL,
};
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, SET_COOKIE};
use tracing::debug;

/// Credentials held by one client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub session_id: Option<String>,
    pub csrf_token: Option<String>,
    /// Id of the user the session is logged in as, once known.
    pub user_id: Option<String>,
}

/// Coarse progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No CSRF token yet.
    Unauthenticated,
    /// CSRF token held, no logged-in user.
    Initialized,
    /// Session id held and a user is known.
    Authenticated,
}

impl Session {
    /// Value of the `Cookie` request header.
    ///
    /// Unset credentials are written as the literal `null`, so a fresh
    /// session sends `SID=null; csrftoken=null`. Servers ignore the
    /// placeholder; the wire format is kept as is for compatibility.
    pub fn cookie_header(&self) -> String {
        format!(
            "{SESSION_COOKIE}={}; {CSRF_COOKIE}={}",
            self.session_id.as_deref().unwrap_or(UNSET_CREDENTIAL),
            self.csrf_token.as_deref().unwrap_or(UNSET_CREDENTIAL),
        )
    }

    pub fn has_credentials(&self) -> bool {
        self.session_id.is_some() && self.csrf_token.is_some()
    }

    pub fn state(&self) -> SessionState {
        if self.session_id.is_some() && self.user_id.is_some() {
            SessionState::Authenticated
        } else if self.csrf_token.is_some() {
            SessionState::Initialized
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Pick up credentials from response headers.
    ///
    /// `Set-Cookie` entries are applied in order; a `csrf-token` header is
    /// applied last and always wins.
    pub fn absorb(&mut self, headers: &HeaderMap) {
        for value in headers.get_all(SET_COOKIE) {
            let Ok(cookie) = value.to_str() else {
                continue;
            };
            if let Some(token) = cookie_value(cookie, CSRF_COOKIE) {
                debug!("csrf token updated from cookie");
                self.csrf_token = Some(token.to_string());
            } else if let Some(sid) = cookie_value(cookie, SESSION_COOKIE) {
                debug!("session id updated from cookie");
                self.session_id = Some(sid.to_string());
            }
        }

        if let Some(token) = headers.get(CSRF_RESPONSE_HEADER).and_then(|v| v.to_str().ok()) {
            debug!("csrf token updated from header");
            self.csrf_token = Some(token.to_string());
        }
    }
}

/// Value of a `Set-Cookie` entry named `name`, without attributes.
fn cookie_value<'a>(set_cookie: &'a str, name: &str) -> Option<&'a str> {
    let rest = set_cookie.strip_prefix(name)?.strip_prefix('=')?;
    Some(rest.split(';').next().unwrap_or_default().trim())
}

/// Post-processing applied to every HTTP response, whatever the endpoint or
/// status.
pub trait ResponseHook: Send + Sync {
    fn on_response(&self, headers: &HeaderMap);
}

/// Shared, mutable [`Session`].
///
/// The lock only makes updates memory-safe. Responses that complete
/// concurrently overwrite each other in the order they are processed; callers
/// that need a deterministic session must serialize their requests.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current credentials.
    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn cookie_header(&self) -> String {
        self.inner.read().cookie_header()
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.inner.read().csrf_token.clone()
    }

    pub fn state(&self) -> SessionState {
        self.inner.read().state()
    }

    pub fn set_user(&self, user_id: Option<String>) {
        self.inner.write().user_id = user_id;
    }
}

impl ResponseHook for SessionStore {
    fn on_response(&self, headers: &HeaderMap) {
        self.inner.write().absorb(headers);
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers(set_cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for cookie in set_cookies {
            map.append(SET_COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        map
    }

    #[test]
    fn fresh_session_sends_null_placeholders() {
        let session = Session::default();
        assert_eq!(session.cookie_header(), "SID=null; csrftoken=null");
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn absorbs_both_cookies() {
        let mut session = Session::default();
        session.absorb(&headers(&[
            "SID=abc123; Path=/; HttpOnly; SameSite=Lax",
            "csrftoken=tok456; Path=/",
        ]));

        assert_eq!(session.session_id.as_deref(), Some("abc123"));
        assert_eq!(session.csrf_token.as_deref(), Some("tok456"));
        assert_eq!(session.cookie_header(), "SID=abc123; csrftoken=tok456");
        assert!(session.has_credentials());
        assert_eq!(session.state(), SessionState::Initialized);
    }

    #[test]
    fn csrf_header_overrides_cookie() {
        let mut map = headers(&["csrftoken=from-cookie"]);
        map.insert(CSRF_RESPONSE_HEADER, HeaderValue::from_static("from-header"));

        let mut session = Session::default();
        session.absorb(&map);

        assert_eq!(session.csrf_token.as_deref(), Some("from-header"));
    }

    #[test]
    fn unrelated_cookies_leave_session_alone() {
        let mut session = Session {
            session_id: Some("keep".into()),
            csrf_token: Some("keep-too".into()),
            user_id: None,
        };
        session.absorb(&headers(&["theme=dark", "SIDEBAR=open", "csrftokenx=nope"]));

        assert_eq!(session.session_id.as_deref(), Some("keep"));
        assert_eq!(session.csrf_token.as_deref(), Some("keep-too"));
    }

    #[test]
    fn later_cookie_overwrites_earlier() {
        let mut session = Session::default();
        session.absorb(&headers(&["SID=first"]));
        session.absorb(&headers(&["SID=second"]));

        assert_eq!(session.session_id.as_deref(), Some("second"));
    }

    #[test]
    fn authenticated_needs_session_and_user() {
        let store = SessionStore::new();
        store.on_response(&headers(&["SID=s", "csrftoken=c"]));
        assert_eq!(store.state(), SessionState::Initialized);

        store.set_user(Some("u-1".into()));
        assert_eq!(store.state(), SessionState::Authenticated);
        assert_eq!(store.snapshot().user_id.as_deref(), Some("u-1"));
    }
}
