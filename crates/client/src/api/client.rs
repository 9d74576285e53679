//! API client and request pipeline
//!
//! Every endpoint goes through [`DiscuitClient::request`]: compose session
//! headers, resolve the URL, send once, run the session hook, check the
//! status, decode JSON.

use std::fmt;
use std::time::Duration;

use discuit_domain::constants::{API_PATH, CSRF_REQUEST_HEADER};
use discuit_domain::{ClientConfig, DiscuitError, InitialResponse, LoginRequest, User};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use super::errors::ApiError;
use super::session::{ResponseHook, Session, SessionState, SessionStore};
use crate::http::HttpClient;

/// Client for one API host and one session.
///
/// Operations take `&self` and may run concurrently, but they all share the
/// session: whichever response is processed last decides the credentials
/// used next. Use separate clients for independent sessions.
pub struct DiscuitClient {
    http: HttpClient,
    api_root: Url,
    session: SessionStore,
}

impl DiscuitClient {
    /// Create a new client
    ///
    /// Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP
    /// client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> DiscuitClientBuilder {
        DiscuitClientBuilder::default()
    }

    /// Root all endpoint paths are resolved against, always ending in `/`.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Copy of the credentials currently held.
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    // === Session ===

    /// Establish a session
    ///
    /// The bootstrap endpoint is expected to set both the `SID` and
    /// `csrftoken` cookies.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Initialization` if either credential is still
    /// missing after the call, or any pipeline error
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<InitialResponse, ApiError> {
        let initial: InitialResponse = self.get("_initial", &[]).await?;

        let session = self.session.snapshot();
        if !session.has_credentials() {
            let message = format!(
                "server did not set session credentials (session id: {}, csrf token: {})",
                if session.session_id.is_some() { "set" } else { "missing" },
                if session.csrf_token.is_some() { "set" } else { "missing" },
            );
            error!(%message, "session initialization failed");
            return Err(ApiError::Initialization(message));
        }

        if let Some(user) = &initial.user {
            self.session.set_user(Some(user.id.clone()));
        }

        info!(logged_in = initial.user.is_some(), "session initialized");
        Ok(initial)
    }

    /// Log in with a username and password
    ///
    /// Session cookies from the response are picked up by the response hook
    /// like on any other call; they are not checked here.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or credentials are rejected
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest::new(username, password);
        let user: User = self.send_json(Method::POST, "_login", &[], &request).await?;

        self.session.set_user(Some(user.id.clone()));
        info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// Log out of the current session
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value =
            self.request(Method::POST, "_login", &[("action", "logout".to_string())], None).await?;

        self.session.set_user(None);
        info!("logged out");
        Ok(())
    }

    // === Pipeline ===

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body).map_err(DiscuitError::from)?;
        self.request(method, path, query, Some(body)).await
    }

    /// Execute one request
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path relative to the API root (e.g. `posts/abc123`)
    /// * `query` - Query parameters, appended in order
    /// * `body` - Pre-serialized JSON body
    ///
    /// # Errors
    ///
    /// Returns `Network` for transport failures, `Http` for non-2xx
    /// statuses, `Parse` if the body does not decode into `T`
    #[instrument(skip(self, query, body), fields(method = %method, path = %path))]
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, query)?;

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(COOKIE, self.session.cookie_header());

        if method != Method::GET {
            if let Some(token) = self.session.csrf_token() {
                builder = builder.header(CSRF_REQUEST_HEADER, token);
            }
        }

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = self.http.send(builder).await.map_err(|err| {
            error!(url = %url, error = %err, "request failed");
            ApiError::Network(err)
        })?;

        self.session.on_response(response.headers());

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "server returned non-success status");
            return Err(ApiError::Http { status: status.as_u16(), url: url.to_string() });
        }

        let text = response.text().await.map_err(|err| {
            error!(url = %url, error = %err, "failed to read response body");
            ApiError::Network(err)
        })?;

        let parsed = if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_str(&text)
        };

        let result = parsed.map_err(|err| {
            error!(url = %url, error = %err, "failed to parse response");
            ApiError::Parse(format!("{url}: {err}"))
        })?;

        debug!(url = %url, status = status.as_u16(), "request successful");
        Ok(result)
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self
            .api_root
            .join(path)
            .map_err(|e| ApiError::Config(format!("Invalid endpoint path {path}: {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

impl fmt::Debug for DiscuitClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscuitClient")
            .field("api_root", &self.api_root.as_str())
            .field("session_state", &self.session.state())
            .finish_non_exhaustive()
    }
}

/// Normalize a configured host into the API root.
///
/// `https://example.org` becomes `https://example.org/api/`; a URL that
/// already ends in `/api` or `/api/` only gets the trailing slash.
pub(crate) fn api_root(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ApiError::Config(format!("Invalid base URL {base_url}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(ApiError::Config(format!("Base URL cannot have paths: {base_url}")));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    if url.path() == "/api/" || url.path().ends_with("/api/") {
        return Ok(url);
    }

    url.join(API_PATH).map_err(|e| ApiError::Config(format!("Invalid base URL {base_url}: {e}")))
}

/// Builder for API client
#[derive(Default)]
pub struct DiscuitClientBuilder {
    config: Option<ClientConfig>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DiscuitClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Shorthand for a configuration with only a base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = Some(ClientConfig::with_base_url(base_url));
        self
    }

    /// Per-request timeout; unset by default
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP
    /// client cannot be built
    pub fn build(self) -> Result<DiscuitClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let api_root = api_root(config.base_url_or_default())?;

        let mut http = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }
        let http = http
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        debug!(api_root = %api_root, "client created");
        Ok(DiscuitClient { http, api_root, session: SessionStore::new() })
    }
}
