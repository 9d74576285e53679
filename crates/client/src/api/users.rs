//! User profiles and the notification inbox

use discuit_domain::{NotificationsPage, User};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::DiscuitClient;
use super::errors::ApiError;

impl DiscuitClient {
    /// Fetch a user's public profile
    ///
    /// # Errors
    ///
    /// Returns error if the user does not exist or the request fails
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<User, ApiError> {
        let path = format!("users/{}", encode(username));
        self.get(&path, &[]).await
    }

    /// Fetch one page of the logged-in user's notifications
    ///
    /// # Errors
    ///
    /// Returns error if the session is not logged in or the request fails
    #[instrument(skip(self))]
    pub async fn get_notifications(
        &self,
        next: Option<&str>,
    ) -> Result<NotificationsPage, ApiError> {
        let query: Vec<(&str, String)> =
            next.map(|cursor| ("next", cursor.to_string())).into_iter().collect();
        let page: NotificationsPage = self.get("notifications", &query).await?;

        debug!(count = page.items.len(), new_count = page.new_count, "notifications listed");
        Ok(page)
    }
}
