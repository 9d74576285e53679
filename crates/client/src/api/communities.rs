//! Community listing

use discuit_domain::Community;
use tracing::{debug, instrument};

use super::client::DiscuitClient;
use super::errors::ApiError;

impl DiscuitClient {
    /// List all communities
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn get_communities(&self) -> Result<Vec<Community>, ApiError> {
        let communities: Vec<Community> = self.get("communities", &[]).await?;

        debug!(count = communities.len(), "communities listed");
        Ok(communities)
    }
}
