// Legacy API client inventory endpoints
//
// Two read-only views of the same population: `list/user` holds every
// client the controller knows about (aliases, fixed IPs), `stat/sta`
// holds the stations connected right now.

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::{LegacyClientEntry, LegacyUserEntry};

impl LegacyClient {
    /// List all known (configured) clients, connected or not.
    ///
    /// `GET /api/s/{site}/list/user`
    pub async fn list_configured_clients(&self) -> Result<Vec<LegacyUserEntry>, Error> {
        debug!(site = self.site(), "listing configured clients");
        self.get_data("list/user").await
    }

    /// List all currently connected clients (stations).
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub async fn list_active_clients(&self) -> Result<Vec<LegacyClientEntry>, Error> {
        debug!(site = self.site(), "listing active clients");
        self.get_data("stat/sta").await
    }
}
