// ── Inventory fetcher ──
//
// One session, at most three sequential round trips: login, the
// configured-client listing, and (unless fixed-only) the active listing.
// Any failure aborts the run; nothing is retried.

use tracing::{debug, info};
use url::Url;

use unires_api::{LegacyClient, TransportConfig};

use crate::config::{ControllerConfig, Credentials};
use crate::error::CoreError;
use crate::model::{ActiveRecord, ConfiguredRecord, Inventory, Reservation};

/// Pulls both client inventories from one controller site.
pub struct Fetcher {
    client: LegacyClient,
    credentials: Credentials,
}

impl Fetcher {
    /// Build the session client for `config`. No request is sent yet.
    pub fn new(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: (&config.tls).into(),
            timeout: config.timeout,
            cookie_jar: None,
        }
        .with_cookie_jar();

        let client = LegacyClient::new(
            config.url.clone(),
            config.site.clone(),
            config.platform,
            &transport,
        )?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
        })
    }

    /// The controller this fetcher talks to.
    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// Log in, then list configured clients and, if `include_active`,
    /// active clients. A failed login stops before any listing request.
    pub async fn fetch(&self, include_active: bool) -> Result<Inventory, CoreError> {
        debug!(
            url = %self.client.base_url(),
            site = self.client.site(),
            platform = ?self.client.platform(),
            "connecting to controller"
        );

        self.client
            .login(&self.credentials.username, &self.credentials.password)
            .await?;

        let configured: Vec<ConfiguredRecord> = self
            .client
            .list_configured_clients()
            .await?
            .into_iter()
            .map(ConfiguredRecord::from)
            .collect();

        let active: Vec<ActiveRecord> = if include_active {
            self.client
                .list_active_clients()
                .await?
                .into_iter()
                .map(ActiveRecord::from)
                .collect()
        } else {
            debug!("fixed-only mode, not listing active clients");
            Vec::new()
        };

        info!(
            configured = configured.len(),
            active = active.len(),
            "fetched client inventories"
        );

        Ok(Inventory { configured, active })
    }

    /// Fetch both inventories and reconcile them into reservations.
    pub async fn reservations(&self, include_active: bool) -> Result<Vec<Reservation>, CoreError> {
        let inventory = self.fetch(include_active).await?;
        let reservations = inventory.reconcile(include_active);
        info!(reservations = reservations.len(), "reconciled client inventories");
        Ok(reservations)
    }
}
