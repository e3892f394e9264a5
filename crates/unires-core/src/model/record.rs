// ── Client record types ──

use serde::{Deserialize, Serialize};

use super::device_key::DeviceKey;

/// A statically configured client from the controller's known-client list.
///
/// Every field is optional at the source; [`reconcile`](crate::reconcile)
/// only admits records carrying a key, a non-empty name and a non-empty
/// fixed IP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredRecord {
    pub key: Option<DeviceKey>,
    pub name: Option<String>,
    pub fixed_ip: Option<String>,
}

impl ConfiguredRecord {
    pub fn new(key: &str, name: &str, fixed_ip: &str) -> Self {
        Self {
            key: Some(DeviceKey::new(key)),
            name: Some(name.into()),
            fixed_ip: Some(fixed_ip.into()),
        }
    }
}

/// A client currently connected to the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveRecord {
    pub key: Option<DeviceKey>,
    pub name: Option<String>,
    pub ip: Option<String>,
}

impl ActiveRecord {
    pub fn new(key: &str, name: &str, ip: &str) -> Self {
        Self {
            key: Some(DeviceKey::new(key)),
            name: Some(name.into()),
            ip: Some(ip.into()),
        }
    }
}

/// One line of the exported reservation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    pub ip: String,
}

impl Reservation {
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }
}

/// Both inventories as fetched in one run.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub configured: Vec<ConfiguredRecord>,
    pub active: Vec<ActiveRecord>,
}

impl Inventory {
    /// Run [`reconcile`](crate::reconcile) over this inventory.
    pub fn reconcile(&self, include_active: bool) -> Vec<Reservation> {
        crate::reconcile::reconcile(&self.configured, &self.active, include_active)
    }
}
