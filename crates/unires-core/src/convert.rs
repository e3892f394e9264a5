// ── API-to-domain type conversions ──
//
// Bridges raw `unires_api` listing entries into the record types the
// reconciler consumes. Only identity, alias and address survive; no
// filtering happens here, so the reconciler sees exactly what the
// controller returned.

use unires_api::{LegacyClientEntry, LegacyUserEntry};

use crate::model::{ActiveRecord, ConfiguredRecord, DeviceKey};

// ── Configured client ──────────────────────────────────────────────

impl From<LegacyUserEntry> for ConfiguredRecord {
    fn from(u: LegacyUserEntry) -> Self {
        Self {
            key: u.mac.as_deref().map(DeviceKey::new),
            name: u.name,
            fixed_ip: u.fixed_ip,
        }
    }
}

// ── Active client ──────────────────────────────────────────────────

impl From<LegacyClientEntry> for ActiveRecord {
    fn from(c: LegacyClientEntry) -> Self {
        Self {
            key: c.mac.as_deref().map(DeviceKey::new),
            name: c.name,
            ip: c.ip,
        }
    }
}
