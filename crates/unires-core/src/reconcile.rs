// ── Inventory reconciliation ──
//
// Merges configured and active records into one reservation per device,
// then filters and orders the result. Pure: no I/O besides diagnostics.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, trace};

use crate::model::{ActiveRecord, ConfiguredRecord, DeviceKey, Reservation};

/// Names usable as DNS labels: ASCII letters, digits and hyphen, whole string.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("name pattern is a valid regex"));

/// Whether `name` passes the reservation name filter.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Merge both inventories into a sorted reservation list.
///
/// 1. Configured records with a key, name and fixed IP are inserted
///    first; a later record for the same key replaces an earlier one.
/// 2. When `include_active` is set, active records with a key, name and
///    IP are inserted next and unconditionally replace configured entries
///    for the same key. The live address is the one that matters.
/// 3. Entries whose name fails [`is_valid_name`] are dropped and logged
///    at debug level.
/// 4. The rest is stably sorted by name (byte-wise), so entries with equal
///    names keep the order in which their keys were first inserted.
///
/// Empty string names and IPs count as absent.
pub fn reconcile(
    configured: &[ConfiguredRecord],
    active: &[ActiveRecord],
    include_active: bool,
) -> Vec<Reservation> {
    // Replacing a value keeps the key's original slot.
    let mut merged: IndexMap<DeviceKey, Reservation> = IndexMap::new();

    for record in configured {
        let Some((key, reservation)) = admit(
            record.key.as_ref(),
            record.name.as_deref(),
            record.fixed_ip.as_deref(),
        ) else {
            trace!(key = ?record.key, "configured client lacks alias or fixed IP");
            continue;
        };
        merged.insert(key.clone(), reservation);
    }

    if include_active {
        for record in active {
            let Some((key, reservation)) =
                admit(record.key.as_ref(), record.name.as_deref(), record.ip.as_deref())
            else {
                trace!(key = ?record.key, "active client lacks alias or IP");
                continue;
            };
            if let Some(previous) = merged.insert(key.clone(), reservation) {
                trace!(%key, previous_ip = %previous.ip, "active client overrides configured entry");
            }
        }
    }

    let mut reservations: Vec<Reservation> = merged
        .into_values()
        .filter(|r| {
            let valid = is_valid_name(&r.name);
            if !valid {
                debug!(name = %r.name, "{} skipped due to invalid characters", r.name);
            }
            valid
        })
        .collect();

    reservations.sort_by(|a, b| a.name.cmp(&b.name));
    reservations
}

/// A record enters the merge only with a key and non-empty name and IP.
fn admit<'a>(
    key: Option<&'a DeviceKey>,
    name: Option<&str>,
    ip: Option<&str>,
) -> Option<(&'a DeviceKey, Reservation)> {
    let key = key?;
    let name = name.filter(|n| !n.is_empty())?;
    let ip = ip.filter(|i| !i.is_empty())?;
    Some((key, Reservation::new(name, ip)))
}
