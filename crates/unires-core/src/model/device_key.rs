// ── Device identity ──
//
// A device key is the hardware address records are merged under. It is
// kept as an opaque token; only letter case is normalized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Merge key for client records, normalized to lowercase.
///
/// Two keys are equal when their raw strings are equal ignoring case, so
/// `AA:BB:CC:DD:EE:FF` from one listing and `aa:bb:cc:dd:ee:ff` from the
/// other collapse onto the same device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceKey(String);

impl DeviceKey {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeviceKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for DeviceKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
