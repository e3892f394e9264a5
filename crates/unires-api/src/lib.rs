//! Async client for the UniFi controller's session-authenticated API.
//!
//! Only the surface needed to export client reservations is modelled:
//! cookie-based login, the configured-client listing (`list/user`) and the
//! active-station listing (`stat/sta`). Everything else the controller
//! offers is out of scope for this crate.

pub mod auth;
pub mod error;
pub mod legacy;
pub mod transport;

pub use auth::ControllerPlatform;
pub use error::Error;
pub use legacy::LegacyClient;
pub use legacy::models::{LegacyClientEntry, LegacyUserEntry};
pub use transport::{TlsMode, TransportConfig};
