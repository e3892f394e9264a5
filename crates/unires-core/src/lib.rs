//! Reconciliation core for unires.
//!
//! Turns the controller's two client inventories into a reservation list:
//!
//! - **[`Fetcher`]** -- logs in once and pulls the configured (`list/user`)
//!   and active (`stat/sta`) inventories, built from an explicit
//!   [`ControllerConfig`]. Never reads the environment or config files.
//!
//! - **[`reconcile`]** -- merges both inventories by [`DeviceKey`], lets
//!   active records override configured ones, filters unusable names and
//!   returns [`Reservation`]s sorted by name. Pure and synchronous, so it
//!   can be exercised with synthetic records.

pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod model;
pub mod reconcile;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, Credentials, TlsVerification};
pub use error::CoreError;
pub use fetch::Fetcher;
pub use model::{ActiveRecord, ConfiguredRecord, DeviceKey, Inventory, Reservation};
pub use reconcile::{is_valid_name, reconcile};

pub use unires_api::ControllerPlatform;
