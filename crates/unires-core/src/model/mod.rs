// ── Domain model ──
//
// Identity (`DeviceKey`), the two source record shapes, and the
// reservation that leaves the pipeline.

pub mod device_key;
pub mod record;

pub use device_key::DeviceKey;
pub use record::{ActiveRecord, ConfiguredRecord, Inventory, Reservation};
