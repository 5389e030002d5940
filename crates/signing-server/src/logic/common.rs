//! Common logic parameters and helpers.

use serde::{Deserialize, Serialize};
use signature_device::{SignatureAlgorithm, SignatureDevice};
use uuid::Uuid;

/// The public view of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// The device id.
    pub id: Uuid,
    /// The device label.
    pub label: Option<String>,
    /// The algorithm of the device key pair.
    pub signature_algorithm: SignatureAlgorithm,
    /// How many signatures the device has produced.
    pub signature_counter: u64,
}

impl Device {
    /// Snapshot the device.
    pub async fn load(device: &SignatureDevice) -> Self {
        Self {
            id: device.id(),
            label: device.label().map(ToOwned::to_owned),
            signature_algorithm: device.algorithm(),
            signature_counter: device.signature_counter().await,
        }
    }
}

/// Parse the device id as it comes from the outside world.
///
/// The nil UUID is not a valid device id.
pub fn parse_device_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok().filter(|id| !id.is_nil())
}
