//! Core logic of the system.

mod common;
pub mod op_create_device;
pub mod op_get_device;
pub mod op_get_public_key;
pub mod op_list_devices;
pub mod op_sign;
#[cfg(test)]
mod tests;
pub mod traits;

pub use common::Device;
pub use traits::*;

/// The overall generic logic.
pub struct Logic<St> {
    /// The store holding the devices.
    ///
    /// Each device carries its own lock, so the logic itself holds none.
    pub storer: St,
}
