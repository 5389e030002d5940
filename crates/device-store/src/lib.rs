//! Storage of the signature devices.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use std::sync::Arc;

use signature_device::SignatureDevice;
use uuid::Uuid;

mod in_memory;

pub use in_memory::InMemoryStorer;

/// A shared handle to a stored device.
pub type Device = Arc<SignatureDevice>;

/// An error that can occur at the store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A device with this id is already stored.
    #[error("device {0} already exists")]
    AlreadyExists(Uuid),
    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The device store contract.
#[async_trait::async_trait]
pub trait Storer: Send + Sync {
    /// Insert a new device, rejecting duplicate ids.
    async fn create(&self, device: SignatureDevice) -> Result<Device, Error>;

    /// Look up a device by its id.
    async fn read_one(&self, id: Uuid) -> Result<Option<Device>, Error>;

    /// List all the devices, in no particular order.
    async fn read_all(&self) -> Result<Vec<Device>, Error>;
}

#[async_trait::async_trait]
impl<T: Storer + ?Sized> Storer for Arc<T> {
    async fn create(&self, device: SignatureDevice) -> Result<Device, Error> {
        self.as_ref().create(device).await
    }

    async fn read_one(&self, id: Uuid) -> Result<Option<Device>, Error> {
        self.as_ref().read_one(id).await
    }

    async fn read_all(&self) -> Result<Vec<Device>, Error> {
        self.as_ref().read_all().await
    }
}
