//! In-memory device store.

use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};

use signature_device::SignatureDevice;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Device, Error, Storer};

/// Keeps the devices in a map for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryStorer {
    /// The devices by id.
    devices: RwLock<HashMap<Uuid, Device>>,
}

impl InMemoryStorer {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storer for InMemoryStorer {
    async fn create(&self, device: SignatureDevice) -> Result<Device, Error> {
        let mut devices = self.devices.write().await;
        match devices.entry(device.id()) {
            Entry::Occupied(entry) => Err(Error::AlreadyExists(*entry.key())),
            Entry::Vacant(entry) => Ok(Arc::clone(entry.insert(Arc::new(device)))),
        }
    }

    async fn read_one(&self, id: Uuid) -> Result<Option<Device>, Error> {
        Ok(self.devices.read().await.get(&id).cloned())
    }

    async fn read_all(&self) -> Result<Vec<Device>, Error> {
        Ok(self.devices.read().await.values().cloned().collect())
    }
}
