//! Create signature device operation.

use device_store::Storer;
use serde::{Deserialize, Serialize};
use signature_device::{is_supported_algorithm, CreateError, SignatureDevice};
use signing_crypto::KeyGenerationError;
use tracing::{error, info};

use super::{common::parse_device_id, Device, Logic, LogicOp};

/// The request of the create device operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// The caller-chosen device id, a UUID.
    pub id: String,
    /// The optional display name.
    #[serde(default)]
    pub label: Option<String>,
    /// The algorithm tag, `RSA` or `ECDSA`.
    pub algorithm: String,
}

/// The response for the create device operation.
pub type Response = Device;

/// Errors for the create device operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The id is not a valid UUID, or is the nil UUID.
    #[error("invalid device id")]
    InvalidId,
    /// The algorithm tag is not supported.
    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,
    /// A device with the same id already exists.
    #[error("device already exists")]
    DeviceAlreadyExists,
    /// The key pair could not be generated.
    #[error("key generation failed: {0}")]
    InternalErrorKeyGeneration(#[source] KeyGenerationError),
    /// The key generation task did not complete.
    #[error("key generation task failed: {0}")]
    InternalErrorKeyGenerationTask(#[source] tokio::task::JoinError),
    /// The store failed.
    #[error("store error: {0}")]
    InternalErrorStore(#[source] device_store::Error),
}

#[async_trait::async_trait]
impl<St> LogicOp<Request> for Logic<St>
where
    St: Storer,
{
    type Response = Response;
    type Error = Error;

    async fn call(&self, req: Request) -> Result<Self::Response, Self::Error> {
        if !is_supported_algorithm(&req.algorithm) {
            return Err(Error::UnsupportedAlgorithm);
        }
        let id = parse_device_id(&req.id).ok_or(Error::InvalidId)?;

        // Skip the key generation when the id is known to be taken.
        if self
            .storer
            .read_one(id)
            .await
            .map_err(Error::InternalErrorStore)?
            .is_some()
        {
            return Err(Error::DeviceAlreadyExists);
        }

        let Request {
            label, algorithm, ..
        } = req;
        let device =
            tokio::task::spawn_blocking(move || SignatureDevice::new(id, label, &algorithm))
                .await
                .map_err(Error::InternalErrorKeyGenerationTask)?
                .map_err(|err| match err {
                    CreateError::InvalidId => Error::InvalidId,
                    CreateError::UnsupportedAlgorithm(_) => Error::UnsupportedAlgorithm,
                    CreateError::KeyGeneration(err) => {
                        error!(message = "Key generation failed", %id, %err);
                        Error::InternalErrorKeyGeneration(err)
                    }
                })?;

        let device = self.storer.create(device).await.map_err(|err| match err {
            device_store::Error::AlreadyExists(_) => Error::DeviceAlreadyExists,
            err => {
                error!(message = "Unable to store the device", %id, %err);
                Error::InternalErrorStore(err)
            }
        })?;

        info!(
            message = "Created signature device",
            %id,
            algorithm = %device.algorithm(),
        );

        Ok(Device::load(&device).await)
    }
}
