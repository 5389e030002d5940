//! Get device public key operation.

use device_store::Storer;
use serde::{Deserialize, Serialize};
use signature_device::SignatureAlgorithm;
use signing_crypto::EncodingError;

use super::{common::parse_device_id, Logic, LogicOp};

/// The request of the get device public key operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// The device id.
    pub id: String,
}

/// The response for the get device public key operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    /// The algorithm of the key.
    pub algorithm: SignatureAlgorithm,
    /// The public key as SPKI PEM.
    pub public_key: String,
}

/// Errors for the get device public key operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// No device with this id.
    #[error("device not found")]
    DeviceNotFound,
    /// The key could not be encoded.
    #[error("public key encoding failed: {0}")]
    InternalErrorEncoding(#[source] EncodingError),
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
        let id = parse_device_id(&req.id).ok_or(Error::InvalidId)?;
        let device = self
            .storer
            .read_one(id)
            .await
            .map_err(Error::InternalErrorStore)?
            .ok_or(Error::DeviceNotFound)?;

        let public_key = device
            .public_key_pem()
            .map_err(Error::InternalErrorEncoding)?;

        Ok(Response {
            algorithm: device.algorithm(),
            public_key,
        })
    }
}
