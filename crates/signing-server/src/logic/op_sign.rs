//! Sign transaction operation.

use device_store::Storer;
use serde::{Deserialize, Serialize};
use signature_device::SignError;
use signing_crypto::SigningError;
use tracing::{debug, error};

use super::{common::parse_device_id, Logic, LogicOp};

/// The request of the sign operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// The id of the device to sign with.
    pub id: String,
    /// The data to sign.
    pub data: String,
}

/// The response for the sign operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    /// The base64 encoded signature over `signed_data`.
    pub signature: String,
    /// The secured payload that was actually signed.
    pub signed_data: String,
}

/// Errors for the sign operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// No device with this id.
    #[error("device not found")]
    DeviceNotFound,
    /// The signer failed; the device state is unchanged.
    #[error("signing failed: {0}")]
    InternalErrorSigning(#[source] SigningError),
    /// The signing task did not complete; the device state is unchanged.
    #[error("signing task failed: {0}")]
    InternalErrorSigningTask(#[source] tokio::task::JoinError),
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

        // Signing is CPU bound, so it runs on the blocking pool.
        let Request { data, .. } = req;
        let res = tokio::task::spawn_blocking(move || device.blocking_sign(&data))
            .await
            .map_err(|err| {
                error!(message = "Signing task failed", %id, %err);
                Error::InternalErrorSigningTask(err)
            })?
            .map_err(|err| match err {
                SignError::Signing(err) => {
                    error!(message = "Signing failed", %id, %err);
                    Error::InternalErrorSigning(err)
                }
            })?;

        debug!(message = "Signed transaction", %id);

        Ok(Response {
            signature: res.signature,
            signed_data: res.secured_payload,
        })
    }
}
