//! Get signature device operation.

use device_store::Storer;
use serde::{Deserialize, Serialize};

use super::{common::parse_device_id, Device, Logic, LogicOp};

/// The request of the get device operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// The device id.
    pub id: String,
}

/// The response for the get device operation.
pub type Response = Device;

/// Errors for the get device operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// No device with this id.
    #[error("device not found")]
    DeviceNotFound,
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
        Ok(Device::load(&device).await)
    }
}
