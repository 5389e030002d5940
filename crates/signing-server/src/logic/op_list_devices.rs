//! List signature devices operation.

use device_store::Storer;
use serde::{Deserialize, Serialize};

use super::{Device, Logic, LogicOp};

/// The request of the list devices operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request;

/// The response for the list devices operation.
pub type Response = Vec<Device>;

/// Errors for the list devices operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
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

    async fn call(&self, _req: Request) -> Result<Self::Response, Self::Error> {
        let devices = self
            .storer
            .read_all()
            .await
            .map_err(Error::InternalErrorStore)?;

        let mut views = Vec::with_capacity(devices.len());
        for device in &devices {
            views.push(Device::load(device).await);
        }
        views.sort_by_key(|device| device.id);
        Ok(views)
    }
}
