//! Client API for the signature service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod create_device;
mod error_response;
mod get_device;
mod get_public_key;
mod list_devices;
mod sign;
#[cfg(test)]
mod test_utils;

pub use create_device::*;
pub use get_device::*;
pub use get_public_key::*;
pub use list_devices::*;
pub use sign::*;

/// The generic error type for the client calls.
#[derive(Error, Debug)]
pub enum Error<T: std::error::Error + 'static> {
    /// A call-specific error.
    #[error("server error: {0}")]
    Call(T),
    /// An error coming from the underlying reqwest layer.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// The signature service client.
#[derive(Debug)]
pub struct Client {
    /// Underlying HTTP client used to execute network calls.
    pub reqwest: reqwest::Client,
    /// The base URL to use for the routes.
    pub base_url: String,
}

/// A device as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// The device id, a UUID.
    pub id: String,
    /// The device label.
    pub label: Option<String>,
    /// The algorithm tag, `RSA` or `ECDSA`.
    pub signature_algorithm: String,
    /// How many signatures the device has produced.
    pub signature_counter: u64,
}

/// The envelope the server wraps the successful responses into.
#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    /// The payload.
    data: T,
}
