//! Create device call.

use reqwest::StatusCode;
use serde::Serialize;

use crate::{error_response::ErrorResponse, Client, DataResponse, Device, Error};

impl Client {
    /// Perform the create device call to the server.
    pub async fn create_device(
        &self,
        req: CreateDeviceRequest<'_>,
    ) -> Result<Device, Error<CreateDeviceError>> {
        let url = format!("{}/api/v0/devices", self.base_url);
        let res = self.reqwest.post(url).json(&req).send().await?;
        match res.status() {
            StatusCode::CREATED => Ok(res.json::<DataResponse<Device>>().await?.data),
            status => Err(Error::Call(CreateDeviceError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// Input data for the create device request.
#[derive(Debug, Serialize)]
pub struct CreateDeviceRequest<'a> {
    /// The device id, a UUID.
    pub id: &'a str,
    /// The optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    /// The algorithm tag, `RSA` or `ECDSA`.
    pub algorithm: &'a str,
}

/// The create device specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum CreateDeviceError {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// The algorithm is not supported.
    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,
    /// A device with this id already exists.
    #[error("device already exists")]
    AlreadyExists,
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl CreateDeviceError {
    /// Parse the error response.
    fn from_response(status: StatusCode, body: String) -> Self {
        if status == StatusCode::CONFLICT {
            return Self::AlreadyExists;
        }
        let error_response: ErrorResponse = match body.try_into() {
            Ok(v) => v,
            Err(body) => return Self::Unknown(body),
        };
        match error_response.error_code() {
            Some("INVALID_ID") => Self::InvalidId,
            Some("UNSUPPORTED_ALGORITHM") => Self::UnsupportedAlgorithm,
            code => Self::Unknown(code.unwrap_or_default().to_owned()),
        }
    }
}
