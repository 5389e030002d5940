//! Sign transaction call.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{error_response::ErrorResponse, Client, DataResponse, Error};

impl Client {
    /// Perform the sign call to the server.
    pub async fn sign(&self, req: SignRequest<'_>) -> Result<SignResponse, Error<SignError>> {
        let url = format!("{}/api/v0/devices/sign", self.base_url);
        let res = self.reqwest.post(url).json(&req).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json::<DataResponse<SignResponse>>().await?.data),
            status => Err(Error::Call(SignError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// Input data for the sign request.
#[derive(Debug, Serialize)]
pub struct SignRequest<'a> {
    /// The id of the device to sign with.
    pub id: &'a str,
    /// The data to sign.
    pub data: &'a str,
}

/// The data returned by the sign call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignResponse {
    /// The base64 encoded signature.
    pub signature: String,
    /// The secured payload the signature was computed over.
    pub signed_data: String,
}

/// The sign specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum SignError {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// No device with this id.
    #[error("device not found")]
    DeviceNotFound,
    /// The device failed to produce a signature; it can be retried.
    #[error("signing failed")]
    SigningFailed,
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl SignError {
    /// Parse the error response.
    fn from_response(status: StatusCode, body: String) -> Self {
        let error_response: ErrorResponse = match body.try_into() {
            Ok(v) => v,
            Err(body) => return Self::Unknown(body),
        };
        match (status, error_response.error_code()) {
            (StatusCode::BAD_REQUEST, Some("INVALID_ID")) => Self::InvalidId,
            (StatusCode::NOT_FOUND, Some("DEVICE_NOT_FOUND")) => Self::DeviceNotFound,
            (StatusCode::INTERNAL_SERVER_ERROR, Some("SIGNING_FAILED")) => Self::SigningFailed,
            (_, code) => Self::Unknown(code.unwrap_or_default().to_owned()),
        }
    }
}
