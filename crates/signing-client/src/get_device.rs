//! Get device call.

use reqwest::StatusCode;

use crate::{error_response::ErrorResponse, Client, DataResponse, Device, Error};

impl Client {
    /// Perform the get device call to the server.
    pub async fn get_device(&self, id: &str) -> Result<Device, Error<GetDeviceError>> {
        let url = format!("{}/api/v0/devices/{}", self.base_url, id);
        let res = self.reqwest.get(url).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json::<DataResponse<Device>>().await?.data),
            status => Err(Error::Call(GetDeviceError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// The get device specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum GetDeviceError {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// No device with this id.
    #[error("device not found")]
    NotFound,
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl GetDeviceError {
    /// Parse the error response.
    fn from_response(status: StatusCode, body: String) -> Self {
        let error_response: ErrorResponse = match body.try_into() {
            Ok(v) => v,
            Err(body) => return Self::Unknown(body),
        };
        match (status, error_response.error_code()) {
            (StatusCode::BAD_REQUEST, Some("INVALID_ID")) => Self::InvalidId,
            (StatusCode::NOT_FOUND, Some("DEVICE_NOT_FOUND")) => Self::NotFound,
            (_, code) => Self::Unknown(code.unwrap_or_default().to_owned()),
        }
    }
}
