//! List devices call.

use reqwest::StatusCode;

use crate::{Client, DataResponse, Device, Error};

impl Client {
    /// Perform the list devices call to the server.
    pub async fn list_devices(&self) -> Result<Vec<Device>, Error<ListDevicesError>> {
        let url = format!("{}/api/v0/devices", self.base_url);
        let res = self.reqwest.get(url).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json::<DataResponse<Vec<Device>>>().await?.data),
            _ => Err(Error::Call(ListDevicesError::Unknown(res.text().await?))),
        }
    }
}

/// The list devices specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum ListDevicesError {
    /// Some error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}
