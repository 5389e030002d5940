//! Get device public key call.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{error_response::ErrorResponse, Client, DataResponse, Error};

impl Client {
    /// Perform the get public key call to the server.
    pub async fn get_public_key(
        &self,
        id: &str,
    ) -> Result<GetPublicKeyResponse, Error<GetPublicKeyError>> {
        let url = format!("{}/api/v0/devices/{}/public-key", self.base_url, id);
        let res = self.reqwest.get(url).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json::<DataResponse<GetPublicKeyResponse>>().await?.data),
            status => Err(Error::Call(GetPublicKeyError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// The data returned by the get public key call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetPublicKeyResponse {
    /// The algorithm tag of the key.
    pub algorithm: String,
    /// The public key as SPKI PEM.
    pub public_key: String,
}

/// The get public key specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum GetPublicKeyError {
    /// The id is not a valid device id.
    #[error("invalid device id")]
    InvalidId,
    /// No device with this id.
    #[error("device not found")]
    DeviceNotFound,
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl GetPublicKeyError {
    /// Parse the error response.
    fn from_response(status: StatusCode, body: String) -> Self {
        let error_response: ErrorResponse = match body.try_into() {
            Ok(v) => v,
            Err(body) => return Self::Unknown(body),
        };
        match (status, error_response.error_code()) {
            (StatusCode::BAD_REQUEST, Some("INVALID_ID")) => Self::InvalidId,
            (StatusCode::NOT_FOUND, Some("DEVICE_NOT_FOUND")) => Self::DeviceNotFound,
            (_, code) => Self::Unknown(code.unwrap_or_default().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::test_utils::{mkdata, mkerr};

    #[tokio::test]
    async fn mock_success() {
        let mock_server = MockServer::start().await;

        let sample_response = serde_json::json!({
            "algorithm": "ECDSA",
            "public_key": "-----BEGIN PUBLIC KEY-----\n...\n-----END PUBLIC KEY-----\n",
        });

        Mock::given(matchers::method("GET"))
            .and(matchers::path(
                "/api/v0/devices/6d6e2ee3-8bbc-4f5c-9d53-0c2a8d5b9a1e/public-key",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(mkdata(sample_response)))
            .mount(&mock_server)
            .await;

        let client = Client {
            base_url: mock_server.uri(),
            reqwest: reqwest::Client::new(),
        };

        let res = client
            .get_public_key("6d6e2ee3-8bbc-4f5c-9d53-0c2a8d5b9a1e")
            .await
            .unwrap();
        assert_eq!(res.algorithm, "ECDSA");
        assert!(res.public_key.starts_with("-----BEGIN PUBLIC KEY-----"));
    }

    #[tokio::test]
    async fn mock_error_invalid_id() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/api/v0/devices/bogus/public-key"))
            .respond_with(ResponseTemplate::new(400).set_body_json(mkerr("INVALID_ID")))
            .mount(&mock_server)
            .await;

        let client = Client {
            base_url: mock_server.uri(),
            reqwest: reqwest::Client::new(),
        };

        let actual_error = client.get_public_key("bogus").await.unwrap_err();
        assert_matches!(actual_error, Error::Call(GetPublicKeyError::InvalidId));
    }
}
