//! Rejection handling logic.

use serde::Serialize;
use warp::{hyper::StatusCode, Reply};

use super::error;

/// Error response shape that we can return for the error body.
#[derive(Debug, Serialize)]
pub(super) struct ErrorResponse {
    /// The machine-readable codes describing the error condition.
    pub errors: Vec<&'static str>,
}

/// This function receives a `Rejection` and generates an error response.
pub async fn handle(err: warp::reject::Rejection) -> Result<impl Reply, std::convert::Infallible> {
    let (status_code, error_code) = if let Some(logic_error) = err.find::<error::Logic>() {
        (logic_error.status_code, logic_error.error_code)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE")
    } else if err.find::<warp::body::BodyDeserializeError>().is_some()
        || err.find::<warp::reject::LengthRequired>().is_some()
        || err.find::<warp::reject::UnsupportedMediaType>().is_some()
    {
        (StatusCode::BAD_REQUEST, "BAD_REQUEST")
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "NOT_FOUND")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "UNHANDLED_REJECTION")
    };

    let json = warp::reply::json(&ErrorResponse {
        errors: vec![error_code],
    });
    Ok(warp::reply::with_status(json, status_code))
}
