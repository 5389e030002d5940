//! Error handle logic.

use warp::hyper::StatusCode;

use crate::logic::{op_create_device, op_get_device, op_get_public_key, op_list_devices, op_sign};

/// A logic error, carried through the warp rejection.
#[derive(Debug)]
pub struct Logic {
    /// The HTTP status code to respond with.
    pub status_code: StatusCode,
    /// The machine-readable error code.
    pub error_code: &'static str,
}

impl Logic {
    /// Create a new [`Logic`] error.
    pub fn new(status_code: StatusCode, error_code: &'static str) -> Self {
        Self {
            status_code,
            error_code,
        }
    }

    /// The store failed.
    fn store_internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "STORE_INTERNAL")
    }
}

impl warp::reject::Reject for Logic {}

impl From<op_create_device::Error> for Logic {
    fn from(err: op_create_device::Error) -> Self {
        match err {
            op_create_device::Error::InvalidId => Self::new(StatusCode::BAD_REQUEST, "INVALID_ID"),
            op_create_device::Error::UnsupportedAlgorithm => {
                Self::new(StatusCode::BAD_REQUEST, "UNSUPPORTED_ALGORITHM")
            }
            op_create_device::Error::DeviceAlreadyExists => {
                Self::new(StatusCode::CONFLICT, "DEVICE_ALREADY_EXISTS")
            }
            op_create_device::Error::InternalErrorKeyGeneration(_)
            | op_create_device::Error::InternalErrorKeyGenerationTask(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "KEY_GENERATION_FAILED")
            }
            op_create_device::Error::InternalErrorStore(_) => Self::store_internal(),
        }
    }
}

impl From<op_list_devices::Error> for Logic {
    fn from(err: op_list_devices::Error) -> Self {
        match err {
            op_list_devices::Error::InternalErrorStore(_) => Self::store_internal(),
        }
    }
}

impl From<op_get_device::Error> for Logic {
    fn from(err: op_get_device::Error) -> Self {
        match err {
            op_get_device::Error::InvalidId => Self::new(StatusCode::BAD_REQUEST, "INVALID_ID"),
            op_get_device::Error::DeviceNotFound => {
                Self::new(StatusCode::NOT_FOUND, "DEVICE_NOT_FOUND")
            }
            op_get_device::Error::InternalErrorStore(_) => Self::store_internal(),
        }
    }
}

impl From<op_sign::Error> for Logic {
    fn from(err: op_sign::Error) -> Self {
        match err {
            op_sign::Error::InvalidId => Self::new(StatusCode::BAD_REQUEST, "INVALID_ID"),
            op_sign::Error::DeviceNotFound => Self::new(StatusCode::NOT_FOUND, "DEVICE_NOT_FOUND"),
            op_sign::Error::InternalErrorSigning(_)
            | op_sign::Error::InternalErrorSigningTask(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "SIGNING_FAILED")
            }
            op_sign::Error::InternalErrorStore(_) => Self::store_internal(),
        }
    }
}

impl From<op_get_public_key::Error> for Logic {
    fn from(err: op_get_public_key::Error) -> Self {
        match err {
            op_get_public_key::Error::InvalidId => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_ID")
            }
            op_get_public_key::Error::DeviceNotFound => {
                Self::new(StatusCode::NOT_FOUND, "DEVICE_NOT_FOUND")
            }
            op_get_public_key::Error::InternalErrorEncoding(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "PUBLIC_KEY_ENCODING_FAILED")
            }
            op_get_public_key::Error::InternalErrorStore(_) => Self::store_internal(),
        }
    }
}
