//! Error response handling logic.

use serde::Deserialize;

/// A utility type assisting with decoding error response bodies.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    /// The machine-readable codes identifying the error.
    pub errors: Vec<String>,
}

impl ErrorResponse {
    /// The first error code, if any.
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

impl TryFrom<String> for ErrorResponse {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        serde_json::from_str(&s).map_err(|_parsing_error| s)
    }
}
