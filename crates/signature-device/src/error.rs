//! Device errors.

use signing_crypto::{KeyGenerationError, UnsupportedAlgorithmError};

/// The errors on the device creation.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// The device id is the nil UUID.
    #[error("invalid device id")]
    InvalidId,
    /// The algorithm tag is not supported.
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithmError),
    /// The key pair could not be generated.
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] KeyGenerationError),
}

/// The errors on the sign operation.
///
/// The device state is left untouched whenever this error is returned, so
/// the call can be retried.
#[derive(Debug, thiserror::Error)]
pub enum SignError<E: std::error::Error + 'static> {
    /// The underlying signer failed.
    #[error("signing failed: {0}")]
    Signing(#[source] E),
}
