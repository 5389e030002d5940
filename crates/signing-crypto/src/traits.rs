//! Generic traits to abstract away the signing implementations.

use crate::EncodingError;

/// Signer provides signatures for the data.
pub trait Signer {
    /// Signature error.
    type Error;

    /// Sign the provided data and return the raw signature, or an error if the signing fails.
    fn sign<D>(&self, data: D) -> Result<Vec<u8>, Self::Error>
    where
        D: AsRef<[u8]>;
}

/// Verifier provides the verification of the data accompanied with the
/// signature.
pub trait Verifier {
    /// Verify that provided data is indeed correctly signed with the provided
    /// raw signature.
    fn verify<D, S>(&self, data: D, signature: S) -> bool
    where
        D: AsRef<[u8]>,
        S: AsRef<[u8]>;
}

/// Exposes the public part of the key pair.
pub trait PublicKeyProvider {
    /// The public key encoded as SPKI PEM.
    fn public_key_pem(&self) -> Result<String, EncodingError>;
}
