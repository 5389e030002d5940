//! Crypto errors.

/// The algorithm tag is not one of the supported signature algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported signature algorithm: {0:?}")]
pub struct UnsupportedAlgorithmError(pub String);

/// An error that can occur while generating a key pair.
#[derive(Debug, thiserror::Error)]
pub enum KeyGenerationError {
    /// RSA key generation failed.
    #[error("rsa key generation failed: {0}")]
    Rsa(#[source] rsa::Error),
}

/// An error that can occur while producing a signature.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// RSA signing failed.
    #[error("rsa signing failed: {0}")]
    Rsa(#[source] rsa::Error),
    /// ECDSA signing failed.
    #[error("ecdsa signing failed: {0}")]
    Ecdsa(#[source] p256::ecdsa::Error),
}

/// An error that can occur while encoding a key into PEM.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// The public key could not be encoded as SPKI.
    #[error("public key encoding failed: {0}")]
    PublicKey(#[source] rsa::pkcs8::spki::Error),
    /// The private key could not be encoded as PKCS#8.
    #[error("private key encoding failed: {0}")]
    PrivateKey(#[source] rsa::pkcs8::Error),
}

/// An error that can occur while constructing a signer from an algorithm tag.
#[derive(Debug, thiserror::Error)]
pub enum NewSignerError {
    /// The algorithm tag is not supported.
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithmError),
    /// The key pair could not be generated.
    #[error(transparent)]
    KeyGeneration(#[from] KeyGenerationError),
}
