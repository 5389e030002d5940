//! RSA PKCS#1 v1.5 signer.

use rand::rngs::OsRng;
use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use crate::{
    keys::{Generator, RsaGenerator, RsaKeyPair},
    EncodingError, KeyGenerationError, PublicKeyProvider, Signer, SigningError, Verifier,
};

/// Signs SHA-256 digests with RSA PKCS#1 v1.5 padding.
pub struct RsaSigner {
    /// The key pair bound to this signer.
    key_pair: RsaKeyPair,
}

impl RsaSigner {
    /// Create a signer bound to a freshly generated key pair.
    pub fn generate() -> Result<Self, KeyGenerationError> {
        RsaGenerator.generate().map(Self::from_key_pair)
    }

    /// Create a signer bound to the provided key pair.
    pub fn from_key_pair(key_pair: RsaKeyPair) -> Self {
        Self { key_pair }
    }
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep the key material out of the logs.
        f.debug_struct("RsaSigner").finish_non_exhaustive()
    }
}

impl Signer for RsaSigner {
    type Error = SigningError;

    fn sign<D>(&self, data: D) -> Result<Vec<u8>, Self::Error>
    where
        D: AsRef<[u8]>,
    {
        let digest = Sha256::digest(data.as_ref());
        self.key_pair
            .private
            .sign_with_rng(&mut OsRng, Pkcs1v15Sign::new::<Sha256>(), &digest)
            .map_err(SigningError::Rsa)
    }
}

impl Verifier for RsaSigner {
    fn verify<D, S>(&self, data: D, signature: S) -> bool
    where
        D: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let digest = Sha256::digest(data.as_ref());
        self.key_pair
            .public
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature.as_ref())
            .is_ok()
    }
}

impl PublicKeyProvider for RsaSigner {
    fn public_key_pem(&self) -> Result<String, EncodingError> {
        self.key_pair.public_key_pem()
    }
}
