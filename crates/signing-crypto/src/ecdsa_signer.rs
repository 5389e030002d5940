//! ECDSA P-256 signer.

use p256::ecdsa::{
    signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner},
    Signature,
};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::{
    keys::{EccGenerator, EccKeyPair, Generator},
    EncodingError, KeyGenerationError, PublicKeyProvider, Signer, SigningError, Verifier,
};

/// Signs SHA-256 digests with ECDSA and produces ASN.1 DER encoded signatures.
pub struct EcdsaSigner {
    /// The key pair bound to this signer.
    key_pair: EccKeyPair,
}

impl EcdsaSigner {
    /// Create a signer bound to a freshly generated key pair.
    pub fn generate() -> Result<Self, KeyGenerationError> {
        EccGenerator.generate().map(Self::from_key_pair)
    }

    /// Create a signer bound to the provided key pair.
    pub fn from_key_pair(key_pair: EccKeyPair) -> Self {
        Self { key_pair }
    }
}

impl std::fmt::Debug for EcdsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep the key material out of the logs.
        f.debug_struct("EcdsaSigner").finish_non_exhaustive()
    }
}

impl Signer for EcdsaSigner {
    type Error = SigningError;

    fn sign<D>(&self, data: D) -> Result<Vec<u8>, Self::Error>
    where
        D: AsRef<[u8]>,
    {
        let digest = Sha256::digest(data.as_ref());
        let signature: Signature = self
            .key_pair
            .private
            .sign_prehash_with_rng(&mut OsRng, &digest)
            .map_err(SigningError::Ecdsa)?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

impl Verifier for EcdsaSigner {
    fn verify<D, S>(&self, data: D, signature: S) -> bool
    where
        D: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let Ok(signature) = Signature::from_der(signature.as_ref()) else {
            return false;
        };
        let digest = Sha256::digest(data.as_ref());
        self.key_pair
            .public
            .verify_prehash(&digest, &signature)
            .is_ok()
    }
}

impl PublicKeyProvider for EcdsaSigner {
    fn public_key_pem(&self) -> Result<String, EncodingError> {
        self.key_pair.public_key_pem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify() {
        let signer = EcdsaSigner::generate().unwrap();
        let message = b"Something important";

        let signature = signer.sign(message).unwrap();
        assert!(signer.verify(message, &signature));
        assert!(!signer.verify(b"Something else", &signature));
    }

    #[test]
    fn produces_der_signatures() {
        let signer = EcdsaSigner::generate().unwrap();
        let signature = signer.sign(b"").unwrap();

        // ASN.1 SEQUENCE tag.
        assert_eq!(signature[0], 0x30);
        Signature::from_der(&signature).unwrap();
    }

    #[test]
    fn signatures_are_randomized() {
        let signer = EcdsaSigner::generate().unwrap();

        let a = signer.sign(b"data").unwrap();
        let b = signer.sign(b"data").unwrap();

        assert_ne!(a, b);
        assert!(signer.verify(b"data", a));
        assert!(signer.verify(b"data", b));
    }

    #[test]
    fn rejects_malformed_signature() {
        let signer = EcdsaSigner::generate().unwrap();
        assert!(!signer.verify(b"data", b"\x30\x01"));
    }
}
