//! The algorithm-dispatching signer.

use crate::{
    keys::KeyPair, EcdsaSigner, EncodingError, KeyGenerationError, NewSignerError,
    PublicKeyProvider, RsaSigner, SignatureAlgorithm, Signer, SigningError, Verifier,
};

/// A signer of any of the supported algorithms.
///
/// Adding an algorithm means adding a variant here and an arm in
/// [`KeyPair::generate`].
#[derive(Debug)]
pub enum AlgorithmSigner {
    /// RSA PKCS#1 v1.5.
    Rsa(RsaSigner),
    /// ECDSA P-256.
    Ecdsa(EcdsaSigner),
}

impl AlgorithmSigner {
    /// Create a signer of the given algorithm bound to a freshly generated key pair.
    pub fn generate(algorithm: SignatureAlgorithm) -> Result<Self, KeyGenerationError> {
        Ok(Self::from_key_pair(KeyPair::generate(algorithm)?))
    }

    /// Create a signer for the algorithm named by the tag, bound to a freshly
    /// generated key pair.
    pub fn from_tag(tag: &str) -> Result<Self, NewSignerError> {
        let algorithm: SignatureAlgorithm = tag.parse()?;
        Ok(Self::generate(algorithm)?)
    }

    /// Create a signer bound to the provided key pair.
    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        match key_pair {
            KeyPair::Rsa(pair) => Self::Rsa(RsaSigner::from_key_pair(pair)),
            KeyPair::Ecc(pair) => Self::Ecdsa(EcdsaSigner::from_key_pair(pair)),
        }
    }

    /// The algorithm of this signer.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            Self::Rsa(_) => SignatureAlgorithm::Rsa,
            Self::Ecdsa(_) => SignatureAlgorithm::Ecdsa,
        }
    }
}

impl Signer for AlgorithmSigner {
    type Error = SigningError;

    fn sign<D>(&self, data: D) -> Result<Vec<u8>, Self::Error>
    where
        D: AsRef<[u8]>,
    {
        match self {
            Self::Rsa(signer) => signer.sign(data),
            Self::Ecdsa(signer) => signer.sign(data),
        }
    }
}

impl Verifier for AlgorithmSigner {
    fn verify<D, S>(&self, data: D, signature: S) -> bool
    where
        D: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        match self {
            Self::Rsa(signer) => signer.verify(data, signature),
            Self::Ecdsa(signer) => signer.verify(data, signature),
        }
    }
}

impl PublicKeyProvider for AlgorithmSigner {
    fn public_key_pem(&self) -> Result<String, EncodingError> {
        match self {
            Self::Rsa(signer) => signer.public_key_pem(),
            Self::Ecdsa(signer) => signer.public_key_pem(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::UnsupportedAlgorithmError;

    #[test]
    fn factory_binds_requested_algorithm() {
        for algorithm in SignatureAlgorithm::ALL {
            let signer = AlgorithmSigner::from_tag(algorithm.as_str()).unwrap();
            assert_eq!(signer.algorithm(), algorithm);

            let signature = signer.sign("payload").unwrap();
            assert!(signer.verify("payload", &signature));
        }
    }

    #[test]
    fn factory_rejects_unknown_tag() {
        assert_matches!(
            AlgorithmSigner::from_tag("AES"),
            Err(NewSignerError::UnsupportedAlgorithm(UnsupportedAlgorithmError(tag))) if tag == "AES"
        );
        assert_matches!(
            AlgorithmSigner::from_tag(""),
            Err(NewSignerError::UnsupportedAlgorithm(_))
        );
    }

    #[test]
    fn fresh_key_pair_per_signer() {
        let a = AlgorithmSigner::generate(SignatureAlgorithm::Ecdsa).unwrap();
        let b = AlgorithmSigner::generate(SignatureAlgorithm::Ecdsa).unwrap();

        let signature = a.sign("payload").unwrap();
        assert!(!b.verify("payload", signature));
        assert_ne!(a.public_key_pem().unwrap(), b.public_key_pem().unwrap());
    }
}
