//! Signature algorithm tags.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::UnsupportedAlgorithmError;

/// The signature algorithm a device is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    /// RSA with PKCS#1 v1.5 padding over a SHA-256 digest.
    #[serde(rename = "RSA")]
    Rsa,
    /// ECDSA over NIST P-256 with a SHA-256 digest, DER encoded.
    #[serde(rename = "ECDSA")]
    Ecdsa,
}

impl SignatureAlgorithm {
    /// All the supported algorithms.
    pub const ALL: [Self; 2] = [Self::Rsa, Self::Ecdsa];

    /// The wire tag of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ecdsa => "ECDSA",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = UnsupportedAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| UnsupportedAlgorithmError(s.to_owned()))
    }
}

/// Check whether the tag names a supported signature algorithm.
pub fn is_supported_algorithm(tag: &str) -> bool {
    tag.parse::<SignatureAlgorithm>().is_ok()
}
