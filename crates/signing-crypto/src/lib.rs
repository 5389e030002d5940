//! Signature algorithms, key pairs and signers used by the signature devices.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

mod algorithm;
mod ecdsa_signer;
mod error;
pub mod keys;
mod rsa_signer;
mod signer;
pub mod traits;

pub use algorithm::*;
pub use ecdsa_signer::EcdsaSigner;
pub use error::*;
pub use rsa_signer::RsaSigner;
pub use signer::*;
pub use traits::*;
