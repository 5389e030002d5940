//! Signature devices producing chained signatures.
//!
//! Every signature a device produces covers the secured payload
//! `"{counter}_{data}_{last_signature}"`, linking it to the previous
//! signature of the same device. The chain starts at the base64 encoding of
//! the device id.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

mod device;
mod error;
mod sequence;

pub use device::*;
pub use error::*;
pub use signing_crypto::{is_supported_algorithm, SignatureAlgorithm};
