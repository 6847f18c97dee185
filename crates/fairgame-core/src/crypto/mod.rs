//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - `HmacAlgorithm` for selecting the keyed-hash algorithm by name
//! - `HmacKey`, the secret generated at commit time and disclosed at reveal
//! - `Commitment`, the keyed digest published before the human moves

mod commitment;
mod key;

pub use commitment::{Commitment, HmacAlgorithm};
pub use key::HmacKey;

use thiserror::Error;

/// Errors from commitment primitives
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid algorithm '{0}'. You must provide a supported hash algorithm.")]
    UnsupportedAlgorithm(String),

    #[error("Invalid length. You must provide a positive integer.")]
    InvalidLength,
}
