//! Keyed commitment for the commit-reveal scheme.

use super::{CryptoError, HmacKey};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Keyed-hash algorithm used for commitments.
///
/// A single 256-bit algorithm is supported; the named constructor exists so
/// that an unavailable algorithm fails at startup rather than mid-round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HmacAlgorithm {
    Sha256,
}

impl HmacAlgorithm {
    /// Look up an algorithm by name.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" | "hmac-sha256" => Ok(HmacAlgorithm::Sha256),
            _ => Err(CryptoError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// Canonical algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha256 => "sha256",
        }
    }
}

impl FromStr for HmacAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Commitment = HMAC(key, message)
///
/// Published before the human chooses, verified after the key is disclosed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Compute the keyed digest of `message` under `key`.
    ///
    /// Deterministic: the same message, key, and algorithm always produce
    /// the same digest. That determinism is what lets the human recompute
    /// the digest after the reveal.
    pub fn new(message: &str, key: &HmacKey, algorithm: HmacAlgorithm) -> Self {
        match algorithm {
            HmacAlgorithm::Sha256 => {
                let mut mac = HmacSha256::new_from_slice(key.as_bytes())
                    .expect("HMAC accepts keys of any length");
                mac.update(message.as_bytes());
                Self(mac.finalize().into_bytes().into())
            }
        }
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form, as published to the player.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify that `message` and `key` reproduce this digest.
    pub fn verify(&self, message: &str, key: &HmacKey, algorithm: HmacAlgorithm) -> bool {
        *self == Self::new(message, key, algorithm)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
