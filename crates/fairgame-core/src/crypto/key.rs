//! Secret HMAC key, generated at commit time and disclosed at reveal.

use super::CryptoError;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex-encoded HMAC key.
///
/// The lowercase hex string is the key material itself: the digest is keyed
/// with the bytes of this string, so a verifier holding only the disclosed
/// hex text can reproduce the digest without decoding anything.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKey(String);

impl HmacKey {
    /// Generate `len_bytes` random bytes from the OS CSPRNG, hex-encoded.
    ///
    /// Key generation deliberately uses the OS RNG, never the gameplay RNG
    /// that picks the computer's move.
    pub fn random(len_bytes: usize) -> Result<Self, CryptoError> {
        if len_bytes == 0 {
            return Err(CryptoError::InvalidLength);
        }
        let mut bytes = vec![0u8; len_bytes];
        OsRng.fill_bytes(&mut bytes);
        Ok(Self(hex::encode(bytes)))
    }

    /// Reconstruct a key from its disclosed hex form.
    pub fn from_hex(hex_str: impl Into<String>) -> Self {
        Self(hex_str.into())
    }

    /// The hex form, as published on reveal.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key material fed to the HMAC.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for HmacKey {
    // never log the whole key
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({}..)", &self.0[..self.0.len().min(8)])
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercase_hex_of_requested_length() {
        let key = HmacKey::random(32).unwrap();
        assert_eq!(key.as_str().len(), 64);
        assert!(key
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_keys_are_distinct() {
        let key1 = HmacKey::random(32).unwrap();
        let key2 = HmacKey::random(32).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(HmacKey::random(0), Err(CryptoError::InvalidLength));
    }

    #[test]
    fn test_short_key_allowed() {
        let key = HmacKey::random(1).unwrap();
        assert_eq!(key.as_str().len(), 2);
    }

    #[test]
    fn test_from_hex_round_trip() {
        let key = HmacKey::random(16).unwrap();
        let restored = HmacKey::from_hex(key.as_str());
        assert_eq!(key, restored);
    }

    #[test]
    fn test_debug_truncates_secret() {
        let key = HmacKey::random(32).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(key.as_str()));
    }
}
