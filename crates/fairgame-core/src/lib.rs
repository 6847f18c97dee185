//! Fairgame Core Library
//!
//! This crate provides the move rules, cryptographic commitments, and the
//! one-round session state machine for a provably-fair generalized
//! rock-paper-scissors game: the computer commits to its move with an
//! HMAC-SHA256 digest before the human chooses, then discloses the key so
//! the commitment can be verified independently.

pub mod crypto;
pub mod rules;
pub mod session;

pub use crypto::{Commitment, CryptoError, HmacAlgorithm, HmacKey};
pub use rules::{CatalogError, MoveCatalog, Outcome};
pub use session::{GameSession, RoundResult, RoundReveal, SessionError, SESSION_KEY_BYTES};
