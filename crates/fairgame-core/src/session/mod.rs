//! One commit-reveal round, modeled as an explicit state machine.
//!
//! `Idle -> Committed -> Revealed -> Done`. The digest is the only thing
//! published while the key is still secret; the key leaves the session only
//! through [`GameSession::finish`], after the human has moved.

use crate::crypto::{Commitment, CryptoError, HmacAlgorithm, HmacKey};
use crate::rules::{CatalogError, MoveCatalog, Outcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commitment keys are 32 random bytes (64 hex characters).
pub const SESSION_KEY_BYTES: usize = 32;

/// Errors from session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Rules(#[from] CatalogError),

    #[error("operation not valid in session state {0}")]
    InvalidState(&'static str),
}

/// Outcome of one round, from the human's perspective
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub human_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
}

/// Everything published at the end of a round.
///
/// With the disclosed key the human can recompute the keyed digest of the
/// computer's move and compare it against the commitment published up front.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReveal {
    pub result: RoundResult,
    pub key: HmacKey,
}

enum SessionState {
    Idle,
    Committed {
        computer_move: String,
        key: HmacKey,
        commitment: Commitment,
    },
    Revealed {
        result: RoundResult,
        key: HmacKey,
        commitment: Commitment,
    },
    Done,
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Committed { .. } => "Committed",
            SessionState::Revealed { .. } => "Revealed",
            SessionState::Done => "Done",
        }
    }
}

/// A single round of the game: commit, accept the human's move, reveal.
pub struct GameSession {
    catalog: MoveCatalog,
    algorithm: HmacAlgorithm,
    state: SessionState,
    forced_move: Option<String>,
}

impl GameSession {
    /// Create an idle session over the given catalog.
    pub fn new(catalog: MoveCatalog, algorithm: HmacAlgorithm) -> Self {
        Self {
            catalog,
            algorithm,
            state: SessionState::Idle,
            forced_move: None,
        }
    }

    /// Create a session whose computer move is fixed instead of random.
    ///
    /// Used by tests and demos that need a scripted opponent; the commit
    /// and reveal mechanics are unchanged.
    pub fn with_computer_move(
        catalog: MoveCatalog,
        algorithm: HmacAlgorithm,
        computer_move: &str,
    ) -> Result<Self, SessionError> {
        if catalog.index_of(computer_move).is_none() {
            return Err(CatalogError::UnknownMove(computer_move.to_string()).into());
        }
        Ok(Self {
            catalog,
            algorithm,
            state: SessionState::Idle,
            forced_move: Some(computer_move.to_string()),
        })
    }

    /// The catalog this session plays over.
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// Name of the current state, for diagnostics.
    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// The pending commitment, if one has been made.
    pub fn commitment(&self) -> Option<&Commitment> {
        match &self.state {
            SessionState::Committed { commitment, .. }
            | SessionState::Revealed { commitment, .. } => Some(commitment),
            _ => None,
        }
    }

    /// `Idle -> Committed`: pick the computer's move, generate a fresh key,
    /// and commit. Only the digest is returned for publication.
    pub fn commit(&mut self) -> Result<Commitment, SessionError> {
        if !matches!(self.state, SessionState::Idle) {
            return Err(SessionError::InvalidState(self.state.name()));
        }
        let computer_move = match &self.forced_move {
            Some(mv) => mv.clone(),
            None => self.catalog.pick_random().to_string(),
        };
        let key = HmacKey::random(SESSION_KEY_BYTES)?;
        let commitment = Commitment::new(&computer_move, &key, self.algorithm);
        self.state = SessionState::Committed {
            computer_move,
            key,
            commitment,
        };
        Ok(commitment)
    }

    /// `Committed -> Revealed`: accept the human's move and judge the round.
    ///
    /// A move outside the catalog returns `UnknownMove` and leaves the
    /// pending commitment untouched, so the caller can re-prompt.
    pub fn choose(&mut self, human_move: &str) -> Result<Outcome, SessionError> {
        let (computer_move, key, commitment) = match &self.state {
            SessionState::Committed {
                computer_move,
                key,
                commitment,
            } => (computer_move.clone(), key.clone(), *commitment),
            other => return Err(SessionError::InvalidState(other.name())),
        };

        let outcome = self.catalog.compare(human_move, &computer_move)?;
        self.state = SessionState::Revealed {
            result: RoundResult {
                human_move: human_move.to_string(),
                computer_move,
                outcome,
            },
            key,
            commitment,
        };
        Ok(outcome)
    }

    /// `Revealed -> Done`: disclose the key together with the result.
    pub fn finish(&mut self) -> Result<RoundReveal, SessionError> {
        match std::mem::replace(&mut self.state, SessionState::Done) {
            SessionState::Revealed { result, key, .. } => Ok(RoundReveal { result, key }),
            other => {
                let name = other.name();
                self.state = other;
                Err(SessionError::InvalidState(name))
            }
        }
    }
}
