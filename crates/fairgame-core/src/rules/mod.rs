//! Move catalog and the cyclic comparison rule.
//!
//! The catalog is an ordered, duplicate-free list of N moves, N odd and at
//! least 3. Cyclically, every move beats the `half = N / 2` moves that
//! follow it and loses to the `half` moves that precede it, so each move
//! wins against exactly as many moves as it loses to.

pub mod table;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Errors from catalog construction and move lookup
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid moves, you must provide an odd number of at least 3 non-repeating strings.")]
    WrongCount,

    #[error("Invalid moves. You must provide non-repeating strings.")]
    Repeated,

    #[error("Unknown move: {0}")]
    UnknownMove(String),
}

/// Result of comparing two moves, from the first move's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Capitalized form, used in the outcome matrix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Lowercase verb for the "You ...!" verdict line.
    pub fn verdict(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered, duplicate-free move catalog for one session.
///
/// Immutable once constructed; a move's index is its rank in the cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCatalog {
    moves: Vec<String>,
    half: usize,
}

impl MoveCatalog {
    /// Validate and build a catalog.
    ///
    /// Rejects fewer than 3 moves, an even number of moves, and repeated
    /// tokens.
    pub fn new(moves: Vec<String>) -> Result<Self, CatalogError> {
        if moves.len() < 3 || moves.len() % 2 == 0 {
            return Err(CatalogError::WrongCount);
        }
        let unique: HashSet<&str> = moves.iter().map(String::as_str).collect();
        if unique.len() != moves.len() {
            return Err(CatalogError::Repeated);
        }
        let half = moves.len() / 2;
        Ok(Self { moves, half })
    }

    /// All moves, in cycle order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Number of moves in the catalog.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// How many moves each move beats (and loses to).
    pub fn half(&self) -> usize {
        self.half
    }

    /// Rank of a move in the cycle, if it is in the catalog.
    pub fn index_of(&self, mv: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == mv)
    }

    /// Move at the given rank.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Pick a move uniformly at random.
    ///
    /// Gameplay randomness only; commitment keys come from the OS CSPRNG
    /// in the crypto module.
    pub fn pick_random(&self) -> &str {
        let index = rand::thread_rng().gen_range(0..self.moves.len());
        &self.moves[index]
    }

    /// Compare two moves from `a`'s perspective.
    ///
    /// Identical strings draw. Otherwise `a` wins when `b` is one of the
    /// `half` moves cyclically following `a`, and loses when `b` is one
    /// of the `half` that precede it.
    pub fn compare(&self, a: &str, b: &str) -> Result<Outcome, CatalogError> {
        if a == b {
            return Ok(Outcome::Draw);
        }
        let ia = self
            .index_of(a)
            .ok_or_else(|| CatalogError::UnknownMove(a.to_string()))?;
        let ib = self
            .index_of(b)
            .ok_or_else(|| CatalogError::UnknownMove(b.to_string()))?;
        Ok(self.compare_at(ia, ib))
    }

    /// Compare two catalog ranks directly.
    pub(crate) fn compare_at(&self, ia: usize, ib: usize) -> Outcome {
        if ia == ib {
            return Outcome::Draw;
        }
        let n = self.moves.len();
        let distance = (n + ib - ia) % n;
        if distance <= self.half {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}
