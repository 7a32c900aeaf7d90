//! # Identifiers
//!
//! Record identifiers, the generators that issue them, and the policy used to compare a lookup
//! key against a stored identifier.

use crate::validate::parse_number;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque record identifier: an integer or a text token.
///
/// Serializes as a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Turns a raw path segment into a lookup key for a store issuing `kind` identifiers.
    ///
    /// For integer stores only the canonical spelling (`"1"`, not `"01"` or `"+1"`) becomes an
    /// integer key; anything else stays text and is left to the store's [`IdMatch`] policy.
    pub fn parse_key(raw: &str, kind: IdKind) -> Self {
        match kind {
            IdKind::Number => match raw.parse::<i64>() {
                Ok(n) if n.to_string() == raw => RecordId::Number(n),
                _ => RecordId::Text(raw.to_string()),
            },
            IdKind::Text => RecordId::Text(raw.to_string()),
        }
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// How a lookup key is compared with stored identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMatch {
    /// Same variant, same value. Text `"1"` never matches integer `1`.
    #[default]
    Exact,
    /// `Exact`, plus a text key matches an integer identifier when it parses to the same number,
    /// so `"1"`, `"01"` and `" 1 "` all find record `1`.
    Coercing,
}

impl IdMatch {
    pub fn matches(self, stored: &RecordId, key: &RecordId) -> bool {
        if stored == key {
            return true;
        }
        match (self, stored, key) {
            (IdMatch::Coercing, RecordId::Number(n), RecordId::Text(s))
            | (IdMatch::Coercing, RecordId::Text(s), RecordId::Number(n)) => {
                text_names_integer(s, *n)
            }
            _ => false,
        }
    }
}

/// Largest magnitude below which every integer is exactly representable as `f64`.
const EXACT_F64_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integer spellings compare as `i64`; other numeric spellings (`"1.0"`, `"1e0"`) only where
/// `f64` is still exact.
fn text_names_integer(text: &str, n: i64) -> bool {
    match text.trim().parse::<i64>() {
        Ok(parsed) => parsed == n,
        Err(_) => parse_number(text).is_some_and(|x| {
            x.fract() == 0.0 && x.abs() < EXACT_F64_INTEGER && x as i64 == n
        }),
    }
}

/// Which variant a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Number,
    Text,
}

/// Produces a fresh identifier for every successful creation.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> RecordId;

    /// Identifier for the seed record at `position` (0-based), assigned at startup before any
    /// client creation.
    fn seed_id(&mut self, _position: usize) -> RecordId {
        self.next_id()
    }
}

/// Wall-clock milliseconds.
///
/// Two creations inside the same millisecond receive the same value; the store refuses the
/// second one rather than inserting a duplicate. Seed records are created back to back, so they
/// are numbered `1, 2, ...` instead, far below any timestamp.
#[derive(Debug, Default)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> RecordId {
        RecordId::Number(Utc::now().timestamp_millis())
    }

    fn seed_id(&mut self, position: usize) -> RecordId {
        RecordId::Number(position as i64 + 1)
    }
}

/// Short random token over `[A-Za-z0-9]`.
#[derive(Debug)]
pub struct RandomTokenIds {
    len: usize,
}

impl RandomTokenIds {
    /// Tokens are at least one character long.
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1) }
    }
}

impl IdGenerator for RandomTokenIds {
    fn next_id(&mut self) -> RecordId {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.len)
            .map(char::from)
            .collect();
        RecordId::Text(token)
    }
}

/// Deterministic counter, for fixtures and tests.
#[derive(Debug)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(start: i64) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        RecordId::Number(id)
    }
}

/// Configuration-level choice of generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Timestamp,
    RandomToken { len: usize },
    Sequential { start: i64 },
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::RandomToken { len: 6 }
    }
}

impl IdStrategy {
    pub fn kind(self) -> IdKind {
        match self {
            IdStrategy::Timestamp | IdStrategy::Sequential { .. } => IdKind::Number,
            IdStrategy::RandomToken { .. } => IdKind::Text,
        }
    }

    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Timestamp => Box::new(TimestampIds),
            IdStrategy::RandomToken { len } => Box::new(RandomTokenIds::new(len)),
            IdStrategy::Sequential { start } => Box::new(SequentialIds::starting_at(start)),
        }
    }
}
