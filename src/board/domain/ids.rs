//! Canonical integer identifiers for tasks and categories.
//!
//! Identifiers cross every boundary as `u64`. Textual input is normalized
//! explicitly through [`FromStr`] or the lenient deserializer used for seed
//! data; anything that is not a positive integer is rejected.

use super::BoardDomainError;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = BoardDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_positive(value).map(Self)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer)?
            .normalize()
            .map(Self)
            .map_err(de::Error::custom)
    }
}

/// Unique identifier for a category record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = BoardDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_positive(value).map(Self)
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer)?
            .normalize()
            .map(Self)
            .map_err(de::Error::custom)
    }
}

/// Wire shapes accepted for identifiers in persisted data.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn normalize(self) -> Result<u64, BoardDomainError> {
        match self {
            Self::Number(0) => Err(BoardDomainError::InvalidIdentifier("0".to_owned())),
            Self::Number(value) => Ok(value),
            Self::Text(text) => parse_positive(&text),
        }
    }
}

fn parse_positive(value: &str) -> Result<u64, BoardDomainError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(BoardDomainError::InvalidIdentifier(value.to_owned())),
    }
}
