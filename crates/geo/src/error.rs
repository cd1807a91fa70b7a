//! Postal code resolution errors.

use thiserror::Error;

use mdb_core::DomainError;

use crate::state::State;

/// Error raised while building or querying the postal code table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZipCodeError {
    /// The input is not a numeral (e.g. "abc", "", "12a45").
    #[error("invalid zip code input: {0:?}")]
    InvalidInput(String),

    /// The code is well-formed but no configured range covers it
    /// (negative numerals included).
    #[error("no state for zip code {0:05}")]
    LookupMiss(i64),

    /// Neither a state code nor a state name.
    #[error("invalid state: {0:?}")]
    InvalidState(String),

    /// A range with `start > end` or an upper bound beyond five digits.
    #[error("invalid zip code range {start}..={end}")]
    InvalidRange { start: u32, end: u32 },

    /// The same code is claimed by two different states.
    #[error("zip code {code:05} claimed by both {first} and {second}")]
    Collision {
        code: u32,
        first: State,
        second: State,
    },
}

impl From<ZipCodeError> for DomainError {
    fn from(err: ZipCodeError) -> Self {
        match err {
            ZipCodeError::LookupMiss(_) => DomainError::not_found(err.to_string()),
            ZipCodeError::InvalidInput(_)
            | ZipCodeError::InvalidState(_)
            | ZipCodeError::InvalidRange { .. } => DomainError::validation(err.to_string()),
            ZipCodeError::Collision { .. } => DomainError::invariant(err.to_string()),
        }
    }
}
