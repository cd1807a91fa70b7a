//! Postal code → federal state resolution.

use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ZipCodeError;
use crate::ranges::RANGES;
use crate::state::State;
use crate::table::{CollisionPolicy, ZipCodeTable, ZipCodeTableBuilder};

/// Numeric postal code. Leading zeros of the written form are insignificant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(u32);

impl ZipCode {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Renders five digits, zero-padded (`01067`).
impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

/// Digits with single underscores between them (`"01_067"`).
fn is_digit_group(body: &str) -> bool {
    let bytes = body.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) if first.is_ascii_digit() && last.is_ascii_digit() => {}
        _ => return false,
    }
    bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') && !body.contains("__")
}

/// Reads an integer numeral: surrounding whitespace, an optional sign and
/// underscores between digits are allowed (`" +01_067 "`).
///
/// A negative numeral is well-formed but can never be a postal code, so it
/// fails with `LookupMiss` rather than `InvalidInput`.
impl FromStr for ZipCode {
    type Err = ZipCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if !is_digit_group(body) {
            return Err(ZipCodeError::InvalidInput(s.to_string()));
        }

        let digits: String = body.chars().filter(|c| *c != '_').collect();
        let value = digits
            .parse::<u32>()
            .map_err(|_| ZipCodeError::InvalidInput(s.to_string()))?;

        if negative && value != 0 {
            return Err(ZipCodeError::LookupMiss(-i64::from(value)));
        }
        Ok(Self(value))
    }
}

impl From<u32> for ZipCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u16> for ZipCode {
    fn from(value: u16) -> Self {
        Self(u32::from(value))
    }
}

/// Anything a postal code can be read from: integers or numeral strings.
///
/// Strings follow [`ZipCode::from_str`]; letters, inner spaces and misplaced
/// underscores are `InvalidInput`.
pub trait IntoZipCode {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError>;
}

impl IntoZipCode for ZipCode {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError> {
        Ok(self)
    }
}

impl IntoZipCode for u32 {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError> {
        Ok(ZipCode::from(self))
    }
}

impl IntoZipCode for u16 {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError> {
        Ok(ZipCode::from(self))
    }
}

impl IntoZipCode for &str {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError> {
        self.parse()
    }
}

impl IntoZipCode for &String {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError> {
        self.parse()
    }
}

impl IntoZipCode for String {
    fn into_zip_code(self) -> Result<ZipCode, ZipCodeError> {
        self.parse()
    }
}

/// Answers "which federal state does postal code X belong to?".
///
/// Built once, then read-only: share it freely across threads.
#[derive(Debug, Clone)]
pub struct ZipStateResolver {
    table: ZipCodeTable,
}

impl ZipStateResolver {
    /// Build from the compiled-in ranges, rejecting any overlap.
    pub fn build() -> Result<Self, ZipCodeError> {
        let builder = RANGES
            .iter()
            .fold(ZipCodeTableBuilder::new(), |builder, (state, ranges)| {
                builder.ranges(*state, ranges.iter().copied())
            })
            .collision_policy(CollisionPolicy::Reject);
        Ok(Self::from_table(builder.build()?))
    }

    pub fn from_table(table: ZipCodeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ZipCodeTable {
        &self.table
    }

    /// Resolve `zip` to its state.
    ///
    /// Fails with `InvalidInput` for non-numerals and `LookupMiss` for codes
    /// no range covers. There is no nearest-match fallback.
    pub fn get_state(&self, zip: impl IntoZipCode) -> Result<State, ZipCodeError> {
        let code = zip.into_zip_code()?.value();
        self.table
            .get(code)
            .ok_or(ZipCodeError::LookupMiss(i64::from(code)))
    }
}

static SHARED: LazyLock<Result<ZipStateResolver, ZipCodeError>> =
    LazyLock::new(ZipStateResolver::build);

/// Process-wide resolver over the compiled-in ranges.
///
/// Built on first use; concurrent first callers wait for the same build.
pub fn shared() -> Result<&'static ZipStateResolver, ZipCodeError> {
    match &*SHARED {
        Ok(resolver) => Ok(resolver),
        Err(err) => Err(err.clone()),
    }
}
