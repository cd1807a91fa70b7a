//! Inclusive postal code intervals.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use mdb_core::ValueObject;

use crate::error::ZipCodeError;

/// Highest representable German postal code.
pub const MAX_ZIP_CODE: u32 = 99_999;

/// Inclusive interval `[start, end]` of postal codes.
///
/// Deserialization is validated like [`ZipRange::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawZipRange")]
pub struct ZipRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawZipRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawZipRange> for ZipRange {
    type Error = ZipCodeError;

    fn try_from(raw: RawZipRange) -> Result<Self, Self::Error> {
        ZipRange::try_new(raw.start, raw.end)
    }
}

impl ValueObject for ZipRange {}

impl ZipRange {
    /// Unchecked constructor for compiled-in reference data.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn try_new(start: u32, end: u32) -> Result<Self, ZipCodeError> {
        if start > end || end > MAX_ZIP_CODE {
            return Err(ZipCodeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, code: u32) -> bool {
        self.start <= code && code <= self.end
    }

    /// Every member code, ascending.
    pub fn codes(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
