//! German postal code (PLZ) to federal state resolution.
//!
//! Pure in-memory lookups over compiled-in reference data (no IO). The table
//! is expanded once from per-state ranges and then queried in O(1).
//!
//! ```ignore
//! use mdb_geo::{State, get_state};
//!
//! assert_eq!(get_state("01067")?, State::Sachsen);
//! assert_eq!(get_state(80331u32)?, State::Bayern);
//! ```

pub mod address;
pub mod error;
pub mod range;
pub mod ranges;
pub mod resolver;
pub mod state;
pub mod table;

pub use address::Address;
pub use error::ZipCodeError;
pub use range::{MAX_ZIP_CODE, ZipRange};
pub use ranges::RANGES;
pub use resolver::{IntoZipCode, ZipCode, ZipStateResolver};
pub use state::State;
pub use table::{CollisionPolicy, ZipCodeTable, ZipCodeTableBuilder};

/// Resolve `zip` with the process-wide [`ZipStateResolver`].
pub fn get_state(zip: impl IntoZipCode) -> Result<State, ZipCodeError> {
    resolver::shared()?.get_state(zip)
}
