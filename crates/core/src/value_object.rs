//! Value object trait: equality by value, not identity.
//!
//! Master data such as postal code ranges, federal states and addresses are
//! value objects: they have **no identity** and are defined entirely by their
//! attribute values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: printable in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct ZipRange {
///     start: u32,
///     end: u32,
/// }
///
/// impl ValueObject for ZipRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
