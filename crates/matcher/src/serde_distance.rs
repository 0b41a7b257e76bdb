//! Serialization helper for shade distances.
//!
//! Distances are carried as exact `f64` values in Rust and emitted as the
//! nearest whole number in JSON responses.

use serde::Serializer;

/// Serialize a non-negative distance rounded to the nearest integer.
pub fn serialize<S>(distance: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(distance.round().max(0.0) as u64)
}
