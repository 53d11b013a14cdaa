//! Constants for the integers modulo k

/// Smallest supported modulus
pub const MIN_MODULUS: u64 = 1;

/// Largest supported modulus (2^16).
///
/// Curves are enumerated and their chords wrapped in memory proportional to
/// k, and residues stay below 2^15 in magnitude so every product formed by
/// the group law before reduction fits in an `i64`.
pub const MAX_MODULUS: u64 = 1 << 16;
