//! Slot hashing.
//!
//! The table never hashes keys to a full-width integer; it asks a
//! [`SlotHasher`] for a slot index against its current capacity. The same
//! key may therefore land on a different slot after a resize.

/// Maps `key` to a slot in `0..capacity`.
///
/// Polynomial hash over the key's bytes with base 3, reduced modulo
/// `capacity` at every step.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn hash(key: &str, capacity: usize) -> usize {
    assert!(capacity > 0, "slot hash needs a non-zero capacity");
    key.bytes()
        .fold(0usize, |running, b| (running * 3 + b as usize) % capacity)
}

/// Strategy for turning a key into a slot index.
///
/// Implementations should return a value below `capacity`; the table
/// reduces the result modulo `capacity` before indexing.
pub trait SlotHasher {
    fn slot(&self, key: &str, capacity: usize) -> usize;
}

/// Default slot hasher, see [`hash`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PolynomialHash;

impl SlotHasher for PolynomialHash {
    #[inline]
    fn slot(&self, key: &str, capacity: usize) -> usize {
        hash(key, capacity)
    }
}
