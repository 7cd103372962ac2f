//! chained-hashtable: a single-threaded hash table from string keys to
//! arbitrary values, using separate chaining and prime-sized growth.
//!
//! Internal Design:
//!
//! Summary
//! - Layers, leaves first:
//!   - `prime`: primality test and next-prime search used to size tables.
//!   - `hash`: capacity-dependent slot hash and the `SlotHasher` seam.
//!   - `chain`: per-slot chains of entries kept in a slotmap arena and
//!     linked by generational keys.
//!   - `HashTable<V, S>`: owns the slot heads and the arena, routes every
//!     operation to one chain, and grows when the load threshold is hit.
//!
//! Constraints
//! - Keys are `String`; values are any `V`, moved in and out, never cloned.
//! - Slot count is always prime.
//! - After `insert` returns, `count < capacity * 3 / 4`. Growth triggers
//!   when the count reaches three quarters of the capacity and rebuilds
//!   the table with `next_prime(2 * capacity)` slots.
//! - Missing keys are reported as `KeyNotFound`; nothing else fails.
//!
//! Arena and links
//! - Entries never point at each other directly. A slot stores the arena
//!   key of its first entry and each entry stores the key of its successor.
//!   Removal rewrites the predecessor link (or the slot head) before the
//!   arena slot is freed.
//! - Growth moves entries into a fresh arena through the normal placement
//!   path, so the old storage is dropped as a unit and no link survives
//!   across a resize.
//!
//! Notes and non-goals
//! - Single-threaded: mutation goes through `&mut self`, so growth can
//!   never interleave with another operation. Share across threads behind
//!   an external lock.
//! - No iteration-order guarantees; order changes on growth.
//! - `Clone` is a deep copy: new slot storage, new entries.
//! - Logging goes through the `log` facade: growth at `debug`, individual
//!   inserts and deletes at `trace`.

mod chain;
mod error;
pub mod hash;
mod hash_table;
mod hash_table_proptest;
pub mod prime;
#[cfg(test)]
mod test_logger;

// Public surface
pub use chain::{Chain, ChainIter};
pub use error::{KeyNotFound, Result};
pub use hash::{PolynomialHash, SlotHasher};
pub use hash_table::{HashTable, HashTableBuilder, Iter, DEFAULT_CAPACITY};
