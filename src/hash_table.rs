//! HashTable: string-keyed map with separate chaining and prime-sized growth.

use crate::chain::{Arena, Chain, ChainIter, ChainMut, EntryKey, Upsert};
use crate::error::Result;
use crate::hash::{PolynomialHash, SlotHasher};
use crate::prime::next_prime;
use core::fmt;
use log::{debug, trace};

/// Slot count used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 11;

// Growth fires once count / capacity reaches 3/4.
const LOAD_NUMERATOR: usize = 3;
const LOAD_DENOMINATOR: usize = 4;

/// A hash table from `String` keys to `V`.
///
/// Collisions are resolved by chaining: every slot heads a singly linked
/// chain of entries. The slot count is always prime. When an insertion
/// brings the entry count to three quarters of the slot count, the table
/// rebuilds itself with `next_prime(2 * capacity)` slots, so after any
/// `insert` returns `count() < capacity() * 0.75`.
///
/// Values are stored as given. To share a value with the caller, store a
/// handle such as `Rc<T>` or `&T`.
#[derive(Clone)]
pub struct HashTable<V, S = PolynomialHash> {
    hasher: S,
    heads: Vec<Option<EntryKey>>,
    entries: Arena<V>,
}

impl<V> HashTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with at least `capacity` slots, rounded up to a prime.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, PolynomialHash)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> HashTable<V, S> {
    /// Number of slots. Always prime.
    pub fn capacity(&self) -> usize {
        self.heads.len()
    }

    /// Number of stored entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load_factor(&self) -> f64 {
        self.count() as f64 / self.capacity() as f64
    }

    /// Read-only view of the chain at slot `index`, or `None` when `index`
    /// is not below `capacity()`.
    pub fn chain(&self, index: usize) -> Option<Chain<'_, V>> {
        self.heads
            .get(index)
            .map(|&head| Chain::new(head, &self.entries))
    }

    /// Iterates over all entries, slot by slot. The order carries no meaning
    /// and changes when the table grows.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            heads: self.heads.iter(),
            current: Chain::new(None, &self.entries).iter(),
            entries: &self.entries,
            remaining: self.entries.len(),
        }
    }

    fn needs_growth(&self) -> bool {
        self.count() * LOAD_DENOMINATOR >= self.capacity() * LOAD_NUMERATOR
    }
}

impl<V, S> HashTable<V, S>
where
    S: SlotHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = next_prime(capacity);
        Self {
            hasher,
            heads: vec![None; capacity],
            entries: Arena::with_key(),
        }
    }

    fn slot_of(&self, key: &str) -> usize {
        let capacity = self.capacity();
        self.hasher.slot(key, capacity) % capacity
    }

    fn chain_mut(&mut self, slot: usize) -> ChainMut<'_, V> {
        ChainMut::new(&mut self.heads[slot], &mut self.entries)
    }

    fn place(&mut self, key: String, value: V) -> (usize, Upsert<V>) {
        let slot = self.slot_of(&key);
        let outcome = self.chain_mut(slot).upsert(key, value);
        (slot, outcome)
    }

    /// Inserts `value` under `key`, growing the table if the load threshold
    /// is reached.
    ///
    /// If the key was already present its value is overwritten in place and
    /// the previous value is returned; the entry count does not change.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let (slot, outcome) = self.place(key.into(), value);
        let displaced = match outcome {
            Upsert::Inserted => {
                trace!("insert: new entry in slot {} ({} entries)", slot, self.count());
                None
            }
            Upsert::Replaced(old) => {
                trace!("insert: replaced value in slot {}", slot);
                Some(old)
            }
        };
        if self.needs_growth() {
            self.expand();
        }
        displaced
    }

    pub fn search(&self, key: &str) -> Result<&V> {
        Chain::new(self.heads[self.slot_of(key)], &self.entries).find(key)
    }

    pub fn search_mut(&mut self, key: &str) -> Result<&mut V> {
        let slot = self.slot_of(key);
        self.chain_mut(slot).find_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_ok()
    }

    /// Removes `key` and returns its value. A missing key leaves the table
    /// untouched.
    pub fn delete(&mut self, key: &str) -> Result<V> {
        let slot = self.slot_of(key);
        let (_, value) = self.chain_mut(slot).remove(key)?;
        trace!("delete: slot {} ({} entries left)", slot, self.count());
        Ok(value)
    }

    /// Moves every entry into fresh storage with `next_prime(2 * capacity)`
    /// slots. Slots are recomputed against the new capacity.
    fn expand(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = next_prime(old_capacity * 2);
        let count = self.count();

        let old_heads = core::mem::replace(&mut self.heads, vec![None; new_capacity]);
        let mut old_entries =
            core::mem::replace(&mut self.entries, Arena::with_capacity_and_key(count));

        for head in old_heads {
            let mut cursor = head;
            while let Some(entry) = cursor.and_then(|k| old_entries.remove(k)) {
                cursor = entry.next;
                let (_, outcome) = self.place(entry.key, entry.value);
                debug_assert!(matches!(outcome, Upsert::Inserted));
            }
        }
        debug_assert_eq!(self.count(), count);
        debug_assert!(!self.needs_growth());

        debug!(
            "expanded hash table: {} -> {} slots, {} entries",
            old_capacity, new_capacity, count
        );
    }
}

impl<V, S> fmt::Debug for HashTable<V, S>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<V, S>
where
    K: Into<String>,
    S: SlotHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<V, S>
where
    K: Into<String>,
    S: SlotHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.extend(iter);
        table
    }
}

impl<'a, V, S> IntoIterator for &'a HashTable<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all entries of a [`HashTable`].
pub struct Iter<'a, V> {
    heads: core::slice::Iter<'a, Option<EntryKey>>,
    current: ChainIter<'a, V>,
    entries: &'a Arena<V>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
            let &head = self.heads.next()?;
            self.current = Chain::new(head, self.entries).iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V> fmt::Debug for Iter<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Configures the initial capacity and slot hasher of a [`HashTable`].
#[derive(Clone, Debug)]
pub struct HashTableBuilder<S = PolynomialHash> {
    capacity: usize,
    hasher: S,
}

impl HashTableBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hasher: PolynomialHash,
        }
    }
}

impl Default for HashTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> HashTableBuilder<S>
where
    S: SlotHasher,
{
    /// Capacity hint; rounded up to a prime when the table is built.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn hasher<T: SlotHasher>(self, hasher: T) -> HashTableBuilder<T> {
        HashTableBuilder {
            capacity: self.capacity,
            hasher,
        }
    }

    pub fn build<V>(self) -> HashTable<V, S> {
        HashTable::with_capacity_and_hasher(self.capacity, self.hasher)
    }
}
