//! Chains: the entries sharing one slot, stored in the table's arena.
//!
//! Entries are linked by generational arena keys instead of pointers. A slot
//! owns only the key of its first entry; each entry carries the key of its
//! successor. Unlinking an entry always rewrites either the slot head or the
//! predecessor's `next` before the arena slot is freed, so no link ever
//! refers to a freed entry.

use crate::error::{KeyNotFound, Result};
use core::fmt;
use slotmap::SlotMap;

slotmap::new_key_type! {
    pub(crate) struct EntryKey;
}

#[derive(Clone, Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Option<EntryKey>,
}

pub(crate) type Arena<V> = SlotMap<EntryKey, Entry<V>>;

/// Outcome of [`ChainMut::upsert`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Upsert<V> {
    Inserted,
    Replaced(V),
}

/// Mutable view of one chain.
pub(crate) struct ChainMut<'a, V> {
    head: &'a mut Option<EntryKey>,
    arena: &'a mut Arena<V>,
}

impl<'a, V> ChainMut<'a, V> {
    pub(crate) fn new(head: &'a mut Option<EntryKey>, arena: &'a mut Arena<V>) -> Self {
        Self { head, arena }
    }

    fn locate(&self, key: &str) -> Option<EntryKey> {
        let mut cursor = *self.head;
        while let Some(k) = cursor {
            let entry = &self.arena[k];
            if entry.key == key {
                return Some(k);
            }
            cursor = entry.next;
        }
        None
    }

    /// Overwrites the value of a matching entry in place, or appends a new
    /// entry at the tail.
    pub(crate) fn upsert(&mut self, key: String, value: V) -> Upsert<V> {
        let mut tail = None;
        let mut cursor = *self.head;
        while let Some(k) = cursor {
            let entry = &mut self.arena[k];
            if entry.key == key {
                return Upsert::Replaced(core::mem::replace(&mut entry.value, value));
            }
            tail = Some(k);
            cursor = entry.next;
        }

        let fresh = self.arena.insert(Entry {
            key,
            value,
            next: None,
        });
        match tail {
            None => *self.head = Some(fresh),
            Some(t) => self.arena[t].next = Some(fresh),
        }
        Upsert::Inserted
    }

    pub(crate) fn find_mut(self, key: &str) -> Result<&'a mut V> {
        let found = self.locate(key);
        let arena = self.arena;
        match found {
            Some(k) => arena
                .get_mut(k)
                .map(|e| &mut e.value)
                .ok_or_else(|| KeyNotFound::new(key)),
            None => Err(KeyNotFound::new(key)),
        }
    }

    /// Unlinks the matching entry and hands back its key and value.
    pub(crate) fn remove(&mut self, key: &str) -> Result<(String, V)> {
        let mut prev: Option<EntryKey> = None;
        let mut cursor = *self.head;
        while let Some(k) = cursor {
            let next = self.arena[k].next;
            if self.arena[k].key == key {
                match prev {
                    None => *self.head = next,
                    Some(p) => self.arena[p].next = next,
                }
                if let Some(entry) = self.arena.remove(k) {
                    return Ok((entry.key, entry.value));
                }
                break;
            }
            prev = Some(k);
            cursor = next;
        }
        Err(KeyNotFound::new(key))
    }
}

/// Read-only view of the entries in one slot.
///
/// Obtained from [`HashTable::chain`](crate::HashTable::chain). The view
/// yields keys and values in chain order and exposes no links, so it cannot
/// be used to restructure the table.
pub struct Chain<'a, V> {
    head: Option<EntryKey>,
    arena: &'a Arena<V>,
}

impl<'a, V> Clone for Chain<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for Chain<'a, V> {}

impl<'a, V: fmt::Debug> fmt::Debug for Chain<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> Chain<'a, V> {
    pub(crate) fn new(head: Option<EntryKey>, arena: &'a Arena<V>) -> Self {
        Self { head, arena }
    }

    pub fn find(&self, key: &str) -> Result<&'a V> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| KeyNotFound::new(key))
    }

    /// Number of entries; walks the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> ChainIter<'a, V> {
        ChainIter {
            cursor: self.head,
            arena: self.arena,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(k, _)| k)
    }
}

impl<'a, V> IntoIterator for Chain<'a, V> {
    type Item = (&'a str, &'a V);
    type IntoIter = ChainIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over one chain, head first.
pub struct ChainIter<'a, V> {
    cursor: Option<EntryKey>,
    arena: &'a Arena<V>,
}

impl<'a, V> fmt::Debug for ChainIter<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainIter")
            .field("exhausted", &self.cursor.is_none())
            .finish_non_exhaustive()
    }
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.arena.get(self.cursor?)?;
        self.cursor = entry.next;
        Some((entry.key.as_str(), &entry.value))
    }
}
