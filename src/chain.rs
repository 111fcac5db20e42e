//! Collision chain: the ordered entries that share one bucket.
//!
//! Entries live in a `Vec` in insertion order. Removal splices by position,
//! so head, interior and tail removals all keep the rest of the chain.

use crate::canonical::CanonicalKey;
use core::borrow::Borrow;

/// Key literal plus the hash computed once at insertion.
#[derive(Debug)]
pub(crate) struct Key<K> {
    literal: K,
    hash: u64,
}

impl<K> Key<K> {
    pub(crate) fn new(literal: K, hash: u64) -> Self {
        Self { literal, hash }
    }

    #[inline]
    pub(crate) fn literal(&self) -> &K {
        &self.literal
    }

    #[inline]
    pub(crate) fn hash(&self) -> u64 {
        self.hash
    }

    pub(crate) fn into_literal(self) -> K {
        self.literal
    }

    /// Stored hash first, then literal equality; equal hashes alone never match.
    #[inline]
    fn matches<Q>(&self, hash: u64, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        self.hash == hash && self.literal.borrow().key_eq(q)
    }
}

#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: Key<K>,
    pub(crate) value: V,
}

#[derive(Debug)]
pub(crate) struct Chain<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push a new entry at the tail. Does not check for an existing key.
    pub(crate) fn append(&mut self, key: Key<K>, value: V) {
        self.entries.push(Entry { key, value });
    }

    pub(crate) fn find<Q>(&self, hash: u64, q: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        self.entries.iter().find(|e| e.key.matches(hash, q))
    }

    pub(crate) fn find_mut<Q>(&mut self, hash: u64, q: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        self.entries.iter_mut().find(|e| e.key.matches(hash, q))
    }

    /// Unlink the entry matching `q`; later entries keep their order.
    pub(crate) fn remove<Q>(&mut self, hash: u64, q: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        let pos = self.entries.iter().position(|e| e.key.matches(hash, q))?;
        Some(self.entries.remove(pos))
    }

    /// Head-to-tail, each entry exactly once.
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Entry<K, V>> {
        self.entries.iter_mut()
    }

    pub(crate) fn into_entries(self) -> std::vec::IntoIter<Entry<K, V>> {
        self.entries.into_iter()
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
