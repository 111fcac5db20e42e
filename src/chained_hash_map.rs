//! ChainedHashMap: table controller over the bucket array.
//!
//! Owns the seed, the entry count, the bucket array and the growth policy.
//! Every operation canonicalizes and hashes the key once, reduces the hash
//! modulo the bucket count, and hands the chain at that index the rest.

use crate::buckets::Buckets;
use crate::canonical::CanonicalKey;
use crate::chain::{Chain, Entry, Key};
use crate::config::{TableConfig, DEFAULT_CAPACITY};
use crate::error::Error;
use crate::hash::HashSeed;
use core::borrow::Borrow;
use core::fmt;
use core::ops::Index;
use log::{debug, trace};

/// `len / capacity < load_factor`, the bound every completed insert keeps.
#[inline]
fn within_load(len: usize, capacity: usize, load_factor: f64) -> bool {
    (len as f64) / (capacity as f64) < load_factor
}

/// Smallest capacity that holds `len` entries without growing.
fn capacity_for(len: usize, load_factor: f64) -> usize {
    let mut capacity = ((len as f64 / load_factor) as usize).max(1);
    while !within_load(len, capacity, load_factor) {
        capacity += 1;
    }
    capacity
}

/// Occupancy snapshot of the bucket array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStats {
    pub buckets: usize,
    pub occupied: usize,
    pub entries: usize,
    pub longest_chain: usize,
}

pub struct ChainedHashMap<K, V> {
    buckets: Buckets<K, V>,
    len: usize,
    load_factor: f64,
    seed: HashSeed,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: CanonicalKey,
{
    /// Empty table with `capacity` buckets (at least one), a fresh seed and
    /// the default load factor of 0.6.
    pub fn new(capacity: usize) -> Self {
        Self::from_config(TableConfig::new().initial_capacity(capacity.max(1)))
    }

    /// Callers validate `config` first.
    pub(crate) fn from_config(config: TableConfig) -> Self {
        Self {
            buckets: Buckets::new(config.initial_capacity.max(1)),
            len: 0,
            load_factor: config.load_factor,
            seed: config.seed.unwrap_or_else(HashSeed::random),
        }
    }

    fn with_len_hint(len: usize) -> Self {
        let config = TableConfig::new();
        let capacity = capacity_for(len, config.load_factor);
        trace!("sizing table for {} entries: {} buckets", len, capacity);
        Self::from_config(config.initial_capacity(capacity))
    }

    /// Build from parallel key/value slices; `keys[i]` maps to `values[i]`.
    ///
    /// Pairs are inserted in order, so a repeated key keeps its last value.
    pub fn from_slices(keys: &[K], values: &[V]) -> Result<Self, Error>
    where
        K: Clone,
        V: Clone,
    {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let mut map = Self::with_len_hint(keys.len());
        for (k, v) in keys.iter().zip(values) {
            map.set(k.clone(), v.clone());
        }
        Ok(map)
    }

    /// Like [`from_slices`](Self::from_slices) but moves the inputs.
    pub fn from_vecs(keys: Vec<K>, values: Vec<V>) -> Result<Self, Error> {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let mut map = Self::with_len_hint(keys.len());
        for (k, v) in keys.into_iter().zip(values) {
            map.set(k, v);
        }
        Ok(map)
    }

    #[inline]
    fn hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + CanonicalKey,
    {
        self.seed.hash_key(q)
    }

    fn chain<Q>(&self, q: &Q) -> Option<(&Chain<K, V>, u64)>
    where
        Q: ?Sized + CanonicalKey,
    {
        let hash = self.hash(q);
        let index = self.buckets.index_for(hash);
        self.buckets.get(index).map(|c| (c, hash))
    }

    fn chain_mut<Q>(&mut self, q: &Q) -> Option<(&mut Chain<K, V>, u64)>
    where
        Q: ?Sized + CanonicalKey,
    {
        let hash = self.hash(q);
        let index = self.buckets.index_for(hash);
        self.buckets.get_mut(index).map(|c| (c, hash))
    }

    /// Insert or overwrite. Returns the previous value when `key` was present.
    ///
    /// An overwrite leaves `len` and the capacity alone. A new entry first
    /// grows the table until one more entry keeps `len / capacity` below
    /// the load factor.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash(&key);
        let index = self.buckets.index_for(hash);
        if let Some(entry) = self
            .buckets
            .get_mut(index)
            .and_then(|c| c.find_mut(hash, &key))
        {
            return Some(core::mem::replace(&mut entry.value, value));
        }

        while !within_load(self.len + 1, self.capacity(), self.load_factor) {
            self.grow();
        }
        let index = self.buckets.index_for(hash);
        self.buckets.insert(index, Key::new(key, hash), value);
        self.len += 1;
        None
    }

    /// Stored value, or `None` when absent. A stored default value is
    /// `Some(&default)`, never confused with absence.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        self.get_key_value(q).map(|(_, v)| v)
    }

    pub fn get_key_value<Q>(&self, q: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        let (chain, hash) = self.chain(q)?;
        chain
            .find(hash, q)
            .map(|e| (e.key.literal(), &e.value))
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        let (chain, hash) = self.chain_mut(q)?;
        chain.find_mut(hash, q).map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        self.get(q).is_some()
    }

    /// Remove `q`; true iff an entry was removed.
    pub fn remove<Q>(&mut self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        self.remove_entry(q).is_some()
    }

    pub fn remove_entry<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + CanonicalKey,
    {
        let (chain, hash) = self.chain_mut(q)?;
        let entry = chain.remove(hash, q)?;
        self.len -= 1;
        Some((entry.key.into_literal(), entry.value))
    }
}

impl<K, V> ChainedHashMap<K, V> {
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.cell_count()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Double the bucket count and move every entry of every chain to its
    /// new bucket, indexed by the entry's own stored hash.
    pub fn grow(&mut self) {
        let old_capacity = self.capacity();
        let fresh = Buckets::new(old_capacity * 2);
        let old = core::mem::replace(&mut self.buckets, fresh);

        let mut moved = 0usize;
        for Entry { key, value } in old.into_entries() {
            let index = self.buckets.index_for(key.hash());
            self.buckets.insert(index, key, value);
            moved += 1;
        }
        debug_assert_eq!(moved, self.len, "growth must move every entry exactly once");
        self.len = moved;
        debug!(
            "grew table from {} to {} buckets ({} entries)",
            old_capacity,
            self.capacity(),
            moved
        );
    }

    /// Drop all entries; capacity and seed are kept.
    pub fn clear(&mut self) {
        self.buckets = Buckets::new(self.capacity());
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            chains: self.buckets.chains(),
            entries: Default::default(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            remaining: self.len,
            chains: self.buckets.chains_mut(),
            entries: Default::default(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    pub fn chain_stats(&self) -> ChainStats {
        let mut stats = ChainStats {
            buckets: self.capacity(),
            occupied: 0,
            entries: 0,
            longest_chain: 0,
        };
        for chain in self.buckets.chains() {
            if !chain.is_empty() {
                stats.occupied += 1;
                stats.entries += chain.len();
                stats.longest_chain = stats.longest_chain.max(chain.len());
            }
        }
        stats
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: CanonicalKey,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PartialEq for ChainedHashMap<K, V>
where
    K: CanonicalKey,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, Q, V> Index<&Q> for ChainedHashMap<K, V>
where
    K: CanonicalKey + Borrow<Q>,
    Q: ?Sized + CanonicalKey,
{
    type Output = V;

    /// Panics when `key` is absent.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not present in ChainedHashMap")
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<K, V>
where
    K: CanonicalKey,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs: Vec<(K, V)> = iter.into_iter().collect();
        let mut map = Self::with_len_hint(pairs.len());
        map.extend(pairs);
        map
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: CanonicalKey,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

/// Iterator over `(&K, &V)` in bucket order.
pub struct Iter<'a, K, V> {
    chains: core::slice::Iter<'a, Chain<K, V>>,
    entries: core::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.entries.next() {
                self.remaining -= 1;
                return Some((e.key.literal(), &e.value));
            }
            self.entries = self.chains.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in bucket order.
pub struct IterMut<'a, K, V> {
    chains: core::slice::IterMut<'a, Chain<K, V>>,
    entries: core::slice::IterMut<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(Entry { key, value }) = self.entries.next() {
                self.remaining -= 1;
                return Some((key.literal(), value));
            }
            self.entries = self.chains.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

/// Owning iterator over `(K, V)`.
pub struct IntoIter<K, V> {
    chains: std::vec::IntoIter<Chain<K, V>>,
    entries: std::vec::IntoIter<Entry<K, V>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(Entry { key, value }) = self.entries.next() {
                self.remaining -= 1;
                return Some((key.into_literal(), value));
            }
            self.entries = self.chains.next()?.into_entries();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for ChainedHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            chains: self.buckets.into_chains(),
            entries: Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ChainedHashMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
