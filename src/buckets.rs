//! Bucket array: fixed-length cells of collision chains.

use crate::chain::{Chain, Entry, Key};

#[derive(Debug)]
pub(crate) struct Buckets<K, V> {
    cells: Box<[Chain<K, V>]>,
}

impl<K, V> Buckets<K, V> {
    /// `cell_count` empty cells. Callers guarantee `cell_count >= 1`.
    pub(crate) fn new(cell_count: usize) -> Self {
        debug_assert!(cell_count > 0, "bucket array needs at least one cell");
        Self {
            cells: (0..cell_count).map(|_| Chain::new()).collect(),
        }
    }

    #[inline]
    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub(crate) fn index_for(&self, hash: u64) -> usize {
        (hash % self.cells.len() as u64) as usize
    }

    /// Chain at `index`, or `None` when the cell is empty.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&Chain<K, V>> {
        self.cells.get(index).filter(|c| !c.is_empty())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Chain<K, V>> {
        self.cells.get_mut(index).filter(|c| !c.is_empty())
    }

    /// Append to the chain at `index`.
    pub(crate) fn insert(&mut self, index: usize, key: Key<K>, value: V) {
        self.cells[index].append(key, value);
    }

    pub(crate) fn chains(&self) -> core::slice::Iter<'_, Chain<K, V>> {
        self.cells.iter()
    }

    pub(crate) fn chains_mut(&mut self) -> core::slice::IterMut<'_, Chain<K, V>> {
        self.cells.iter_mut()
    }

    pub(crate) fn into_chains(self) -> std::vec::IntoIter<Chain<K, V>> {
        self.cells.into_vec().into_iter()
    }

    /// Consume the array, yielding every entry of every chain.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = Entry<K, V>> {
        self.into_chains().flat_map(Chain::into_entries)
    }
}
