//! Table configuration.

use crate::canonical::CanonicalKey;
use crate::chained_hash_map::ChainedHashMap;
use crate::error::Error;
use crate::hash::HashSeed;

pub const DEFAULT_CAPACITY: usize = 16;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.6;

/// Builder for `ChainedHashMap`.
///
/// ```
/// use chained_hashmap::{ChainedHashMap, TableConfig};
///
/// let m: ChainedHashMap<String, u32> = TableConfig::new()
///     .initial_capacity(64)
///     .load_factor(0.75)
///     .build()
///     .unwrap();
/// assert_eq!(m.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub(crate) initial_capacity: usize,
    pub(crate) load_factor: f64,
    pub(crate) seed: Option<HashSeed>,
}

impl TableConfig {
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            seed: None,
        }
    }

    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Growth threshold for `len / capacity`. Values above 1 are allowed.
    pub const fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Use a fixed seed instead of drawing a fresh one per table.
    pub const fn seed(mut self, seed: HashSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.initial_capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(Error::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }

    pub fn build<K, V>(self) -> Result<ChainedHashMap<K, V>, Error>
    where
        K: CanonicalKey,
    {
        self.validate()?;
        Ok(ChainedHashMap::from_config(self))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
