//! Seeded hashing of canonical key bytes.

use crate::canonical::CanonicalKey;
use core::fmt;
use core::hash::Hasher;
use siphasher::sip::SipHasher13;

/// Per-table hash seed: the two SipHash keys.
///
/// A table draws a fresh seed at construction and keeps it for its whole
/// lifetime. Hashes from different seeds are never compared.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct HashSeed {
    k0: u64,
    k1: u64,
}

impl HashSeed {
    /// Fixed seed, mostly useful for reproducible tests.
    pub const fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// Fresh seed from the thread-local RNG (itself seeded by the OS).
    pub fn random() -> Self {
        Self {
            k0: rand::random(),
            k1: rand::random(),
        }
    }

    /// 64-bit digest of `bytes` under this seed.
    #[inline]
    pub fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut h = SipHasher13::new_with_keys(self.k0, self.k1);
        h.write(bytes);
        h.finish()
    }

    /// Canonicalize `key` and hash the result.
    #[inline]
    pub fn hash_key<Q>(&self, key: &Q) -> u64
    where
        Q: ?Sized + CanonicalKey,
    {
        key.with_canonical(|bytes| self.hash_bytes(bytes))
    }
}

impl Default for HashSeed {
    fn default() -> Self {
        Self::random()
    }
}

// Keys stay out of debug output.
impl fmt::Debug for HashSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashSeed(..)")
    }
}
