//! chained-hashmap: a single-threaded, separately-chained HashMap with a
//! per-table random seed and keys restricted to types with a canonical
//! byte encoding.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small hash table whose pieces can each be checked on their own.
//! - Layers, leaves first:
//!   - `CanonicalKey`: turns a key into deterministic bytes. Strings use their
//!     UTF-8 bytes, integers their little-endian two's complement at the
//!     type's own width, floats their IEEE-754 bits, unit keys an empty
//!     sequence.
//!   - `HashSeed`: keyed SipHash-1-3 over those bytes; one seed per table.
//!   - `Chain<K, V>`: ordered entries sharing a bucket, stored in a `Vec` and
//!     spliced by position on removal.
//!   - `Buckets<K, V>`: fixed-length array of chains, replaced wholesale on
//!     growth.
//!   - `ChainedHashMap<K, V>`: public API; owns the seed, the entry count and
//!     the load-factor policy.
//!
//! Constraints
//! - Single-threaded: no locks or atomics. `&mut self` on every mutation is
//!   the only synchronization; callers that share a table across threads
//!   wrap it in their own lock.
//! - Unique keys: `set` on an existing key overwrites the value in place.
//! - Absence is `None`. A stored `V::default()` is still `Some`.
//! - `len / capacity < load_factor` after every completed `set`; capacity
//!   only doubles, it never shrinks.
//!
//! Hasher and rehashing invariants
//! - Each entry stores the `u64` hash computed at insertion. Growth indexes
//!   with that stored hash and never canonicalizes a key again.
//! - A chain match needs an equal stored hash and `CanonicalKey::key_eq`;
//!   equal hashes alone never match.
//!
//! Notes and non-goals
//! - No persistence, no iteration-order guarantee, no shrinking on removal.
//! - Seeds resist precomputed collisions for a fixed binary; they are not a
//!   defence against adaptive attackers.
//! - Unsupported key types do not compile; there is no runtime check.

mod buckets;
mod canonical;
mod chain;
mod chained_hash_map;
mod config;
mod error;
mod hash;

// Public surface
pub use canonical::CanonicalKey;
pub use chained_hash_map::{ChainStats, ChainedHashMap, IntoIter, Iter, IterMut};
pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use error::Error;
pub use hash::HashSeed;
