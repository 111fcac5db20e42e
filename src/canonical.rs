//! Key canonicalization: supported key types and their byte encodings.
//!
//! A key is usable in `ChainedHashMap` iff it implements `CanonicalKey`.
//! Unsupported key types are therefore rejected at compile time rather
//! than at insert time.
//!
//! Encodings
//! - Strings: raw UTF-8 bytes, no normalization.
//! - Integers: two's-complement, little-endian, exactly as many bytes as
//!   the type is wide (`isize`/`usize` use the target pointer width).
//! - Floats: IEEE-754 bit pattern, little-endian, by width.
//! - `bool`/`char`: one byte / the scalar value as a `u32`.
//! - Zero-sized keys (`()`, `PhantomData<T>`): the empty sequence, shared by
//!   every instance.

use core::marker::PhantomData;

/// A key that can be turned into a deterministic byte sequence for hashing.
///
/// Implementations must keep `key_eq` consistent with the encoding: two keys
/// that compare equal must produce identical bytes. When a key type is
/// queried through a borrowed form (`String` via `str`), both forms must
/// encode identically, the same requirement `Borrow` places on `Hash`.
pub trait CanonicalKey {
    /// Run `f` over the canonical bytes of `self` without allocating where
    /// the encoding fits on the stack.
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R;

    /// Literal equality used for the final match inside a chain.
    fn key_eq(&self, other: &Self) -> bool;

    /// Owned copy of the canonical bytes.
    fn canonical_bytes(&self) -> Vec<u8> {
        self.with_canonical(|b| b.to_vec())
    }
}

macro_rules! impl_canonical_int {
    ($($t:ty),* $(,)?) => {$(
        impl CanonicalKey for $t {
            #[inline]
            fn with_canonical<R, F>(&self, f: F) -> R
            where
                F: FnOnce(&[u8]) -> R,
            {
                f(&self.to_le_bytes())
            }

            #[inline]
            fn key_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

impl_canonical_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats compare by bit pattern so that equality agrees with the encoding:
// NaN is findable, and 0.0 / -0.0 are distinct keys.
macro_rules! impl_canonical_float {
    ($($t:ty),* $(,)?) => {$(
        impl CanonicalKey for $t {
            #[inline]
            fn with_canonical<R, F>(&self, f: F) -> R
            where
                F: FnOnce(&[u8]) -> R,
            {
                f(&self.to_bits().to_le_bytes())
            }

            #[inline]
            fn key_eq(&self, other: &Self) -> bool {
                self.to_bits() == other.to_bits()
            }
        }
    )*};
}

impl_canonical_float!(f32, f64);

impl CanonicalKey for bool {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(&[*self as u8])
    }

    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl CanonicalKey for char {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(&u32::from(*self).to_le_bytes())
    }

    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl CanonicalKey for str {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(self.as_bytes())
    }

    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl CanonicalKey for String {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        self.as_str().with_canonical(f)
    }

    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl CanonicalKey for Box<str> {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        (**self).with_canonical(f)
    }

    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: CanonicalKey + ?Sized> CanonicalKey for &T {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        (**self).with_canonical(f)
    }

    #[inline]
    fn key_eq(&self, other: &Self) -> bool {
        (**self).key_eq(*other)
    }
}

impl CanonicalKey for () {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(&[])
    }

    #[inline]
    fn key_eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> CanonicalKey for PhantomData<T> {
    #[inline]
    fn with_canonical<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(&[])
    }

    #[inline]
    fn key_eq(&self, _other: &Self) -> bool {
        true
    }
}
