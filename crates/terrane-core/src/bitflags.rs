//! A value-semantic set of enum members packed into one 64-bit word.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::traits::FlagValue;

/// A compact set of flags sharing one `u64` word.
///
/// Bit `i` of the word records membership of the flag whose `Into<u64>`
/// conversion yields `i`; flag values are **bit positions**, not
/// pre-shifted masks. All members of a flag type used with `BitFlags`
/// must therefore convert to distinct positions below 64 — that is a
/// correctness contract on the flag type, not something the compiler
/// checks.
///
/// # Out-of-range positions
///
/// A position of 64 or more fails a debug assertion; release builds mask
/// the shift amount into `0..64`, so bit `p % 64` is addressed. Keep flag
/// enums inside the word.
///
/// # Example
///
/// ```
/// use terrane_core::BitFlags;
///
/// #[derive(Clone, Copy)]
/// enum Permission {
///     Read,
///     Write,
/// }
///
/// impl From<Permission> for u64 {
///     fn from(flag: Permission) -> u64 {
///         flag as u64
///     }
/// }
///
/// let mut perms = BitFlags::from(Permission::Write);
/// assert!(perms[Permission::Write]);
/// assert!(!perms[Permission::Read]);
///
/// perms.set(Permission::Read, true);
/// assert!(perms.contains(Permission::Read));
///
/// perms.clear();
/// assert!(perms.is_empty());
/// ```
pub struct BitFlags<T: FlagValue> {
    word: u64,
    _flag: PhantomData<T>,
}

impl<T: FlagValue> BitFlags<T> {
    /// The empty set.
    pub const fn new() -> Self {
        Self {
            word: 0,
            _flag: PhantomData,
        }
    }

    fn bit(flag: T) -> u64 {
        let position: u64 = flag.into();
        debug_assert!(
            position < 64,
            "flag position {position} does not fit a 64-bit word"
        );
        1u64 << (position & 63)
    }

    /// Set (`value = true`) or clear (`value = false`) one flag in place.
    pub fn set(&mut self, flag: T, value: bool) {
        if value {
            self.word |= Self::bit(flag);
        } else {
            self.word &= !Self::bit(flag);
        }
    }

    /// True iff the flag's bit is set.
    pub fn contains(&self, flag: T) -> bool {
        self.word & Self::bit(flag) != 0
    }

    /// True iff no flag is set.
    pub fn is_empty(&self) -> bool {
        self.word == 0
    }

    /// Remove every flag.
    pub fn clear(&mut self) {
        self.word = 0;
    }

    /// The raw 64-bit word, for interop and persistence.
    ///
    /// Downstream code may treat it as an opaque integer; no layout
    /// beyond "bit `i` is flag `i`" is defined.
    pub fn raw(&self) -> u64 {
        self.word
    }
}

impl<T: FlagValue> Default for BitFlags<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FlagValue> Clone for BitFlags<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FlagValue> Copy for BitFlags<T> {}

impl<T: FlagValue> PartialEq for BitFlags<T> {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl<T: FlagValue> Eq for BitFlags<T> {}

impl<T: FlagValue> fmt::Debug for BitFlags<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitFlags({:#018x})", self.word)
    }
}

impl<T: FlagValue> From<T> for BitFlags<T> {
    fn from(flag: T) -> Self {
        let mut flags = Self::new();
        flags.set(flag, true);
        flags
    }
}

impl<T: FlagValue, const N: usize> From<[T; N]> for BitFlags<T> {
    fn from(flags: [T; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl<T: FlagValue> FromIterator<T> for BitFlags<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut flags = Self::new();
        for flag in iter {
            flags.set(flag, true);
        }
        flags
    }
}

/// `flags[flag]` is an alias for [`contains`](BitFlags::contains).
impl<T: FlagValue> Index<T> for BitFlags<T> {
    type Output = bool;

    fn index(&self, flag: T) -> &bool {
        if self.contains(flag) { &true } else { &false }
    }
}

/// Serializes as the raw word (an opaque integer).
impl<T: FlagValue> Serialize for BitFlags<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.word)
    }
}

impl<'de, T: FlagValue> Deserialize<'de> for BitFlags<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let word = u64::deserialize(deserializer)?;
        Ok(Self {
            word,
            _flag: PhantomData,
        })
    }
}
