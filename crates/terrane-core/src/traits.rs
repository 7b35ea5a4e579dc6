//! Capability predicates shared across the Terrane crates.
//!
//! Each predicate is a marker trait that forwards to the native trait
//! bounds expressing the capability, with a blanket implementation so
//! that satisfying the bounds *is* satisfying the predicate. They carry
//! no semantics of their own; they exist so that generic containers can
//! name their contracts once, at the point where the type parameter is
//! bound, rather than repeating bound lists at every call site.

use std::fmt;

/// Types usable as flag values in [`BitFlags`](crate::BitFlags).
///
/// The `Into<u64>` conversion must yield a **bit position** (0–63), not a
/// pre-shifted mask. A plain field-less enum qualifies by pairing
/// `#[derive(Clone, Copy)]` with a `From<MyEnum> for u64` impl that casts
/// the discriminant:
///
/// ```
/// use terrane_core::traits::FlagValue;
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
/// fn assert_flag<T: FlagValue>() {}
/// assert_flag::<Permission>();
/// ```
pub trait FlagValue: Copy + Into<u64> {}

impl<T: Copy + Into<u64>> FlagValue for T {}

/// Discriminant tags for tagged-union style types.
///
/// A tag is a [`FlagValue`] that is additionally equality-comparable, so
/// a variant container can both pack it and match on it. Rust enums are
/// always scoped (no implicit integer conversion), so the explicit
/// `Into<u64>` impl is the whole of the "explicitly convertible" contract.
pub trait UnionTag: FlagValue + Eq {}

impl<T: FlagValue + Eq> UnionTag for T {}

/// Types that can be rendered to a textual sink.
///
/// Forwards to [`fmt::Display`]; the formatter plays the role of the
/// sink, so no separate sink parameter is needed.
pub trait Printable: fmt::Display {}

impl<T: fmt::Display + ?Sized> Printable for T {}

/// Types comparable with `==` / `!=`.
pub trait EqualityComparable: PartialEq {}

impl<T: PartialEq + ?Sized> EqualityComparable for T {}

/// Types that can be duplicated by value.
///
/// Move-constructibility needs no predicate in Rust: every owned value
/// is movable.
pub trait Copyable: Clone {}

impl<T: Clone> Copyable for T {}
