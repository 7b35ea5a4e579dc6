//! Terrane Core — capability traits and generic value containers.
//!
//! This crate is the level-0 foundation of the Terrane workspace: it has no
//! internal dependencies and provides the two generic value types the rest
//! of the ecosystem builds on, plus the capability traits that gate their
//! instantiation.
//!
//! # Modules
//!
//! - [`traits`]: capability predicates (trait bounds) shared across crates
//! - [`outcome`]: [`Outcome<T, E>`], the tagged success/failure container
//! - [`bitflags`]: [`BitFlags<T>`], a value-semantic set of enum members
//!   packed into one 64-bit word

pub mod bitflags;
pub mod outcome;
pub mod traits;

// Re-export key types at crate root for convenience
pub use bitflags::BitFlags;
pub use outcome::Outcome;
pub use traits::{FlagValue, UnionTag};
