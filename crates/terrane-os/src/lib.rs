//! Terrane OS — thin, portable wrappers over operating-system services.
//!
//! Everything fallible in this crate reports through
//! [`terrane_core::Outcome`] with a closed, crate-local error enum as the
//! error parameter; nothing here throws or aborts on ordinary failures.
//!
//! # Modules
//!
//! - [`fs`]: async file reading, writing, and searching
//! - [`env`]: environment-variable access and processor count
//! - [`strings`]: small string helpers with fixed edge-case semantics
//! - [`paths`]: tilde expansion and marker-directory discovery

pub mod env;
pub mod fs;
pub mod paths;
pub mod strings;
