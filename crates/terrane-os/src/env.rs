//! Environment-variable access and basic host facts.

use std::num::NonZeroUsize;

/// Read an environment variable, or the empty string when it is unset
/// (or not valid UTF-8).
pub fn get(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

/// Set an environment variable for this process.
///
/// Mutating the process environment is not synchronized with other
/// threads reading it; call during single-threaded setup (or tests that
/// own their variable names).
pub fn set(key: &str, value: &str) {
    // SAFETY: callers uphold the single-threaded-setup contract above;
    // no other thread may concurrently read or write the environment.
    unsafe { std::env::set_var(key, value) }
}

/// The number of logical processors available to this process.
///
/// Falls back to 1 when the OS cannot report a count.
pub fn processor_count() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
