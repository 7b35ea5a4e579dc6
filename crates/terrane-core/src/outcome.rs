//! Tagged success/failure container for fallible operations.
//!
//! [`Outcome<T, E>`] is a minimal sum type over `{Success(T), Failure(E)}`.
//! Every fallible call in the Terrane OS layer returns one, with the error
//! parameter left free so any closed error enum can ride in it. It is
//! deliberately not a combinator pipeline: there is no `map`, no
//! `and_then`, no chaining — callers check [`has_error`](Outcome::has_error)
//! and then read exactly one of the two payloads.
//!
//! # Payload access policy
//!
//! Reading the payload that does not match the current discriminant is a
//! programmer error, not a recoverable condition. The accessors panic with
//! a descriptive message, in every build profile. This is the one policy
//! applied uniformly across the crate; no accessor ever fabricates a
//! default value.

/// The outcome of a fallible operation: a success payload or an error.
///
/// Exactly one variant is ever active; the container is immutable after
/// construction. The unit specialization `Outcome<(), E>` represents
/// void successes (see [`Outcome::done`]).
///
/// # Example
///
/// ```
/// use terrane_core::Outcome;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum LookupError {
///     NotFound,
/// }
///
/// fn find(id: u32) -> Outcome<String, LookupError> {
///     if id == 7 {
///         Outcome::success("resource".to_string())
///     } else {
///         Outcome::failure(LookupError::NotFound)
///     }
/// }
///
/// let found = find(7);
/// assert!(!found.has_error());
/// assert_eq!(found.value(), "resource");
///
/// let missing = find(3);
/// assert!(missing.has_error());
/// assert_eq!(*missing.error(), LookupError::NotFound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a payload.
    Success(T),
    /// The operation failed with a tagged error value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a success value.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap an error value.
    ///
    /// A dedicated factory rather than constructor overloading keeps the
    /// failure path unambiguous even when `T` and `E` are the same type.
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// True iff this outcome holds an error.
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("Outcome::value() called on a failure"),
        }
    }

    /// Borrow the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn error(&self) -> &E {
        match self {
            Self::Success(_) => panic!("Outcome::error() called on a success"),
            Self::Failure(error) => error,
        }
    }

    /// Consume the outcome, taking ownership of the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("Outcome::into_value() called on a failure"),
        }
    }

    /// Consume the outcome, taking ownership of the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn into_error(self) -> E {
        match self {
            Self::Success(_) => panic!("Outcome::into_error() called on a success"),
            Self::Failure(error) => error,
        }
    }
}

impl<E> Outcome<(), E> {
    /// A void success, for operations with no payload to return.
    pub fn done() -> Self {
        Self::Success(())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
