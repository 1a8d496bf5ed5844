//! Outcome type - success, nothing, or a reported failure.
//!
//! An empty container can say "there is nothing here" but not why. `Outcome`
//! keeps the two apart:
//!
//! - `Success(A)`: a value was produced
//! - `Empty`: no value, and nothing went wrong (a filter did not match)
//! - `Failure(E)`: no value, with a reason
//!
//! `Empty` and `Failure` both absorb `fmap`, `apply` and `flat_map`: once a
//! chain stops producing values it keeps the first reason it stopped.
//!
//! `apply` and `map2` look at two outcomes at once. A `Failure` on either
//! side beats `Empty`; when both sides failed the left reason is kept.
//!
//! # Examples
//!
//! ```rust
//! use burrito::control::Outcome;
//! use burrito::typeclass::{Functor, Monad};
//!
//! fn spice_level(level: i32) -> Outcome<i32, String> {
//!     Outcome::ensure(level, |l| (0..=5).contains(l), format!("{level} is off the scale"))
//! }
//!
//! assert_eq!(spice_level(3).fmap(|l| l * 2), Outcome::Success(6));
//! assert_eq!(
//!     spice_level(9).flat_map(spice_level),
//!     Outcome::Failure("9 is off the scale".to_string())
//! );
//! assert_eq!(spice_level(3).filter(|l| *l > 4), Outcome::Empty);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The result of a computation that may succeed, produce nothing, or fail.
///
/// # Type Parameters
///
/// * `A` - The success value
/// * `E` - The failure reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<A, E> {
    /// A value was produced.
    Success(A),
    /// No value was produced, and no failure occurred.
    Empty,
    /// No value was produced because of `E`.
    Failure(E),
}

impl<A, E> Outcome<A, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Succeeds with `value` if it satisfies `predicate`, otherwise fails with
    /// `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::control::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ensure(2, |n| *n > 0, "not positive");
    /// assert_eq!(ok, Outcome::Success(2));
    ///
    /// let bad: Outcome<i32, &str> = Outcome::ensure(-2, |n| *n > 0, "not positive");
    /// assert_eq!(bad, Outcome::Failure("not positive"));
    /// ```
    pub fn ensure<P>(value: A, predicate: P, error: E) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Self::Success(value)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "burrito", "ensure rejected a value; reporting failure");
            Self::Failure(error)
        }
    }

    /// Turns `Some` into `Success` and `None` into `Empty`.
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        option.map_or(Self::Empty, Self::Success)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, discarding any failure.
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Empty | Self::Failure(_) => None,
        }
    }

    /// Returns the failure reason, if any.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Empty => None,
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&A, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Empty => Outcome::Empty,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Empty | Self::Failure(_) => default,
        }
    }

    /// Converts into a `Result`, folding `Empty` and `Failure` into
    /// [`OutcomeError`].
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Empty`] for `Empty` and
    /// [`OutcomeError::Failure`] for `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::control::{Outcome, OutcomeError};
    ///
    /// let empty: Outcome<i32, String> = Outcome::Empty;
    /// assert_eq!(empty.into_result(), Err(OutcomeError::Empty));
    /// ```
    pub fn into_result(self) -> Result<A, OutcomeError<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Empty => Err(OutcomeError::Empty),
            Self::Failure(error) => Err(OutcomeError::Failure(error)),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps a success only if it satisfies `predicate`; otherwise `Empty`.
    ///
    /// `Empty` and `Failure` are returned unchanged.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(target: "burrito", "filter rejected a value; outcome is empty");
                    Self::Empty
                }
            }
            other => other,
        }
    }

    /// Transforms the failure reason.
    pub fn map_failure<F, G>(self, function: G) -> Outcome<A, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Empty => Outcome::Empty,
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }
}

impl<A, E> Default for Outcome<A, E> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Option<A>> for Outcome<A, E> {
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, E> TypeConstructor for Outcome<A, E> {
    type Inner = A;
    type WithType<B> = Outcome<B, E>;
}

impl<A, E: Clone> Functor for Outcome<A, E> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Outcome<B, E>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Empty => Outcome::Empty,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Outcome<B, E>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Empty => Outcome::Empty,
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<A, E: Clone> Applicative for Outcome<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    fn map2<B, C, F>(self, other: Outcome<B, E>, mut function: F) -> Outcome<C, E>
    where
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
            (Self::Empty, _) | (_, Outcome::Empty) => Outcome::Empty,
        }
    }

    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        A: FnMut(B) -> Output,
    {
        match (self, other) {
            (Self::Success(mut function), Outcome::Success(value)) => {
                Outcome::Success(function(value))
            }
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
            (Self::Empty, _) | (_, Outcome::Empty) => Outcome::Empty,
        }
    }
}

impl<A, E: Clone> Monad for Outcome<A, E> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Outcome<B, E>
    where
        F: FnMut(A) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Empty => Outcome::Empty,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// Error Type
// =============================================================================

/// Why an [`Outcome`] held no value.
///
/// # Examples
///
/// ```rust
/// use burrito::control::OutcomeError;
///
/// let error: OutcomeError<String> = OutcomeError::Failure("too spicy".to_string());
/// assert_eq!(error.to_string(), "outcome failed: too spicy");
/// assert_eq!(OutcomeError::<String>::Empty.to_string(), "outcome is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError<E> {
    /// The outcome was `Empty`.
    Empty,
    /// The outcome was `Failure`.
    Failure(E),
}

impl<E: fmt::Display> fmt::Display for OutcomeError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "outcome is empty"),
            Self::Failure(error) => write!(formatter, "outcome failed: {error}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for OutcomeError<E> {}
