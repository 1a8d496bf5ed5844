//! Monad type class - sequencing and flattening nested containers.
//!
//! `Monad` extends `Applicative` with `flat_map`: each element produces a
//! container of its own, and the results are merged one level deep. `join`
//! is the same merge without a function: a container of containers becomes
//! a single container whose elements are the inner elements, in order.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! For `join` the associativity law reads: flattening a triple-nested
//! container outer-first or inner-first gives the same result.
//!
//! # Examples
//!
//! ```rust
//! use burrito::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// An applicative whose nested containers can be flattened.
///
/// # Examples
///
/// ```rust
/// use burrito::typeclass::Monad;
///
/// let expanded = vec![1, 2, 3].flat_map(|n| vec![n, n * 10]);
/// assert_eq!(expanded, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait Monad: Applicative {
    /// Maps every element to a container and merges the results one level.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the elements of `self`.
    ///
    /// `next` is repeated once per element of `self`; an empty or failed
    /// `self` propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Flattens one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Monad;
    ///
    /// let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
    /// let flat: Vec<i32> = nested.join();
    /// assert_eq!(flat, vec![1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    fn join<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: Into<Self::WithType<B>>,
    {
        self.flat_map(|inner| inner.into())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Monad for Vec<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
