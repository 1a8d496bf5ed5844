//! Applicative type class - applying wrapped functions to wrapped values.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into a one-element container
//! - `apply`: apply the function(s) held by one container to the value(s)
//!   held by another
//! - `map2` / `product`: combine two independent containers
//!
//! Multi-element containers (`Vec`, `Burrito`) apply every function to every
//! value, function-major. With exactly one wrapped function this is the plain
//! "map the function over the values" case.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use burrito::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift values and apply wrapped functions.
///
/// # Examples
///
/// ```rust
/// use burrito::typeclass::Applicative;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
/// assert_eq!(functions.apply(vec![1, 2]), vec![2, 3, 10, 20]);
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into a container holding just that value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers element-wise with a binary function.
    ///
    /// For multi-element containers every pair is combined, `self`-major.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Pairs up the elements of two containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the wrapped function(s) in `self` to the wrapped value(s) in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Applicative;
    ///
    /// let double = Some(|x: i32| x * 2);
    /// assert_eq!(double.apply(Some(21)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnMut(B) -> Output,
        B: Clone;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnMut(B) -> Output,
    {
        match (self, other) {
            (Some(mut function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, mut function: F) -> Result<C, E>
    where
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnMut(B) -> Output,
    {
        match (self, other) {
            (Ok(mut function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Applicative for Vec<A> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    fn map2<B, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn apply<B, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
        B: Clone,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for mut function in self {
            for value in &other {
                result.push(function(value.clone()));
            }
        }
        result
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, mut function: F) -> Identity<C>
    where
        F: FnMut(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnMut(B) -> Output,
    {
        let Self(mut function) = self;
        Identity(function(other.0))
    }
}
