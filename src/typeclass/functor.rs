//! Functor type class - mapping over the contents of a container.
//!
//! A `Functor` lets a function transform every element of a container while
//! the container's shape (element count, order, nesting) stays unchanged.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use burrito::burrito;
//! use burrito::typeclass::Functor;
//!
//! let doubled = burrito![2, 3, 5].fmap(|n| n * 2);
//! assert_eq!(doubled, burrito![4, 6, 10]);
//!
//! let none: Option<i32> = None;
//! assert_eq!(none.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A container whose elements can be transformed by a function.
///
/// The function is `FnMut` because multi-element containers call it once per
/// element, in element order.
///
/// # Examples
///
/// ```rust
/// use burrito::typeclass::Functor;
///
/// let lengths: Vec<usize> = vec!["rice", "beans"].fmap(str::len);
/// assert_eq!(lengths, vec![4, 5]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every element, producing a container of results.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Like [`fmap`](Functor::fmap), but borrows the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Functor;
    ///
    /// let name: Option<String> = Some("salsa".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a copy of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2].replace("x"), vec!["x", "x"]);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Forgets the elements, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Result<B, E>
    where
        F: FnMut(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Identity<B>
    where
        F: FnMut(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
