//! Free-standing utilities that dispatch on a container's type class
//! implementations.
//!
//! Each function is generic over the container and resolves, at compile
//! time, to the implementation registered for that container's tag. Calling
//! one on a type without a matching implementation is a type error.
//!
//! # Examples
//!
//! ```rust
//! use burrito::burrito;
//! use burrito::typeclass::dispatch::{flatten, transform};
//!
//! assert_eq!(transform(burrito![2, 3, 5], |n| n * 2), burrito![4, 6, 10]);
//!
//! let nested = burrito![burrito![1, 2], burrito![3], burrito![4, 5]];
//! let flat: burrito::Burrito<i32> = flatten(nested);
//! assert_eq!(flat, burrito![1, 2, 3, 4, 5]);
//! ```

use super::{Applicative, Functor, Monad};

/// Maps `function` over every element of `container`.
#[inline]
pub fn transform<F, B, Function>(container: F, function: Function) -> F::WithType<B>
where
    F: Functor,
    Function: FnMut(F::Inner) -> B,
{
    container.fmap(function)
}

/// Lifts `value` into the container selected by `F`.
///
/// # Examples
///
/// ```rust
/// use burrito::typeclass::dispatch::lift;
///
/// let lifted: Vec<&str> = lift::<Vec<()>, _>("tortilla");
/// assert_eq!(lifted, vec!["tortilla"]);
/// ```
#[inline]
pub fn lift<F, B>(value: B) -> F::WithType<B>
where
    F: Applicative,
{
    F::pure(value)
}

/// Applies the wrapped function(s) to the wrapped value(s).
#[inline]
pub fn ap<F, B, Output>(functions: F, values: F::WithType<B>) -> F::WithType<Output>
where
    F: Applicative,
    F::Inner: FnMut(B) -> Output,
    B: Clone,
{
    functions.apply(values)
}

/// Flattens a container of containers by one level.
#[inline]
pub fn flatten<M, B>(nested: M) -> M::WithType<B>
where
    M: Monad,
    M::Inner: Into<M::WithType<B>>,
{
    nested.join()
}

/// Maps every element to a container and flattens the result.
#[inline]
pub fn chain<M, B, Function>(container: M, function: Function) -> M::WithType<B>
where
    M: Monad,
    Function: FnMut(M::Inner) -> M::WithType<B>,
{
    container.flat_map(function)
}
