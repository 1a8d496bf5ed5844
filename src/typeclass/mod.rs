//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: flattening nested containers
//! - [`Semigroup`] / [`Monoid`]: associative combination with an identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container with a different element
//! type", which is what the traits above need in their signatures. A
//! container registers itself by implementing `TypeConstructor` and then the
//! type classes it supports; the generic utilities in [`dispatch`] pick the
//! implementation from the argument types.
//!
//! # Examples
//!
//! ```rust
//! use burrito::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Option<i32> = <Option<()>>::pure(20);
//! let mapped = lifted.fmap(|n| n + 1);
//! let chained = mapped.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(chained, Some(42));
//! ```

mod applicative;
pub mod dispatch;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
