//! # burrito
//!
//! Functor, Applicative and Monad, made concrete.
//!
//! "Functor" means two different things depending on who is talking. In the
//! function-object sense it is anything callable. In the category-theory
//! sense, the one this crate uses, it is a container whose contents can be
//! mapped over without changing its shape. This crate spells the second
//! meaning out with traits and one deliberately small container,
//! [`Burrito`], so the laws can be read and tested directly.
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   plus [`Semigroup`](typeclass::Semigroup) / [`Monoid`](typeclass::Monoid)
//! - **Container**: [`Burrito`], an immutable sequence of fillings
//! - **Control**: [`Outcome`](control::Outcome), an explicit
//!   success / empty / failure result
//! - **Function Composition**: `compose!`, `pipe!`, `identity`
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and the `Burrito` container
//! - `control`: `Outcome`
//! - `compose`: function composition utilities
//! - `serde`: `Serialize` / `Deserialize` for `Burrito` and `Outcome`
//! - `tracing`: debug events when a guard or filter rejects a value
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use burrito::prelude::*;
//!
//! let doubled = burrito![2, 3, 5].fmap(|n| n * 2);
//! assert_eq!(doubled, burrito![4, 6, 10]);
//!
//! let nested = burrito![burrito![1, 2], burrito![3], burrito![4, 5]];
//! assert_eq!(nested.flatten(), burrito![1, 2, 3, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use burrito::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::burrito;

    #[cfg(feature = "typeclass")]
    pub use crate::container::{Burrito, BurritoError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod container;

#[cfg(feature = "typeclass")]
pub use container::Burrito;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
