//! Tags for container types, emulated with Generic Associated Types.
//!
//! Rust cannot abstract over a bare type constructor such as `Option<_>` or
//! `Burrito<_>`, so every container names itself applied to some element
//! type (`Inner`) and tells the compiler how to re-apply the same
//! constructor to another element type (`WithType<B>`). This pair is the
//! container's tag: the `Functor`, `Applicative` and `Monad` implementations
//! are selected through it at compile time.
//!
//! # Example
//!
//! ```rust
//! use burrito::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = rewrap(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A container type applied to an element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is the same type as `F`.
///
/// # Example
///
/// ```rust
/// use burrito::typeclass::TypeConstructor;
///
/// fn takes_i32_container<T: TypeConstructor<Inner = i32>>() {}
///
/// takes_i32_container::<Option<i32>>();
/// takes_i32_container::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
