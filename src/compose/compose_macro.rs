//! The `compose!` macro for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first, as in the mathematical notation `f ∘ g ∘ h`. Each step is a
/// [`compose_two`](crate::compose::compose_two), so the composed function is
/// `FnMut` and can be passed to `fmap` directly.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// The functor composition law is stated with it:
/// `c.fmap(g).fmap(f) == c.fmap(compose!(f, g))`.
///
/// # Examples
///
/// ```
/// use burrito::burrito;
/// use burrito::compose;
/// use burrito::typeclass::Functor;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose!(add_one, double)(5), 11);
///
/// let stepwise = burrito![1, 2, 3].fmap(double).fmap(add_one);
/// let composed = burrito![1, 2, 3].fmap(compose!(add_one, double));
/// assert_eq!(stepwise, composed);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outermost:expr, $($inner:expr),+ $(,)?) => {
        $crate::compose::compose_two($outermost, $crate::compose!($($inner),+))
    };
}
