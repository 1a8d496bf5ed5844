//! The `pipe!` macro for left-to-right data flow.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g)` is `g(f(x))`. The value is bound once and rebound after
/// every step, so each function sees the previous step's output.
///
/// # Examples
///
/// ```
/// use burrito::pipe;
/// use burrito::typeclass::Functor;
/// use burrito::{Burrito, burrito};
///
/// let total = pipe!(
///     burrito![burrito![1, 2], burrito![3]],
///     |nested: Burrito<Burrito<i32>>| nested.flatten(),
///     |flat: Burrito<i32>| flat.fmap(|n| n * 10),
///     |scaled: Burrito<i32>| scaled.fold(0, |sum, n| sum + n)
/// );
/// assert_eq!(total, 60);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $step:expr)* $(,)?) => {{
        let piped = $value;
        $(let piped = $step(piped);)*
        piped
    }};
}
