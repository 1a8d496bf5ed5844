//! Functions behind the composition macros.
//!
//! - [`identity`]: returns its argument, the unit of composition
//! - [`compose_two`]: the binary composition `compose!` folds over

/// Returns the value unchanged.
///
/// The unit of composition, and the function in the functor identity law:
/// `c.fmap(identity) == c`.
///
/// # Examples
///
/// ```
/// use burrito::burrito;
/// use burrito::compose::identity;
/// use burrito::typeclass::Functor;
///
/// assert_eq!(burrito![1, 2, 3].fmap(identity), burrito![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes `outer` after `inner`: the result maps `a` to `outer(inner(a))`.
///
/// The returned function is `FnMut` so it can be handed straight to
/// [`Functor::fmap`](crate::typeclass::Functor::fmap) on a multi-filling
/// container.
///
/// # Examples
///
/// ```
/// use burrito::compose::compose_two;
///
/// let mut label = compose_two(|n: usize| format!("{n} fillings"), |s: &str| s.len());
/// assert_eq!(label("abc"), "3 fillings");
/// ```
#[inline]
pub fn compose_two<A, B, C, Outer, Inner>(
    mut outer: Outer,
    mut inner: Inner,
) -> impl FnMut(A) -> C
where
    Outer: FnMut(B) -> C,
    Inner: FnMut(A) -> B,
{
    move |input| outer(inner(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    fn identity_returns_argument(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn compose_two_runs_inner_first() {
        let mut composed = compose_two(|n: i32| n * 10, |n: i32| n + 1);
        assert_eq!(composed(1), 20);
    }

    #[rstest]
    fn compose_two_with_identity_is_unchanged() {
        let mut left = compose_two(identity, |n: i32| n - 3);
        let mut right = compose_two(|n: i32| n - 3, identity);
        assert_eq!(left(10), 7);
        assert_eq!(right(10), 7);
    }

    #[rstest]
    fn compose_two_keeps_state_between_calls() {
        let mut seen = 0;
        let mut counted = compose_two(
            |n: i32| n * 2,
            |n: i32| {
                seen += 1;
                n + seen
            },
        );
        assert_eq!(counted(0), 2);
        assert_eq!(counted(0), 4);
    }
}
