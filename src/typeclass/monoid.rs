//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use burrito::typeclass::{Monoid, Semigroup};
//!
//! let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
//! assert_eq!(Vec::combine_all(nested), vec![1, 2, 3, 4, 5]);
//! ```

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for [`combine`](Semigroup::combine).
    fn empty() -> Self;

    /// Combines every value of `iterator`, starting from [`empty`](Monoid::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_identity_laws() {
        let value = String::from("queso");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        let nothing: Vec<Vec<i32>> = Vec::new();
        assert!(Vec::combine_all(nothing).is_empty());
    }

    #[rstest]
    fn combine_all_keeps_order() {
        let words = vec!["sal".to_string(), "sa".to_string()];
        assert_eq!(String::combine_all(words), "salsa");
    }
}
