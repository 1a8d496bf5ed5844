#![cfg(all(feature = "typeclass", feature = "control", feature = "compose"))]
//! End-to-end scenarios for the `Burrito` container and the dispatch helpers.
//!
//! Also checks at compile time which types are registered with the type
//! classes: a type that never implemented `Functor` cannot be passed to
//! `fmap` or `transform`.

use burrito::control::Outcome;
use burrito::prelude::*;
use burrito::typeclass::dispatch::{ap, chain, flatten, lift, transform};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};

/// A container that never registered itself with the type classes.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
struct PlainBox<A>(Vec<A>);

assert_impl_all!(Burrito<i32>: Functor, Applicative, Monad, Semigroup, Monoid);
assert_impl_all!(Outcome<i32, String>: Functor, Applicative, Monad);
assert_impl_all!(Option<i32>: Functor, Applicative, Monad);
assert_impl_all!(Vec<i32>: Functor, Applicative, Monad);
assert_impl_all!(Identity<i32>: Functor, Applicative, Monad);
assert_not_impl_any!(PlainBox<i32>: TypeConstructor, Functor, Applicative, Monad);
assert_not_impl_any!(i32: Functor, Applicative, Monad);

/// Menu item used as a single element type for mixed fillings.
#[derive(Debug, Clone, PartialEq)]
enum Filling {
    Protein(&'static str),
    Salsa { heat: u8 },
}

// =============================================================================
// Map / Apply / Flatten Scenarios
// =============================================================================

#[rstest]
fn doubling_maps_every_filling() {
    let doubled = transform(burrito![2, 3, 5], |n: i32| n * 2);
    assert_eq!(doubled, burrito![4, 6, 10]);
}

#[rstest]
fn mapping_to_a_different_type_keeps_the_container() {
    let labels: Burrito<String> = burrito![1, 2].fmap(|n| format!("#{n}"));
    assert_eq!(labels, burrito!["#1".to_string(), "#2".to_string()]);
}

#[rstest]
fn lifted_function_applies_to_each_filling() {
    let add_ten = lift::<Burrito<()>, _>(|n: i32| n + 10);
    assert_eq!(ap(add_ten, burrito![1, 2, 3]), burrito![11, 12, 13]);
}

#[rstest]
fn flatten_through_dispatch_concatenates() {
    let nested = burrito![burrito![1, 2], burrito![3], burrito![4, 5]];
    let flat: Burrito<i32> = flatten(nested);
    assert_eq!(flat, burrito![1, 2, 3, 4, 5]);
}

#[rstest]
fn chain_guards_out_rejected_fillings() {
    let mild = chain(burrito![1, 4, 7, 2], |heat: i32| {
        Burrito::guard(heat, |h: &i32| *h < 5)
    });
    assert_eq!(mild, burrito![1, 4, 2]);
}

#[rstest]
fn mixed_fillings_share_one_element_type() {
    let order = burrito![
        Filling::Protein("carnitas"),
        Filling::Salsa { heat: 2 },
        Filling::Protein("pollo"),
    ];
    let hotter = order.fmap(|filling| match filling {
        Filling::Salsa { heat } => Filling::Salsa { heat: heat + 1 },
        protein => protein,
    });
    assert_eq!(hotter.get(1), Some(&Filling::Salsa { heat: 3 }));
    assert_eq!(hotter.first(), Some(&Filling::Protein("carnitas")));
}

// =============================================================================
// Empty Absorption Scenarios
// =============================================================================

#[rstest]
fn a_rejected_guard_absorbs_the_rest_of_the_pipeline() {
    let result = Burrito::guard(-1, |n: &i32| *n > 0)
        .fmap(|n| n * 2)
        .flat_map(|n| burrito![n, n])
        .keep_if(|n| *n > 0);
    assert!(result.is_empty());
    assert_eq!(result.to_string(), "Burrito[]");
}

#[rstest]
fn outcome_tells_empty_from_failure() {
    let checked = |n: i32| Outcome::ensure(n, |n| *n >= 0, format!("{n} is negative"));

    assert_eq!(
        checked(-3).fmap(|n| n * 2),
        Outcome::Failure("-3 is negative".to_string())
    );
    assert_eq!(checked(3).filter(|n| *n > 5), Outcome::Empty);
    assert_eq!(checked(3).fmap(|n| n * 2), Outcome::Success(6));
}

// =============================================================================
// Composition Scenarios
// =============================================================================

#[rstest]
fn pipe_reads_left_to_right() {
    let total = pipe!(
        burrito![1, 2, 3],
        |b: Burrito<i32>| b.fmap(|n| n * n),
        |b: Burrito<i32>| b.fold(0, |sum, n| sum + n)
    );
    assert_eq!(total, 14);
}

#[rstest]
fn single_unwraps_exactly_one_filling() {
    assert_eq!(burrito![7].fmap(|n| n + 1).single(), Ok(8));
    assert_eq!(
        burrito![1, 2].single(),
        Err(BurritoError::NotSingleton { length: 2 })
    );
}

#[rstest]
fn monoid_concatenates_many_burritos() {
    let combined = Burrito::combine_all(vec![burrito![1], burrito![], burrito![2, 3]]);
    assert_eq!(combined, burrito![1, 2, 3]);
}
