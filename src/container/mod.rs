//! The `Burrito` container.
//!
//! A [`Burrito<A>`] is an immutable sequence of zero or more fillings. It is
//! built once (through [`burrito!`](crate::burrito), [`Burrito::wrap`],
//! `From<Vec<A>>` or `collect`) and never changed afterwards; every operation
//! returns a new burrito. Two burritos are equal when their filling
//! sequences are equal.
//!
//! `Burrito` is a lawful [`Functor`], [`Applicative`] and [`Monad`]:
//!
//! - `fmap` transforms each filling and keeps count and order.
//! - `apply` applies each wrapped function to each filling, function-major.
//! - `flatten` (and `join`) concatenates inner burritos in order.
//!
//! An empty burrito absorbs all three operations: mapping, applying or
//! flattening it yields another empty burrito. [`Burrito::guard`] uses this
//! to signal a rejected value by returning an empty burrito. That signal
//! carries no reason; [`Outcome`](crate::control::Outcome) is the type to
//! reach for when the caller needs to tell "nothing" from "failed".
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
//! let nested = burrito![burrito![1, 2], burrito![3], burrito![4, 5]];
//! assert_eq!(nested.flatten(), burrito![1, 2, 3, 4, 5]);
//! ```

mod error;

pub use error::BurritoError;

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// Builds a [`Burrito`] from a list of fillings.
///
/// # Examples
///
/// ```rust
/// use burrito::{Burrito, burrito};
///
/// let empty: Burrito<i32> = burrito![];
/// assert!(empty.is_empty());
///
/// let fillings = burrito!["rice", "beans", "salsa"];
/// assert_eq!(fillings.len(), 3);
/// ```
#[macro_export]
macro_rules! burrito {
    () => {
        $crate::container::Burrito::new()
    };

    ($($filling:expr),+ $(,)?) => {
        $crate::container::Burrito::from_vec(vec![$($filling),+])
    };
}

/// An immutable sequence of fillings.
///
/// # Examples
///
/// ```rust
/// use burrito::Burrito;
/// use burrito::typeclass::Monad;
///
/// let order: Burrito<&str> = ["carnitas", "al pastor"].into_iter().collect();
/// let with_salsa = order.flat_map(|filling| Burrito::from_vec(vec![filling, "salsa"]));
/// assert_eq!(
///     with_salsa.into_vec(),
///     vec!["carnitas", "salsa", "al pastor", "salsa"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Burrito<A> {
    fillings: Vec<A>,
}

static_assertions::assert_impl_all!(Burrito<i32>: Send, Sync);
static_assertions::assert_impl_all!(Burrito<String>: Send, Sync);

impl<A> Burrito<A> {
    /// Creates an empty burrito.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fillings: Vec::new(),
        }
    }

    /// Creates a burrito from fillings already collected in a `Vec`.
    #[inline]
    #[must_use]
    pub const fn from_vec(fillings: Vec<A>) -> Self {
        Self { fillings }
    }

    /// Creates a burrito holding exactly one filling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::{Burrito, burrito};
    ///
    /// assert_eq!(Burrito::wrap(7), burrito![7]);
    /// ```
    #[inline]
    #[must_use]
    pub fn wrap(filling: A) -> Self {
        Self {
            fillings: vec![filling],
        }
    }

    /// Wraps `filling` if it satisfies `predicate`, otherwise returns an
    /// empty burrito.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::{Burrito, burrito};
    /// use burrito::typeclass::Functor;
    ///
    /// let accepted = Burrito::guard(4, |n| n % 2 == 0).fmap(|n| n * 10);
    /// assert_eq!(accepted, burrito![40]);
    ///
    /// let rejected = Burrito::guard(3, |n| n % 2 == 0).fmap(|n| n * 10);
    /// assert!(rejected.is_empty());
    /// ```
    pub fn guard<P>(filling: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&filling) {
            Self::wrap(filling)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "burrito", "guard rejected a filling; wrapping nothing");
            Self::new()
        }
    }

    /// Returns the number of fillings.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fillings.len()
    }

    /// Returns `true` if the burrito holds no fillings.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fillings.is_empty()
    }

    /// Iterates over the fillings in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.fillings.iter()
    }

    /// Borrows the fillings as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[A] {
        &self.fillings
    }

    /// Returns the first filling, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&A> {
        self.fillings.first()
    }

    /// Returns the filling at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&A> {
        self.fillings.get(index)
    }

    /// Keeps only the fillings that satisfy `predicate`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::burrito;
    ///
    /// assert_eq!(burrito![1, 2, 3, 4].keep_if(|n| n % 2 == 0), burrito![2, 4]);
    /// ```
    #[must_use]
    pub fn keep_if<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.fillings
            .into_iter()
            .filter(|filling| predicate(filling))
            .collect()
    }

    /// Folds the fillings from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::burrito;
    ///
    /// assert_eq!(burrito![1, 2, 3].fold(0, |total, n| total + n), 6);
    /// ```
    pub fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.fillings.into_iter().fold(initial, function)
    }

    /// Unwraps a burrito that holds exactly one filling.
    ///
    /// # Errors
    ///
    /// Returns [`BurritoError::NotSingleton`] when the burrito is empty or
    /// holds more than one filling.
    pub fn single(self) -> Result<A, BurritoError> {
        let length = self.fillings.len();
        let mut fillings = self.fillings.into_iter();
        match (fillings.next(), fillings.next()) {
            (Some(filling), None) => Ok(filling),
            _ => Err(BurritoError::NotSingleton { length }),
        }
    }

    /// Consumes the burrito and returns its fillings.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<A> {
        self.fillings
    }
}

impl<A> Burrito<Burrito<A>> {
    /// Concatenates the inner burritos, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::{Burrito, burrito};
    ///
    /// let nested = burrito![burrito![1, 2], burrito![], burrito![3]];
    /// assert_eq!(nested.flatten(), burrito![1, 2, 3]);
    ///
    /// let empty: Burrito<Burrito<i32>> = burrito![];
    /// assert!(empty.flatten().is_empty());
    /// ```
    #[must_use]
    pub fn flatten(self) -> Burrito<A> {
        Burrito::combine_all(self.fillings)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Default for Burrito<A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for Burrito<A> {
    #[inline]
    fn from(fillings: Vec<A>) -> Self {
        Self::from_vec(fillings)
    }
}

impl<A> From<Burrito<A>> for Vec<A> {
    #[inline]
    fn from(burrito: Burrito<A>) -> Self {
        burrito.fillings
    }
}

impl<A> FromIterator<A> for Burrito<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            fillings: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for Burrito<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fillings.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Burrito<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fillings.iter()
    }
}

impl<A: fmt::Display> fmt::Display for Burrito<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Burrito[")?;
        let mut first = true;
        for filling in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{filling}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Burrito<A> {
    type Inner = A;
    type WithType<B> = Burrito<B>;
}

impl<A> Functor for Burrito<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Burrito<B>
    where
        F: FnMut(A) -> B,
    {
        self.fillings.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Burrito<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fillings.iter().map(function).collect()
    }
}

impl<A> Applicative for Burrito<A> {
    #[inline]
    fn pure<B>(value: B) -> Burrito<B> {
        Burrito::wrap(value)
    }

    fn map2<B, C, F>(self, other: Burrito<B>, function: F) -> Burrito<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Burrito::from_vec(self.fillings.map2(other.fillings, function))
    }

    fn apply<B, Output>(self, other: Burrito<B>) -> Burrito<Output>
    where
        A: FnMut(B) -> Output,
        B: Clone,
    {
        Burrito::from_vec(self.fillings.apply(other.fillings))
    }
}

impl<A> Monad for Burrito<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Burrito<B>
    where
        F: FnMut(A) -> Burrito<B>,
    {
        self.fillings.into_iter().flat_map(function).collect()
    }
}

impl<A> Semigroup for Burrito<A> {
    fn combine(mut self, mut other: Self) -> Self {
        self.fillings.append(&mut other.fillings);
        self
    }
}

impl<A> Monoid for Burrito<A> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Burrito<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for filling in self {
            seq.serialize_element(filling)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct BurritoVisitor<A> {
    marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<A> BurritoVisitor<A> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::de::Visitor<'de> for BurritoVisitor<A>
where
    A: serde::Deserialize<'de>,
{
    type Value = Burrito<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of fillings")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut fillings = Vec::with_capacity(capacity);
        while let Some(filling) = seq.next_element()? {
            fillings.push(filling);
        }
        Ok(Burrito::from_vec(fillings))
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Burrito<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BurritoVisitor::new())
    }
}
