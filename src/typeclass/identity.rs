//! The identity container.
//!
//! `Identity` holds exactly one value and adds nothing else. It is the
//! simplest lawful Functor / Applicative / Monad and serves as the reference
//! model the other containers are compared against in the law tests.

use super::TypeConstructor;

/// A container holding exactly one value.
///
/// # Examples
///
/// ```rust
/// use burrito::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use burrito::typeclass::Identity;
    ///
    /// let wrapped = Identity::new(String::from("rice"));
    /// assert_eq!(wrapped.as_inner(), "rice");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_into_inner_agree() {
        let wrapped = Identity::new(String::from("beans"));
        assert_eq!(wrapped.into_inner(), "beans");
    }

    #[rstest]
    fn tuple_field_is_public() {
        let wrapped = Identity(7);
        assert_eq!(wrapped.0, 7);
    }

    #[rstest]
    fn from_value_wraps() {
        let wrapped: Identity<i32> = 5.into();
        assert_eq!(wrapped, Identity::new(5));
    }

    #[rstest]
    #[case(1, 2)]
    #[case(-3, 0)]
    fn ordering_follows_the_value(#[case] smaller: i32, #[case] larger: i32) {
        assert!(Identity::new(smaller) < Identity::new(larger));
    }

    #[rstest]
    fn with_type_rewraps() {
        fn assert_identity_string<T: TypeConstructor<Inner = String>>() {}
        assert_identity_string::<<Identity<i32> as TypeConstructor>::WithType<String>>();
    }
}
