//! Errors raised by [`Burrito`](super::Burrito) conversions.

use std::fmt;

/// Errors that can occur when taking a burrito apart.
///
/// # Examples
///
/// ```rust
/// use burrito::burrito;
/// use burrito::container::BurritoError;
///
/// let error = burrito![1, 2].single().unwrap_err();
/// assert_eq!(error, BurritoError::NotSingleton { length: 2 });
/// assert_eq!(error.to_string(), "expected exactly one filling, found 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurritoError {
    /// The burrito did not hold exactly one filling.
    NotSingleton {
        /// The number of fillings actually present.
        length: usize,
    },
}

impl fmt::Display for BurritoError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSingleton { length } => {
                write!(formatter, "expected exactly one filling, found {length}")
            }
        }
    }
}

impl std::error::Error for BurritoError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "expected exactly one filling, found 0")]
    #[case(3, "expected exactly one filling, found 3")]
    fn not_singleton_display(#[case] length: usize, #[case] expected: &str) {
        assert_eq!(BurritoError::NotSingleton { length }.to_string(), expected);
    }

    #[rstest]
    fn is_a_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(BurritoError::NotSingleton { length: 0 });
        assert!(error.source().is_none());
    }
}
