//! Control structures for short-circuiting computations.
//!
//! - [`Outcome`]: success, nothing, or a reported failure
//! - [`OutcomeError`]: the error side of [`Outcome::into_result`]
//!
//! # Examples
//!
//! ```rust
//! use burrito::control::Outcome;
//! use burrito::typeclass::Monad;
//!
//! let parsed: Outcome<i32, String> = "12".parse::<i32>().map_err(|e| e.to_string()).into();
//! let halved = parsed.flat_map(|n| {
//!     if n % 2 == 0 { Outcome::Success(n / 2) } else { Outcome::Empty }
//! });
//! assert_eq!(halved, Outcome::Success(6));
//! ```

mod outcome;

pub use outcome::{Outcome, OutcomeError};
