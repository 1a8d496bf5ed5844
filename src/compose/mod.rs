//! Function composition utilities.
//!
//! - [`compose!`]: compose functions right-to-left
//! - [`pipe!`]: thread a value through functions left-to-right
//! - [`identity`]: the unit of composition
//! - [`compose_two`]: binary composition, the step `compose!` repeats
//!
//! # Examples
//!
//! ```
//! use burrito::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{compose_two, identity};

pub use crate::compose;
pub use crate::pipe;
