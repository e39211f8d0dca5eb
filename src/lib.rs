//! # Fundamentals
//!
//! This crate implements the runtime semantics behind a tour of a language's
//! fundamentals: optional values, the basic operators, and runtime checks.
//!
//! ## Index
//!
//! 1. [Optionals](./optional/index.html)
//! 2. [Operators](./ops/index.html)
//! 3. [Assertions, Preconditions, and Fatal Errors](./checks/index.html)
//! 4. [The Tour](./lessons/index.html)
//!
//! ## Failure
//!
//! There are exactly two ways for code to go wrong here:
//!
//! 1. **Fatal errors.** Force unwrapping an absent value, overflowing an
//!    integer, or failing a check means the program is in an invalid state.
//!    The process is aborted on the spot. Fatal errors are *not* panics:
//!    they can't be caught, and they don't unwind.
//! 2. **Contract violations.** Ordering tuples of booleans, or using an integer
//!    as a condition, is rejected by the type checker before the program runs.
//!
//! ```
//! use fundamentals::optional::{Nil, Optional};
//!
//! let converted_number = Optional::<i64>::parse("123");
//! assert!(converted_number != Nil);
//!
//! let name: Optional<&str> = Optional::Absent;
//! assert_eq!(format!("Hello, {}!", name.coalesce(|| "friend")), "Hello, friend!");
//! ```
pub mod checks;
pub mod lessons;
pub mod ops;
pub mod optional;

pub use checks::{fatal_error, not_implemented, CheckLevel, Checks};
pub use optional::{Bindings, ImplicitlyUnwrapped, Nil, Optional};
