//! # Conditional Binding Chains
//!
//! Several optional bindings and boolean conditions can be combined into
//! a single condition. They are evaluated from left to right, and the first
//! absent value or false condition fails the whole chain: nothing after it
//! is evaluated.
//!
//! ```
//! use fundamentals::optional::{Bindings, Optional};
//!
//! let bound = Bindings::new()
//!     .bind(|_| Optional::<i64>::parse("4"))
//!     .bind(|_| Optional::<i64>::parse("42"))
//!     .when(|&(first, second)| first < second && second < 100)
//!     .finish();
//! assert_eq!(bound, Some((4, 42)));
//! ```
//!
//! Each bind receives the values bound so far, so later binds may depend
//! on earlier ones.
use super::Optional;
use crate::checks::fatal_error;
use log::trace;
use std::fmt;

/// Append a value to the end of a tuple.
pub trait Append<U> {
    type Output;

    fn append(self, value: U) -> Self::Output;
}

impl<U> Append<U> for () {
    type Output = (U,);

    fn append(self, value: U) -> Self::Output {
        (value,)
    }
}

macro_rules! append_impl {
    ($($name:ident),+) => {
        impl<$($name,)+ U> Append<U> for ($($name,)+) {
            type Output = ($($name,)+ U);

            #[allow(non_snake_case)]
            fn append(self, value: U) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ value)
            }
        }
    };
}

append_impl!(A);
append_impl!(A, B);
append_impl!(A, B, C);
append_impl!(A, B, C, D);
append_impl!(A, B, C, D, E);

/// A chain of conditional bindings, holding the tuple of values bound
/// so far, or nothing once any step of the chain has failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bindings<T> {
    bound: Option<T>,
    steps: usize,
}

impl Bindings<()> {
    /// Start an empty chain, which succeeds trivially.
    pub fn new() -> Self {
        Self {
            bound: Some(()),
            steps: 0,
        }
    }
}

impl Default for Bindings<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bindings<T> {
    /// Bind the value of another optional onto the end of the chain.
    ///
    /// The optional is only evaluated if every earlier step succeeded.
    pub fn bind<U>(self, optional: impl FnOnce(&T) -> Optional<U>) -> Bindings<T::Output>
    where
        T: Append<U>,
    {
        let steps = self.steps + 1;
        let bound = match self.bound {
            Some(bound) => match optional(&bound) {
                Optional::Present(value) => Some(bound.append(value)),
                Optional::Absent => {
                    trace!("Binding chain stopped at step {steps}: value is absent");
                    None
                }
            },
            None => None,
        };
        Bindings { bound, steps }
    }

    /// Add a boolean condition on the values bound so far.
    ///
    /// The condition is only evaluated if every earlier step succeeded.
    pub fn when(self, condition: impl FnOnce(&T) -> bool) -> Self {
        let steps = self.steps + 1;
        let bound = match self.bound {
            Some(bound) => {
                if condition(&bound) {
                    Some(bound)
                } else {
                    trace!("Binding chain stopped at step {steps}: condition is false");
                    None
                }
            }
            None => None,
        };
        Self { bound, steps }
    }

    /// Did every step of the chain succeed?
    pub fn succeeded(&self) -> bool {
        self.bound.is_some()
    }

    /// The bound values, if every step succeeded.
    pub fn finish(self) -> Option<T> {
        self.bound
    }

    /// Run the body with the bound values if every step succeeded.
    pub fn then<R>(self, body: impl FnOnce(T) -> R) -> Option<R> {
        self.bound.map(body)
    }

    /// Run the body with the bound values if every step succeeded,
    /// otherwise run the alternative.
    pub fn then_else<R>(self, body: impl FnOnce(T) -> R, otherwise: impl FnOnce() -> R) -> R {
        match self.bound {
            Some(bound) => body(bound),
            None => otherwise(),
        }
    }

    /// Return the bound values, or terminate the program with the
    /// message if any step failed.
    ///
    /// The bound values stay available after this call, unlike with
    /// [`Bindings::then`].
    #[track_caller]
    pub fn or_fatal(self, message: impl fmt::Display) -> T {
        match self.bound {
            Some(bound) => bound,
            None => fatal_error(message),
        }
    }
}
