//! # Implicitly Unwrapped Optionals
//!
//! An implicitly unwrapped optional has permission to be force unwrapped
//! wherever its value is needed. It is meant for values that are confirmed
//! to exist right after they are first set, and can be assumed to exist
//! from then on.
//!
//! The wrapped value is reached through [`Deref`]: wherever a `&T` is required,
//! such as a method call or a `&T` parameter, the optional is force unwrapped
//! on the spot. Taking the value out by ownership needs an explicit
//! [`ImplicitlyUnwrapped::as_plain`]. Anywhere an optional is expected instead,
//! the optional is passed along as-is, and an absent value stays absent.
use super::{Nil, Optional, UNWRAP_NIL_MESSAGE};
use crate::checks::fatal_error;
use ::core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Deref, DerefMut},
};

/// An optional which is force unwrapped wherever a plain value is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImplicitlyUnwrapped<T>(Optional<T>);

impl<T> ImplicitlyUnwrapped<T> {
    pub fn new(value: T) -> Self {
        Self(Optional::Present(value))
    }

    pub fn absent() -> Self {
        Self(Optional::Absent)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_present()
    }

    /// Conditionally bind the value, exactly like a normal optional.
    pub fn bind(&self) -> Option<T>
    where
        T: Clone,
    {
        self.0.bind()
    }

    /// Use this optional as its plain value, terminating the program
    /// if there is none.
    #[track_caller]
    pub fn as_plain(self) -> T {
        match self.0 {
            Optional::Present(value) => value,
            Optional::Absent => fatal_error(UNWRAP_NIL_MESSAGE),
        }
    }

    /// Use this optional as a normal optional. This never unwraps.
    pub fn as_optional(&self) -> &Optional<T> {
        &self.0
    }

    pub fn into_optional(self) -> Optional<T> {
        self.0
    }

    /// Set the value after the fact.
    pub fn set(&mut self, value: T) {
        self.0 = Optional::Present(value);
    }
}

impl<T> Deref for ImplicitlyUnwrapped<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match &self.0 {
            Optional::Present(value) => value,
            Optional::Absent => fatal_error(UNWRAP_NIL_MESSAGE),
        }
    }
}

impl<T> DerefMut for ImplicitlyUnwrapped<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.0 {
            Optional::Present(value) => value,
            Optional::Absent => fatal_error(UNWRAP_NIL_MESSAGE),
        }
    }
}

impl<T> Default for ImplicitlyUnwrapped<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Optional<T>> for ImplicitlyUnwrapped<T> {
    fn from(optional: Optional<T>) -> Self {
        Self(optional)
    }
}

impl<T> From<ImplicitlyUnwrapped<T>> for Optional<T> {
    fn from(implicit: ImplicitlyUnwrapped<T>) -> Self {
        implicit.0
    }
}

impl<T> PartialEq<Nil> for ImplicitlyUnwrapped<T> {
    fn eq(&self, _: &Nil) -> bool {
        self.0.is_absent()
    }
}

impl<T> PartialEq<ImplicitlyUnwrapped<T>> for Nil {
    fn eq(&self, other: &ImplicitlyUnwrapped<T>) -> bool {
        other.0.is_absent()
    }
}

impl<T: Display> Display for ImplicitlyUnwrapped<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
