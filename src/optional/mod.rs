//! # Optional Module
//!
//! This module implements optional values: a value of some type `T`,
//! or no value at all.
//!
//! ## Accessing the Value
//!
//! An [`Optional`] never coerces to or from a plain `T` on its own. Every
//! access is explicit, and each kind of access handles absence differently:
//!
//! - **Skip** the code that needs the value with a conditional binding
//!   ([`Optional::bind`], or [`Bindings`] for several at once).
//! - **Propagate** the absence with [`Optional::map`] and [`Optional::flat_map`].
//! - **Fall back** to another value with [`Optional::coalesce`].
//! - **Stop** the program with [`Optional::force_unwrap`].
//!
//! An [`ImplicitlyUnwrapped`] optional is a normal optional behind the scenes,
//! which may also be used in place of its value.
use crate::checks::fatal_error;
use ::core::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

pub mod binding;
pub mod implicit;

pub use binding::{Append, Bindings};
pub use implicit::ImplicitlyUnwrapped;

/// The message used when a forced unwrap finds no value.
pub const UNWRAP_NIL_MESSAGE: &str = "Unexpectedly found nil while unwrapping an Optional value";

/// Either a value of type `T`, or the absence of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

/// The absence of a value, for comparing optionals against.
///
/// `optional == Nil` is true exactly when the optional is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nil;

impl Display for Nil {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "nil")
    }
}

impl<T> Optional<T> {
    /// Try to convert a string into a `T`. The result is absent if the
    /// string doesn't describe a `T`.
    pub fn parse(s: &str) -> Self
    where
        T: FromStr,
    {
        Self::from(s.parse::<T>().ok())
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Conditionally bind the value.
    ///
    /// If a value is present, a fresh copy of it is returned. The copy is
    /// a new binding: changing it never changes this optional.
    pub fn bind(&self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Self::Present(value) => Some(value.clone()),
            Self::Absent => None,
        }
    }

    /// Return the value if present, otherwise the fallback.
    ///
    /// The fallback is only evaluated when the value is absent.
    pub fn coalesce(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Return this optional if a value is present, otherwise the fallback
    /// optional. The fallback is only evaluated when the value is absent.
    pub fn coalesce_optional(self, fallback: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback(),
        }
    }

    /// Return the value, or terminate the program if there is none.
    ///
    /// Only force unwrap when an absent value means the program itself
    /// is wrong. This is not a recoverable error.
    #[track_caller]
    pub fn force_unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fatal_error(UNWRAP_NIL_MESSAGE),
        }
    }

    /// Transform the value if present, propagating the absence otherwise.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chain another optional operation onto the value if present.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Optional::Absent,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Take the value out, leaving this optional absent.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    /// Store a new value, returning the previous state.
    pub fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Present(value))
    }
}

/// A declared optional without a value starts out absent.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> PartialEq<Nil> for Optional<T> {
    fn eq(&self, _: &Nil) -> bool {
        self.is_absent()
    }
}

impl<T> PartialEq<Optional<T>> for Nil {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_absent()
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Present(value) => write!(f, "Optional({value})"),
            Self::Absent => write!(f, "{}", Nil),
        }
    }
}
