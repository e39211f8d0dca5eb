//! # Comparison Operations
//!
//! This module implements the comparison operators, and their extension
//! to tuples.
//!
//! Equality is supported by every [`Equatable`] type, but ordering
//! (`<`, `<=`, `>`, `>=`) only by [`Comparable`] types. Booleans can be
//! compared for equality, but not ordered.
//!
//! ## Tuples
//!
//! Two tuples of the same type and length are compared from left to right,
//! one element at a time, until two elements aren't equal. The result of
//! comparing those two elements is the result of the whole comparison.
//! If every element is equal, the tuples are equal.
//!
//! A tuple can only be compared with an operator if the operator applies to
//! each of its elements. Tuples of one to six elements are supported.
//!
//! ```
//! use fundamentals::ops::comparison::{equal, less_than};
//!
//! assert!(less_than(&("blue", -1), &("purple", 1)));
//! assert!(equal(&("blue", false), &("blue", false)));
//! ```
//!
//! Booleans can't be ordered, so neither can tuples containing them:
//!
//! ```compile_fail
//! use fundamentals::ops::comparison::less_than;
//!
//! less_than(&("blue", false), &("purple", true));
//! ```
use ::core::cmp::Ordering;

/// A type whose values can be compared for equality.
pub trait Equatable {
    fn equals(&self, other: &Self) -> bool;
}

/// A type whose values can be ordered.
///
/// `compare` returns `None` when the two values are unordered, such as
/// with a floating point NaN.
pub trait Comparable: Equatable {
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! equatable_impl {
    ($($t:ty),+) => {
        $(
            impl Equatable for $t {
                #[inline(always)]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

macro_rules! comparable_impl {
    ($($t:ty),+) => {
        $(
            impl Comparable for $t {
                #[inline(always)]
                fn compare(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }
            }
        )+
    };
}

equatable_impl!(i8, i16, i32, i64, i128, isize);
equatable_impl!(u8, u16, u32, u64, u128, usize);
equatable_impl!(f32, f64, char, str, String, bool, ());

comparable_impl!(i8, i16, i32, i64, i128, isize);
comparable_impl!(u8, u16, u32, u64, u128, usize);
comparable_impl!(f32, f64, char, str, String);

impl<T: Equatable + ?Sized> Equatable for &T {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn compare(&self, other: &Self) -> Option<Ordering> {
        (**self).compare(*other)
    }
}

/// A tuple whose elements are all [`Equatable`].
pub trait TupleEquality {
    fn tuple_equals(&self, other: &Self) -> bool;
}

/// A tuple whose elements are all [`Comparable`].
pub trait TupleOrdering: TupleEquality {
    /// Compare two tuples lexicographically.
    fn tuple_compare(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! tuple_impl {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Equatable),+> TupleEquality for ($($name,)+) {
            fn tuple_equals(&self, other: &Self) -> bool {
                $(<$name as Equatable>::equals(&self.$idx, &other.$idx))&&+
            }
        }

        impl<$($name: Comparable),+> TupleOrdering for ($($name,)+) {
            fn tuple_compare(&self, other: &Self) -> Option<Ordering> {
                $(
                    match <$name as Comparable>::compare(&self.$idx, &other.$idx) {
                        Some(Ordering::Equal) => {}
                        decided => return decided,
                    }
                )+
                Some(Ordering::Equal)
            }
        }
    };
}

tuple_impl!(A.0);
tuple_impl!(A.0, B.1);
tuple_impl!(A.0, B.1, C.2);
tuple_impl!(A.0, B.1, C.2, D.3);
tuple_impl!(A.0, B.1, C.2, D.3, E.4);
tuple_impl!(A.0, B.1, C.2, D.3, E.4, F.5);

pub fn equal<T: TupleEquality>(a: &T, b: &T) -> bool {
    a.tuple_equals(b)
}

pub fn not_equal<T: TupleEquality>(a: &T, b: &T) -> bool {
    !a.tuple_equals(b)
}

pub fn less_than<T: TupleOrdering>(a: &T, b: &T) -> bool {
    a.tuple_compare(b) == Some(Ordering::Less)
}

pub fn less_or_equal<T: TupleOrdering>(a: &T, b: &T) -> bool {
    matches!(a.tuple_compare(b), Some(Ordering::Less | Ordering::Equal))
}

pub fn greater_than<T: TupleOrdering>(a: &T, b: &T) -> bool {
    a.tuple_compare(b) == Some(Ordering::Greater)
}

pub fn greater_or_equal<T: TupleOrdering>(a: &T, b: &T) -> bool {
    matches!(a.tuple_compare(b), Some(Ordering::Greater | Ordering::Equal))
}
