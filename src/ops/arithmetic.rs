//! # Arithmetic Operations
//!
//! This module implements the arithmetic operators:
//! - `Add`
//! - `Subtract`
//! - `Multiply`
//! - `Divide`
//! - `Remainder`
//! - `Negate` (unary minus)
//! - `Plus` (unary plus)
//!
//! Integer arithmetic doesn't overflow silently: a result that doesn't fit in
//! the type is a fatal error, as is dividing by zero. Wrapping arithmetic is
//! opt-in, through the overflow operators (`overflow_add`, `overflow_subtract`,
//! and `overflow_multiply`).
//!
//! ## Remainder
//!
//! The remainder operator works out how many multiples of `b` fit inside `a`
//! and returns what is left over:
//!
//! ```text
//! a = (b * some multiplier) + remainder
//! ```
//!
//! The multiplier is truncated toward zero, so the remainder takes the sign
//! of `a`, and the sign of `b` is ignored: `a % b == a % -b`.
use crate::checks::fatal_error;

/// A type supporting the remainder operator.
pub trait Remainder: Sized {
    /// Compute `self - rhs * trunc(self / rhs)`.
    fn remainder(self, rhs: Self) -> Self;
}

/// An integer type with trapping and wrapping arithmetic.
pub trait Integer: Copy + Remainder {
    fn is_zero(self) -> bool;

    fn checked_add_val(self, rhs: Self) -> Option<Self>;
    fn checked_sub_val(self, rhs: Self) -> Option<Self>;
    fn checked_mul_val(self, rhs: Self) -> Option<Self>;
    fn checked_div_val(self, rhs: Self) -> Option<Self>;
    fn checked_neg_val(self) -> Option<Self>;

    fn wrapping_add_val(self, rhs: Self) -> Self;
    fn wrapping_sub_val(self, rhs: Self) -> Self;
    fn wrapping_mul_val(self, rhs: Self) -> Self;
}

macro_rules! integer_impl {
    ($($t:ty),+) => {
        $(
            impl Remainder for $t {
                #[track_caller]
                fn remainder(self, rhs: $t) -> $t {
                    if rhs == 0 {
                        fatal_error("Division by zero in remainder operation")
                    }
                    match self.checked_rem(rhs) {
                        Some(result) => result,
                        None => fatal_error("Division results in an overflow in remainder operation"),
                    }
                }
            }

            impl Integer for $t {
                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0
                }
                #[inline(always)]
                fn checked_add_val(self, rhs: $t) -> Option<$t> {
                    self.checked_add(rhs)
                }
                #[inline(always)]
                fn checked_sub_val(self, rhs: $t) -> Option<$t> {
                    self.checked_sub(rhs)
                }
                #[inline(always)]
                fn checked_mul_val(self, rhs: $t) -> Option<$t> {
                    self.checked_mul(rhs)
                }
                #[inline(always)]
                fn checked_div_val(self, rhs: $t) -> Option<$t> {
                    self.checked_div(rhs)
                }
                #[inline(always)]
                fn checked_neg_val(self) -> Option<$t> {
                    self.checked_neg()
                }
                #[inline(always)]
                fn wrapping_add_val(self, rhs: $t) -> $t {
                    self.wrapping_add(rhs)
                }
                #[inline(always)]
                fn wrapping_sub_val(self, rhs: $t) -> $t {
                    self.wrapping_sub(rhs)
                }
                #[inline(always)]
                fn wrapping_mul_val(self, rhs: $t) -> $t {
                    self.wrapping_mul(rhs)
                }
            }
        )+
    };
}

integer_impl!(i8, i16, i32, i64, i128, isize);
integer_impl!(u8, u16, u32, u64, u128, usize);

macro_rules! float_remainder_impl {
    ($($t:ty),+) => {
        $(
            impl Remainder for $t {
                /// The truncating remainder. Dividing by zero gives NaN.
                fn remainder(self, rhs: $t) -> $t {
                    self % rhs
                }
            }
        )+
    };
}

float_remainder_impl!(f32, f64);

/// The remainder of `a / b`, with the sign of `a`.
#[track_caller]
pub fn remainder<T: Remainder>(a: T, b: T) -> T {
    a.remainder(b)
}

#[track_caller]
pub fn add<T: Integer>(a: T, b: T) -> T {
    match a.checked_add_val(b) {
        Some(result) => result,
        None => fatal_error("Arithmetic overflow in addition"),
    }
}

#[track_caller]
pub fn subtract<T: Integer>(a: T, b: T) -> T {
    match a.checked_sub_val(b) {
        Some(result) => result,
        None => fatal_error("Arithmetic overflow in subtraction"),
    }
}

#[track_caller]
pub fn multiply<T: Integer>(a: T, b: T) -> T {
    match a.checked_mul_val(b) {
        Some(result) => result,
        None => fatal_error("Arithmetic overflow in multiplication"),
    }
}

#[track_caller]
pub fn divide<T: Integer>(a: T, b: T) -> T {
    if b.is_zero() {
        fatal_error("Division by zero")
    }
    match a.checked_div_val(b) {
        Some(result) => result,
        None => fatal_error("Division results in an overflow"),
    }
}

/// Toggle the sign of a value.
#[track_caller]
pub fn negate<T: Integer>(a: T) -> T {
    match a.checked_neg_val() {
        Some(result) => result,
        None => fatal_error("Arithmetic overflow in negation"),
    }
}

/// Return the value unchanged. This only exists for symmetry with [`negate`].
pub fn plus<T>(a: T) -> T {
    a
}

/// Add, wrapping around at the boundary of the type.
pub fn overflow_add<T: Integer>(a: T, b: T) -> T {
    a.wrapping_add_val(b)
}

/// Subtract, wrapping around at the boundary of the type.
pub fn overflow_subtract<T: Integer>(a: T, b: T) -> T {
    a.wrapping_sub_val(b)
}

/// Multiply, wrapping around at the boundary of the type.
pub fn overflow_multiply<T: Integer>(a: T, b: T) -> T {
    a.wrapping_mul_val(b)
}
