//! # Operators
//!
//! This module implements the basic operators of the language.
//!
//! 1. [Arithmetic](./arithmetic/index.html): `+`, `-`, `*`, `/`, `%`, unary `-` and `+`,
//!    and the overflow operators.
//! 2. [Comparison](./comparison/index.html): `==`, `!=`, `<`, `<=`, `>`, `>=`, on
//!    single values and on tuples.
pub mod arithmetic;
pub mod comparison;

pub use arithmetic::{remainder, Integer, Remainder};
pub use comparison::{Comparable, Equatable, TupleEquality, TupleOrdering};
