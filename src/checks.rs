//! # Checks Module
//!
//! This module implements the runtime checks of the language: fatal errors,
//! assertions, and preconditions.
//!
//! ## Fatal Errors
//!
//! A fatal error means the program has reached an invalid state. It is
//! *never* a recoverable error: [`fatal_error`] logs the message, writes it
//! to standard error along with the caller's location, and aborts the process.
//! There is no unwinding, so a fatal error cannot be caught.
//!
//! Forced unwrapping of an absent optional, integer overflow, division by zero,
//! and failed assertions or preconditions all end up here.
//!
//! ## Check Levels
//!
//! Which checks actually run depends on the [`CheckLevel`] the program was
//! built with.
//!
//! | Check                   | `Debug` | `Release`   | `Unchecked` |
//! |-------------------------|---------|-------------|-------------|
//! | `assert`                | checked | skipped     | skipped     |
//! | `assertion_failure`     | fatal   | no-op       | no-op       |
//! | `precondition`          | checked | checked     | skipped     |
//! | `precondition_failure`  | fatal   | fatal       | fatal       |
//! | `fatal_error`           | fatal   | fatal       | fatal       |
//!
//! A skipped check never evaluates its condition, so the condition is passed
//! as a closure.
use log::error;
use std::{fmt, panic::Location};

/// Terminate the program with the given message.
///
/// This is never optimized out, regardless of the check level.
#[track_caller]
pub fn fatal_error(message: impl fmt::Display) -> ! {
    let location = Location::caller();
    error!("fatal error at {location}: {message}");
    eprintln!("Fatal error: {message}");
    eprintln!("  --> {}:{}:{}", location.file(), location.line(), location.column());
    std::process::abort()
}

/// Terminate the program from a stub that has not been written yet.
#[track_caller]
pub fn not_implemented(what: impl fmt::Display) -> ! {
    fatal_error(format!("Unimplemented: {what}"))
}

/// The optimization setting which decides which runtime checks are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckLevel {
    /// No optimization: assertions and preconditions are both checked.
    Debug,
    /// Optimized: only preconditions are checked.
    Release,
    /// Optimized without checks: preconditions are assumed to hold.
    Unchecked,
}

impl Default for CheckLevel {
    /// The level matching the profile this crate was compiled with.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
            Self::Unchecked => write!(f, "unchecked"),
        }
    }
}

/// Runs assertions and preconditions according to a check level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checks {
    pub level: CheckLevel,
}

impl Checks {
    pub fn new(level: CheckLevel) -> Self {
        Self { level }
    }

    /// Are assertions evaluated at this level?
    pub fn assertions_enabled(&self) -> bool {
        self.level == CheckLevel::Debug
    }

    /// Are preconditions evaluated at this level?
    pub fn preconditions_enabled(&self) -> bool {
        self.level != CheckLevel::Unchecked
    }

    /// Check a condition that should hold while developing.
    ///
    /// The condition is only evaluated in debug builds. If it is false,
    /// the program terminates with the message.
    #[track_caller]
    pub fn assert<M: fmt::Display>(
        &self,
        condition: impl FnOnce() -> bool,
        message: impl FnOnce() -> M,
    ) {
        if self.assertions_enabled() && !condition() {
            fatal_error(format!("Assertion failed: {}", message()))
        }
    }

    /// Report that an assertion has already failed, such as in a
    /// branch that should never be taken.
    #[track_caller]
    pub fn assertion_failure<M: fmt::Display>(&self, message: impl FnOnce() -> M) {
        if self.assertions_enabled() {
            fatal_error(format!("Assertion failed: {}", message()))
        }
    }

    /// Check a condition that the caller must uphold, even in
    /// production builds.
    #[track_caller]
    pub fn precondition<M: fmt::Display>(
        &self,
        condition: impl FnOnce() -> bool,
        message: impl FnOnce() -> M,
    ) {
        if self.preconditions_enabled() && !condition() {
            fatal_error(format!("Precondition failed: {}", message()))
        }
    }

    /// Report that a precondition has already failed. This always halts.
    #[track_caller]
    pub fn precondition_failure<M: fmt::Display>(&self, message: impl FnOnce() -> M) -> ! {
        fatal_error(format!("Precondition failed: {}", message()))
    }
}
