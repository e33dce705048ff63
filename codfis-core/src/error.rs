/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the codfis fiscal code generator.
//!
//! This module provides a unified error hierarchy using `thiserror`. Every
//! failure aborts the whole computation: there are no partial codes.

use std::fmt;
use thiserror::Error;

/// Result type alias using [`CodfisError`] as the error type.
pub type Result<T> = std::result::Result<T, CodfisError>;

/// Top-level error type for all codfis operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodfisError {
    /// Error while classifying characters.
    #[error("classify error: {0}")]
    Classify(#[from] ClassifyError),

    /// Error while parsing or validating the date of birth.
    #[error("date error: {0}")]
    Date(#[from] DateError),
}

impl CodfisError {
    /// Returns true if this error was caused by a malformed date of birth.
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::Date(DateError::InvalidFormat { .. }))
    }
}

/// Errors raised by the single-character vowel classifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The classifier was handed a string that is not exactly one character.
    #[error("invalid argument: expected a 1-character string, got {length} characters")]
    InvalidArgument {
        /// Number of characters actually supplied.
        length: usize,
    },
}

/// Errors raised while turning a `D/M/Y` string into a birth date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text is not three `/`-separated runs of digits.
    #[error("invalid date format: {input:?}, expected D/M/Y")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },

    /// A date component lies outside its accepted range (strict mode only).
    #[error("{component} out of range: {value}")]
    OutOfRange {
        /// Which component was rejected.
        component: DateComponent,
        /// The parsed value.
        value: u32,
    },

    /// The year was written with fewer than four digits (strict mode only).
    #[error("year must have at least 4 digits, got {digits}")]
    ShortYear {
        /// Number of digits the year was written with.
        digits: usize,
    },
}

/// Error returned when a string is not a recognised gender tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown gender tag: {0:?}, expected M or F")]
pub struct ParseGenderError(pub String);

/// A component of a `D/M/Y` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateComponent {
    /// Day of month.
    Day,
    /// Month of year.
    Month,
    /// Year.
    Year,
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}
