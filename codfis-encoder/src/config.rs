/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Encoder configuration.

use crate::segment::DEFAULT_FILLER;

/// How the date of birth is checked before encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateValidation {
    /// Shape only; any numeric day, month or year is accepted.
    #[default]
    Permissive,
    /// Shape plus month 1-12, day 1-31 and a four-digit year.
    Strict,
}

/// Configuration for an [`Encoder`](crate::Encoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncoderConfig {
    /// Character used to pad short surname and name segments.
    pub filler: char,
    /// Date of birth validation mode.
    pub date_validation: DateValidation,
}

impl EncoderConfig {
    /// Creates the default configuration: `x` filler, permissive dates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filler: DEFAULT_FILLER,
            date_validation: DateValidation::Permissive,
        }
    }

    /// Sets the filler character.
    #[must_use]
    pub const fn with_filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    /// Sets the date validation mode.
    #[must_use]
    pub const fn with_date_validation(mut self, validation: DateValidation) -> Self {
        self.date_validation = validation;
        self
    }

    /// Enables or disables strict date validation.
    #[must_use]
    pub const fn with_strict_dates(self, strict: bool) -> Self {
        self.with_date_validation(if strict {
            DateValidation::Strict
        } else {
            DateValidation::Permissive
        })
    }

    /// Returns true if dates are range-checked.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.date_validation, DateValidation::Strict)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
