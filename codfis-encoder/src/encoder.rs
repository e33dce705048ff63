/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fiscal code encoder.
//!
//! This module composes the five segments into a complete code. The date of
//! birth is parsed once and feeds the year, month and day segments.

use crate::config::{DateValidation, EncoderConfig};
use crate::date::{day_portion, month_portion, parse_date, parse_date_strict, year_portion};
use crate::segment::{name_portion_with, surname_portion_with};
use codfis_core::code::{FISCAL_CODE_LEN, FiscalCode};
use codfis_core::error::{DateError, Result};
use codfis_core::person::PersonData;
use codfis_core::types::BirthDate;

/// Computes the fiscal code for `person` with the default configuration.
///
/// # Errors
/// Returns `CodfisError::Date` if the date of birth is malformed.
///
/// # Example
/// ```
/// use codfis_core::{Gender, PersonData};
/// use codfis_encoder::fiscal_code;
///
/// let person = PersonData::new("Mickey", "Mouse", Gender::Male, "16/1/1928");
/// assert_eq!(fiscal_code(&person).unwrap().as_str(), "MSOMKY28A16");
/// ```
#[inline]
pub fn fiscal_code(person: &PersonData) -> Result<FiscalCode> {
    Encoder::default().encode(person)
}

/// Fiscal code encoder.
///
/// Stateless apart from its configuration; one encoder can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Creates a new encoder with the given configuration.
    #[must_use]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Returns the encoder configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Parses a date of birth according to the configured validation mode.
    ///
    /// # Errors
    /// Returns `DateError` if the text is malformed or, in strict mode, out
    /// of range.
    pub fn parse_dob(&self, dob: &str) -> std::result::Result<BirthDate, DateError> {
        match self.config.date_validation {
            DateValidation::Permissive => parse_date(dob),
            DateValidation::Strict => parse_date_strict(dob),
        }
    }

    /// Computes the fiscal code for `person`.
    ///
    /// # Errors
    /// Returns `CodfisError::Date` if the date of birth is rejected. No
    /// partial code is produced.
    pub fn encode(&self, person: &PersonData) -> Result<FiscalCode> {
        let dob = self.parse_dob(&person.dob)?;
        let filler = self.config.filler;

        let mut code = String::with_capacity(FISCAL_CODE_LEN);
        code.push_str(&surname_portion_with(&person.surname, filler));
        code.push_str(&name_portion_with(&person.name, filler));
        code.push_str(&year_portion(&dob));
        code.push(month_portion(&dob));
        code.push_str(&day_portion(&dob, person.gender));

        Ok(FiscalCode::new(code))
    }

    /// Computes codes for many records, one result per record.
    ///
    /// A failing record does not stop the others.
    #[must_use]
    pub fn encode_batch(&self, people: &[PersonData]) -> Vec<Result<FiscalCode>> {
        people.iter().map(|person| self.encode(person)).collect()
    }
}
