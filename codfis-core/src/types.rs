/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core value types for fiscal code generation.
//!
//! This module provides the small value types the encoder works with:
//! - [`Gender`]: the two-valued sex tag encoded into the day segment
//! - [`BirthDate`]: plain year/month/day components of a parsed date of birth

use crate::error::ParseGenderError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex of the person, as encoded in the day segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male. The day of birth is written as-is.
    #[serde(rename = "M", alias = "male", alias = "Male")]
    Male,
    /// Female. The day of birth is shifted by 40.
    #[serde(rename = "F", alias = "female", alias = "Female")]
    Female,
}

impl Gender {
    /// Creates a Gender from its single-character tag.
    ///
    /// # Arguments
    /// * `c` - `M` or `F`, in either case
    ///
    /// # Returns
    /// `Some(Gender)` if the character is a known tag, `None` otherwise.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'M' | 'm' => Some(Self::Male),
            'F' | 'f' => Some(Self::Female),
            _ => None,
        }
    }

    /// Returns the single-character tag.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("male") {
            return Ok(Self::Male);
        }
        if tag.eq_ignore_ascii_case("female") {
            return Ok(Self::Female);
        }
        let mut chars = tag.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| ParseGenderError(s.to_string())),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// A parsed date of birth.
///
/// Holds the raw numeric components exactly as written. No calendar
/// normalization is applied, so a day of 45 stays 45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    year: u32,
    /// One-based month number.
    month: u32,
    day: u32,
    /// Digits the year was written with, leading zeros included.
    year_digits: usize,
}

impl BirthDate {
    /// Creates a birth date from its components.
    ///
    /// # Arguments
    /// * `year` - The full year
    /// * `month` - One-based month number (1 = January)
    /// * `day` - Day of month
    #[must_use]
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            year_digits: decimal_digits(year),
        }
    }

    /// Overrides the number of digits the year was written with.
    #[must_use]
    pub const fn with_year_digits(mut self, digits: usize) -> Self {
        self.year_digits = digits;
        self
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(self) -> u32 {
        self.year
    }

    /// Returns the one-based month number.
    #[inline]
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the zero-based month index in `0..12`.
    ///
    /// Months outside 1-12 wrap around: 13 maps to January, 0 to December.
    #[inline]
    #[must_use]
    pub const fn month0(self) -> usize {
        ((self.month % 12 + 11) % 12) as usize
    }

    /// Returns the day of month.
    #[inline]
    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }

    /// Returns how many digits the year was written with.
    #[inline]
    #[must_use]
    pub const fn year_digits(self) -> usize {
        self.year_digits
    }

    /// Converts to a chrono `NaiveDate`.
    ///
    /// # Returns
    /// `None` if the components do not form a real calendar date.
    #[must_use]
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        // Negative years have no D/M/Y spelling; clamp them to zero.
        let year = u32::try_from(date.year()).unwrap_or(0);
        Self::new(year, date.month(), date.day())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

const fn decimal_digits(mut value: u32) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_char() {
        assert_eq!(Gender::from_char('M'), Some(Gender::Male));
        assert_eq!(Gender::from_char('f'), Some(Gender::Female));
        assert_eq!(Gender::from_char('X'), None);
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" F ".parse::<Gender>(), Ok(Gender::Female));
        assert!("MF".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "M");
        assert_eq!(Gender::Female.to_string(), "F");
    }

    #[test]
    fn test_gender_serde_tags() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"M\"");
        let g: Gender = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(g, Gender::Female);
        let g: Gender = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(g, Gender::Male);
    }

    #[test]
    fn test_birth_date_components() {
        let date = BirthDate::new(1950, 12, 1);
        assert_eq!(date.year(), 1950);
        assert_eq!(date.month(), 12);
        assert_eq!(date.month0(), 11);
        assert_eq!(date.day(), 1);
        assert_eq!(date.year_digits(), 4);
    }

    #[test]
    fn test_birth_date_month0_wraps() {
        assert_eq!(BirthDate::new(2000, 1, 1).month0(), 0);
        assert_eq!(BirthDate::new(2000, 13, 1).month0(), 0);
        assert_eq!(BirthDate::new(2000, 0, 1).month0(), 11);
        assert_eq!(BirthDate::new(2000, u32::MAX, 1).month0(), 2);
    }

    #[test]
    fn test_birth_date_year_digits() {
        assert_eq!(BirthDate::new(5, 1, 1).year_digits(), 1);
        assert_eq!(BirthDate::new(50, 1, 1).year_digits(), 2);
        assert_eq!(BirthDate::new(50, 1, 1).with_year_digits(4).year_digits(), 4);
    }

    #[test]
    fn test_birth_date_naive_date() {
        let date = BirthDate::new(1928, 1, 16);
        let naive = date.to_naive_date().unwrap();
        assert_eq!(BirthDate::from(naive), date);
        assert!(BirthDate::new(1928, 2, 30).to_naive_date().is_none());
        assert!(BirthDate::new(1928, 13, 1).to_naive_date().is_none());
    }

    #[test]
    fn test_birth_date_display() {
        assert_eq!(BirthDate::new(1900, 1, 1).to_string(), "1/1/1900");
    }
}
