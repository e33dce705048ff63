/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The generated fiscal code value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in characters of a code built from well-formed input.
///
/// 3 (surname) + 3 (name) + 2 (year) + 1 (month) + 2 (day and sex).
pub const FISCAL_CODE_LEN: usize = 11;

/// A generated fiscal code.
///
/// Birthplace code and check character are not part of this format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FiscalCode(String);

impl FiscalCode {
    /// Wraps an already assembled code.
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the code in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the code is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the code has the standard eleven-character shape.
    #[must_use]
    pub fn is_standard_length(&self) -> bool {
        self.len() == FISCAL_CODE_LEN
    }

    /// Consumes the code and returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for FiscalCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<FiscalCode> for String {
    fn from(code: FiscalCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for FiscalCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FiscalCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FiscalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_code_accessors() {
        let code = FiscalCode::new("DBTMTT00A01");
        assert_eq!(code.as_str(), "DBTMTT00A01");
        assert_eq!(code.len(), FISCAL_CODE_LEN);
        assert!(code.is_standard_length());
        assert!(!code.is_empty());
        assert_eq!(code, "DBTMTT00A01");
    }

    #[test]
    fn test_fiscal_code_nonstandard_length() {
        let code = FiscalCode::new("DBTMTT00A100");
        assert!(!code.is_standard_length());
    }

    #[test]
    fn test_fiscal_code_serde_transparent() {
        let code = FiscalCode::new("YUXHLN50T41");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"YUXHLN50T41\"");
    }

    #[test]
    fn test_fiscal_code_display() {
        let code = FiscalCode::new("MSOMKY28A16");
        assert_eq!(code.to_string(), "MSOMKY28A16");
        assert_eq!(String::from(code), "MSOMKY28A16");
    }
}
