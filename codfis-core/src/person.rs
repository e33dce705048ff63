/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Input record for fiscal code generation.

use crate::types::Gender;
use serde::{Deserialize, Serialize};

/// Personal data a fiscal code is derived from.
///
/// The wire shape is a flat object with `name`, `surname`, `gender` (`"M"` or
/// `"F"`) and `dob` (`D/M/Y`, `/`-delimited, no leading-zero requirement).
/// Nothing is validated on construction; a malformed `dob` surfaces when the
/// code is computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonData {
    /// First name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Sex tag.
    pub gender: Gender,
    /// Date of birth as `D/M/Y` text.
    pub dob: String,
}

impl PersonData {
    /// Creates a new person record.
    ///
    /// # Arguments
    /// * `name` - First name
    /// * `surname` - Family name
    /// * `gender` - Sex tag
    /// * `dob` - Date of birth, e.g. `"16/1/1928"`
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: Gender,
        dob: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            gender,
            dob: dob.into(),
        }
    }
}
