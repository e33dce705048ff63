/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Codfis Encoder
//!
//! Deterministic fiscal code generation from personal data.
//!
//! A code is five fixed-width segments concatenated in order:
//!
//! | segment | width | source                                          |
//! |---------|-------|-------------------------------------------------|
//! | surname | 3     | consonants, vowels, filler                      |
//! | name    | 3     | 1st/3rd/4th consonant when more than three      |
//! | year    | 2     | last two digits of the year                     |
//! | month   | 1     | `ABCDEHLMPRST` lookup                           |
//! | day     | 2     | day of birth, plus 40 for women                 |
//!
//! ## Features
//!
//! - **Pure**: no I/O, no shared state, every call is independent
//! - **Allocation-light**: segments live in `ArrayString`, character runs in `SmallVec`
//! - **Configurable**: filler character and strict date validation via [`EncoderConfig`]

pub mod classify;
pub mod config;
pub mod date;
pub mod encoder;
pub mod segment;

pub use classify::{consonants, is_vowel, is_vowel_str, vowels};
pub use config::{DateValidation, EncoderConfig};
pub use date::{day_portion, month_portion, parse_date, parse_date_strict, year_portion};
pub use encoder::{Encoder, fiscal_code};
pub use segment::{name_portion, surname_portion};
