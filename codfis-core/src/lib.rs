/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Codfis Core
//!
//! Core types and error definitions for the codfis fiscal code generator.
//!
//! This crate provides the building blocks shared by the other codfis crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Input record**: `PersonData` with its serde wire shape
//! - **Value types**: `Gender`, `BirthDate`
//! - **Output type**: `FiscalCode`
//!
//! ## Plain Components
//!
//! Dates are kept as raw year/month/day integers. No timezone or calendar
//! normalization ever touches them.

pub mod code;
pub mod error;
pub mod person;
pub mod types;

pub use code::{FISCAL_CODE_LEN, FiscalCode};
pub use error::{
    ClassifyError, CodfisError, DateComponent, DateError, ParseGenderError, Result,
};
pub use person::PersonData;
pub use types::{BirthDate, Gender};
