/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Codfis
//!
//! Italian-style fiscal code generation for Rust.
//!
//! Codfis derives an 11-character code from a person's surname, name, sex
//! and date of birth: three letters from the surname, three from the name,
//! two year digits, one month letter and two day digits that also encode
//! sex. Birthplace code and check character are not produced, and two people
//! with the same data get the same code.
//!
//! ## Quick Start
//!
//! ```rust
//! use codfis::prelude::*;
//!
//! let person = PersonData::new("Helen", "Yu", Gender::Female, "1/12/1950");
//! let code = fiscal_code(&person)?;
//! assert_eq!(code.as_str(), "YUXHLN50T41");
//!
//! let strict = Encoder::new(EncoderConfig::new().with_strict_dates(true));
//! assert!(strict.encode(&PersonData::new("Helen", "Yu", Gender::Female, "1/13/1950")).is_err());
//! # Ok::<(), codfis::core::CodfisError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Data model and error definitions
//! - [`encoder`]: Classifier, segments, date handling and composition

pub mod core {
    //! Data model and error definitions.
    pub use codfis_core::*;
}

pub mod encoder {
    //! Classifier, segments, date handling and composition.
    pub use codfis_encoder::*;
}

pub use codfis_encoder::fiscal_code;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use codfis_core::{
        BirthDate, ClassifyError, CodfisError, DateComponent, DateError, FISCAL_CODE_LEN,
        FiscalCode, Gender, PersonData, Result,
    };

    // Encoding
    pub use codfis_encoder::segment::DEFAULT_FILLER;
    pub use codfis_encoder::{
        DateValidation, Encoder, EncoderConfig, day_portion, fiscal_code, month_portion,
        name_portion, parse_date, surname_portion, year_portion,
    };
}
