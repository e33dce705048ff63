/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use codfis::prelude::{DEFAULT_FILLER, Encoder, EncoderConfig, Gender};

#[derive(Debug, Parser)]
#[command(
    name = "codfis-cli",
    version,
    about = "Generate Italian-style fiscal codes",
    long_about = "Generate Italian-style fiscal codes from name, surname, sex and date of birth.\n\n\
                  Codes are 11 characters: surname, name, year, month and day/sex segments.\n\
                  Birthplace code and check character are not produced."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the code for a single person.
    Encode(EncodeArgs),

    /// Compute codes for a JSON array of people, one JSON line per record.
    Batch(BatchArgs),

    /// Run the built-in reference scenarios.
    Check,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// First name.
    #[arg(long)]
    pub name: String,

    /// Family name.
    #[arg(long)]
    pub surname: String,

    /// Sex tag: M or F.
    #[arg(long)]
    pub gender: Gender,

    /// Date of birth as D/M/Y, e.g. 16/1/1928.
    #[arg(long)]
    pub dob: String,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSON file holding an array of records (reads stdin when omitted).
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Debug, Args)]
pub struct EncodingArgs {
    /// Reject months outside 1-12, days outside 1-31 and short years.
    #[arg(long)]
    pub strict: bool,

    /// Padding character for short surnames and names.
    #[arg(long, env = "CODFIS_FILLER", default_value_t = DEFAULT_FILLER)]
    pub filler: char,
}

impl EncodingArgs {
    /// Builds the encoder these flags describe.
    pub fn encoder(&self) -> Encoder {
        Encoder::new(
            EncoderConfig::new()
                .with_filler(self.filler)
                .with_strict_dates(self.strict),
        )
    }
}

/// Log output format selected with `--log-format`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable multi-line output.
    Pretty,
    /// Single-line output.
    Compact,
    /// JSON for machine parsing.
    Json,
}
