/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Subcommand implementations.
//!
//! Every command writes its results to the given writer and returns whether
//! all records succeeded. Personal data is only logged at debug level.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use codfis::prelude::{BirthDate, Encoder, FiscalCode, Gender, PersonData};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::{BatchArgs, EncodeArgs};

/// One line of `batch` output.
#[derive(Debug, Serialize)]
struct BatchLine<'a> {
    input: &'a PersonData,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// A reference scenario for the `check` command.
struct Scenario {
    person: PersonData,
    expected: Option<&'static str>,
}

/// Computes and prints a single code.
///
/// # Errors
/// Returns an error if the date of birth is rejected or output fails.
pub fn run_encode(args: &EncodeArgs, out: &mut impl Write) -> Result<bool> {
    let encoder = args.encoding.encoder();
    let person = PersonData::new(&args.name, &args.surname, args.gender, &args.dob);
    debug!(name = %person.name, surname = %person.surname, dob = %person.dob, "encoding person");

    let code = encoder
        .encode(&person)
        .with_context(|| format!("cannot compute fiscal code for date of birth {:?}", person.dob))?;
    info!("fiscal code generated");
    if let Some(date) = non_calendar_date(&encoder, &person.dob) {
        debug!(%date, "date of birth is not a calendar date");
        warn!("date of birth is not a calendar date; code uses its raw components");
    }

    writeln!(out, "{code}")?;
    Ok(true)
}

/// Computes codes for a JSON array of records.
///
/// # Errors
/// Returns an error if the input cannot be read or is not a JSON array of
/// records. Per-record failures are reported in the output instead.
pub fn run_batch(args: &BatchArgs, out: &mut impl Write) -> Result<bool> {
    let raw = read_input(args.input.as_deref())?;
    let people: Vec<PersonData> =
        serde_json::from_str(&raw).context("batch input must be a JSON array of records")?;
    info!(records = people.len(), "encoding batch");

    let encoder = args.encoding.encoder();
    let results = encoder.encode_batch(&people);
    for (index, person) in people.iter().enumerate() {
        if non_calendar_date(&encoder, &person.dob).is_some() {
            warn!(record = index, "date of birth is not a calendar date");
        }
    }
    write_batch(&people, &results, out)
}

/// Returns the parsed date of birth when it is well formed but does not
/// exist on the calendar (e.g. 30/2/1928). Such dates are still encoded.
fn non_calendar_date(encoder: &Encoder, dob: &str) -> Option<BirthDate> {
    encoder
        .parse_dob(dob)
        .ok()
        .filter(|date| date.to_naive_date().is_none())
}

fn write_batch(
    people: &[PersonData],
    results: &[codfis::prelude::Result<FiscalCode>],
    out: &mut impl Write,
) -> Result<bool> {
    let mut failures = 0usize;
    for (index, (person, result)) in people.iter().zip(results).enumerate() {
        let line = match result {
            Ok(code) => BatchLine {
                input: person,
                code: Some(code.as_str()),
                error: None,
            },
            Err(error) => {
                failures += 1;
                warn!(record = index, %error, "record rejected");
                BatchLine {
                    input: person,
                    code: None,
                    error: Some(error.to_string()),
                }
            }
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }

    if failures > 0 {
        warn!(failures, total = people.len(), "batch finished with rejected records");
    } else {
        info!(total = people.len(), "batch finished");
    }
    Ok(failures == 0)
}

/// Runs the reference scenarios with the default encoder.
///
/// # Errors
/// Returns an error only if writing the report fails.
pub fn run_check(out: &mut impl Write) -> Result<bool> {
    let encoder = Encoder::default();
    let mut passed = 0usize;
    let scenarios = reference_scenarios();

    for scenario in &scenarios {
        let person = &scenario.person;
        let outcome = encoder.encode(person);
        let ok = match (&outcome, scenario.expected) {
            (Ok(code), Some(expected)) => code.as_str() == expected,
            (Err(error), None) => error.is_invalid_format(),
            _ => false,
        };
        let shown = match &outcome {
            Ok(code) => code.to_string(),
            Err(error) => error.to_string(),
        };
        let verdict = if ok { "ok" } else { "FAILED" };
        writeln!(
            out,
            "{verdict:<6} {} {} {} {:<12} -> {shown}",
            person.name, person.surname, person.gender, person.dob
        )?;
        if ok {
            passed += 1;
        }
    }

    writeln!(out, "{passed}/{} scenarios passed", scenarios.len())?;
    Ok(passed == scenarios.len())
}

fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            person: PersonData::new("Matt", "Edabit", Gender::Male, "1/1/1900"),
            expected: Some("DBTMTT00A01"),
        },
        Scenario {
            person: PersonData::new("Helen", "Yu", Gender::Female, "1/12/1950"),
            expected: Some("YUXHLN50T41"),
        },
        Scenario {
            person: PersonData::new("Mickey", "Mouse", Gender::Male, "16/1/1928"),
            expected: Some("MSOMKY28A16"),
        },
        Scenario {
            person: PersonData::new("Matt", "Edabit", Gender::Male, "not-a-date"),
            expected: None,
        },
    ]
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}
