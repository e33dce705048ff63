/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Date of birth parsing and the year, month and day segments.
//!
//! Dates are written `D/M/Y` with unpadded or padded numeric components.
//! The permissive parser picks the first `D/M/Y` run anywhere in the text;
//! [`parse_date_strict`] requires the whole text to be the date and also
//! checks component ranges.

use codfis_core::error::{DateComponent, DateError};
use codfis_core::types::{BirthDate, Gender};
use memchr::memchr_iter;
use std::ops::Range;

/// Separator between date components.
pub const DATE_SEPARATOR: u8 = b'/';

/// Month letters, indexed by zero-based month (January = `A`, December = `T`).
pub const MONTH_CODES: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Added to the day of birth for women.
pub const FEMALE_DAY_OFFSET: u32 = 40;

/// Minimum number of year digits accepted by the strict parser.
pub const STRICT_YEAR_DIGITS: usize = 4;

/// Byte ranges of a `digits/digits/digits` run inside the input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DateMatch {
    day: Range<usize>,
    month: Range<usize>,
    year: Range<usize>,
}

impl DateMatch {
    fn span(&self) -> Range<usize> {
        self.day.start..self.year.end
    }
}

/// Parses the first `D/M/Y` run in `text` without range validation.
///
/// Text before and after the date is ignored, so `"born 16/1/1928"` parses.
/// Each component is a run of ASCII digits; the year takes every digit that
/// follows the second separator.
///
/// # Arguments
/// * `text` - The date text, e.g. `"16/1/1928"` or `"01/12/1950"`
///
/// # Errors
/// Returns `DateError::InvalidFormat` if no `D/M/Y` run exists or a
/// component does not fit in a `u32`.
///
/// # Example
/// ```
/// use codfis_encoder::date::parse_date;
///
/// let date = parse_date("16/1/1928").unwrap();
/// assert_eq!((date.day(), date.month(), date.year()), (16, 1, 1928));
/// assert_eq!(parse_date("born 16/1/1928").unwrap(), date);
/// assert!(parse_date("not-a-date").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<BirthDate, DateError> {
    let found = find_date(text.as_bytes()).ok_or_else(|| invalid_format(text))?;
    build_date(text, &found)
}

/// Parses a `D/M/Y` date that makes up the whole text and validates its
/// component ranges.
///
/// Surrounding whitespace is ignored. Accepts months 1-12, days 1-31 and
/// years written with at least four digits. Days are not checked against
/// the length of the month.
///
/// # Errors
/// Returns `DateError::InvalidFormat` for malformed text or text around the
/// date, `DateError::OutOfRange` for a month or day outside its range and
/// `DateError::ShortYear` for years with fewer than four digits.
pub fn parse_date_strict(text: &str) -> Result<BirthDate, DateError> {
    let trimmed = text.trim();
    let found = find_date(trimmed.as_bytes())
        .filter(|found| found.span() == (0..trimmed.len()))
        .ok_or_else(|| invalid_format(text))?;
    validate_strict(build_date(trimmed, &found).map_err(|_| invalid_format(text))?)
}

/// Applies the strict range checks to an already parsed date.
///
/// # Errors
/// See [`parse_date_strict`].
pub fn validate_strict(date: BirthDate) -> Result<BirthDate, DateError> {
    if !(1..=12).contains(&date.month()) {
        return Err(DateError::OutOfRange {
            component: DateComponent::Month,
            value: date.month(),
        });
    }
    if !(1..=31).contains(&date.day()) {
        return Err(DateError::OutOfRange {
            component: DateComponent::Day,
            value: date.day(),
        });
    }
    if date.year_digits() < STRICT_YEAR_DIGITS {
        return Err(DateError::ShortYear {
            digits: date.year_digits(),
        });
    }
    Ok(date)
}

/// Returns the third and fourth digits of the year.
///
/// Years of four or more digits yield digits 3-4 as written without leading
/// zeros (`12345` gives `"34"`). Shorter years yield the value modulo 100,
/// zero-padded.
///
/// # Example
/// ```
/// use codfis_core::BirthDate;
/// use codfis_encoder::date::year_portion;
///
/// assert_eq!(year_portion(&BirthDate::new(1900, 1, 1)), "00");
/// assert_eq!(year_portion(&BirthDate::new(1950, 1, 1)), "50");
/// assert_eq!(year_portion(&BirthDate::new(12345, 1, 1)), "34");
/// ```
#[must_use]
pub fn year_portion(date: &BirthDate) -> String {
    let year = date.year();
    let digits = year.checked_ilog10().map_or(1, |log| log + 1);
    let leading = if digits > 4 {
        year / 10u32.pow(digits - 4)
    } else {
        year
    };
    let mut out = String::with_capacity(2);
    push_padded(&mut out, u64::from(leading % 100));
    out
}

/// Returns the month letter.
#[inline]
#[must_use]
pub const fn month_portion(date: &BirthDate) -> char {
    MONTH_CODES[date.month0()]
}

/// Returns the day segment, which also encodes sex.
///
/// Men get the day zero-padded to two digits; women get the day plus 40.
#[must_use]
pub fn day_portion(date: &BirthDate, gender: Gender) -> String {
    let mut out = String::with_capacity(2);
    match gender {
        Gender::Male => push_padded(&mut out, u64::from(date.day())),
        Gender::Female => {
            let shifted = u64::from(date.day()) + u64::from(FEMALE_DAY_OFFSET);
            out.push_str(itoa::Buffer::new().format(shifted));
        }
    }
    out
}

/// Appends `value` in decimal, left-padded with a zero to two digits.
fn push_padded(out: &mut String, value: u64) {
    if value < 10 {
        out.push('0');
    }
    out.push_str(itoa::Buffer::new().format(value));
}

/// Finds the leftmost `digits/digits/digits` run in `bytes`.
fn find_date(bytes: &[u8]) -> Option<DateMatch> {
    memchr_iter(DATE_SEPARATOR, bytes).find_map(|sep| {
        let day_start = bytes[..sep]
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |pos| pos + 1);
        let month_start = sep + 1;
        let month_end = digit_run_end(bytes, month_start);
        let year_start = month_end + 1;
        let year_end = digit_run_end(bytes, year_start);

        let matched = day_start < sep
            && month_start < month_end
            && bytes.get(month_end) == Some(&DATE_SEPARATOR)
            && year_start < year_end;
        matched.then(|| DateMatch {
            day: day_start..sep,
            month: month_start..month_end,
            year: year_start..year_end,
        })
    })
}

/// Index one past the digit run starting at `start`.
fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let start = start.min(bytes.len());
    start
        + bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
}

fn build_date(text: &str, found: &DateMatch) -> Result<BirthDate, DateError> {
    let component = |range: &Range<usize>| -> Result<u32, DateError> {
        text[range.clone()].parse().map_err(|_| invalid_format(text))
    };
    let day = component(&found.day)?;
    let month = component(&found.month)?;
    let year = component(&found.year)?;
    Ok(BirthDate::new(year, month, day).with_year_digits(found.year.len()))
}

fn invalid_format(text: &str) -> DateError {
    DateError::InvalidFormat {
        input: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_unpadded() {
        let date = parse_date("1/1/1900").unwrap();
        assert_eq!(date, BirthDate::new(1900, 1, 1));
    }

    #[test]
    fn test_parse_date_padded() {
        let date = parse_date("01/12/1950").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (1, 12, 1950));
        assert_eq!(date.year_digits(), 4);
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        let date = parse_date("  16/1/1928\n").unwrap();
        assert_eq!(date, BirthDate::new(1928, 1, 16));
    }

    #[test]
    fn test_parse_date_keeps_year_digits() {
        let date = parse_date("1/1/0050").unwrap();
        assert_eq!(date.year(), 50);
        assert_eq!(date.year_digits(), 4);
        assert_eq!(parse_date("1/1/50").unwrap().year_digits(), 2);
    }

    #[test]
    fn test_parse_date_invalid_format() {
        for text in [
            "not-a-date",
            "",
            "1/1",
            "//",
            "1//1900",
            "a/1/1900",
            "1/-1/1900",
            "1.1.1900",
            "1/1/99999999999",
        ] {
            assert_eq!(
                parse_date(text),
                Err(DateError::InvalidFormat {
                    input: text.to_string()
                }),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_date_embedded_in_text() {
        let expected = BirthDate::new(1928, 1, 16);
        assert_eq!(parse_date("born 16/1/1928"), Ok(expected));
        assert_eq!(parse_date("16/1/1928 (approx)"), Ok(expected));
        assert_eq!(parse_date("dob:16/1/1928."), Ok(expected));

        let date = parse_date("1/1/19 00").unwrap();
        assert_eq!((date.year(), date.year_digits()), (19, 2));
        assert_eq!(parse_date("1/1/1900/1"), Ok(BirthDate::new(1900, 1, 1)));
        assert_eq!(parse_date("a/1/2/3/4"), Ok(BirthDate::new(3, 2, 1)));
        assert_eq!(parse_date("x/ 7/8/1999"), Ok(BirthDate::new(1999, 8, 7)));
    }

    #[test]
    fn test_parse_date_strict_rejects_surrounding_text() {
        for text in ["born 16/1/1928", "16/1/1928 (approx)", "1/1/1900/1", "1/1/19 00"] {
            assert_eq!(
                parse_date_strict(text),
                Err(DateError::InvalidFormat {
                    input: text.to_string()
                }),
                "input {text:?}"
            );
        }
        assert_eq!(
            parse_date_strict("  16/1/1928\n"),
            Ok(BirthDate::new(1928, 1, 16))
        );
    }

    #[test]
    fn test_parse_date_permissive_ranges() {
        let date = parse_date("45/20/1900").unwrap();
        assert_eq!((date.day(), date.month()), (45, 20));
        assert!(parse_date("0/0/0").is_ok());
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(
            parse_date_strict("16/1/1928"),
            Ok(BirthDate::new(1928, 1, 16))
        );
        assert_eq!(
            parse_date_strict("1/13/1928"),
            Err(DateError::OutOfRange {
                component: DateComponent::Month,
                value: 13
            })
        );
        assert_eq!(
            parse_date_strict("32/1/1928"),
            Err(DateError::OutOfRange {
                component: DateComponent::Day,
                value: 32
            })
        );
        assert_eq!(
            parse_date_strict("0/1/1928"),
            Err(DateError::OutOfRange {
                component: DateComponent::Day,
                value: 0
            })
        );
        assert_eq!(
            parse_date_strict("1/1/50"),
            Err(DateError::ShortYear { digits: 2 })
        );
        assert!(matches!(
            parse_date_strict("not-a-date"),
            Err(DateError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_year_portion() {
        assert_eq!(year_portion(&BirthDate::new(1900, 1, 1)), "00");
        assert_eq!(year_portion(&BirthDate::new(1928, 1, 1)), "28");
        assert_eq!(year_portion(&BirthDate::new(2005, 1, 1)), "05");
        assert_eq!(year_portion(&BirthDate::new(7, 1, 1)), "07");
    }

    #[test]
    fn test_year_portion_long_years() {
        assert_eq!(year_portion(&BirthDate::new(12345, 1, 1)), "34");
        assert_eq!(year_portion(&BirthDate::new(123456, 1, 1)), "34");
        assert_eq!(year_portion(&BirthDate::new(10_000, 1, 1)), "00");
        assert_eq!(year_portion(&parse_date("1/1/12345").unwrap()), "34");
    }

    #[test]
    fn test_month_portion_all_months() {
        let expected = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];
        for (month, letter) in (1..=12).zip(expected) {
            let date = BirthDate::new(2000, month, 1);
            assert_eq!(month_portion(&date), letter, "month {month}");
        }
    }

    #[test]
    fn test_month_portion_out_of_range_wraps() {
        assert_eq!(month_portion(&BirthDate::new(2000, 13, 1)), 'A');
        assert_eq!(month_portion(&BirthDate::new(2000, 0, 1)), 'T');
    }

    #[test]
    fn test_day_portion_male() {
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 5), Gender::Male), "05");
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 23), Gender::Male), "23");
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 1), Gender::Male), "01");
    }

    #[test]
    fn test_day_portion_female() {
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 5), Gender::Female), "45");
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 23), Gender::Female), "63");
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 1), Gender::Female), "41");
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 31), Gender::Female), "71");
    }

    #[test]
    fn test_day_portion_unrealistic_day() {
        assert_eq!(day_portion(&BirthDate::new(2000, 1, 99), Gender::Male), "99");
        assert_eq!(
            day_portion(&BirthDate::new(2000, 1, u32::MAX), Gender::Female),
            "4294967335"
        );
    }
}
