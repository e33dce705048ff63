/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Surname and name segments.
//!
//! Each segment is three uppercase characters: consonants first, then
//! vowels, then the filler character until the width is reached.

use crate::classify::{CharSeq, partition};
use arrayvec::ArrayString;
use smallvec::smallvec;
use std::iter;

/// Width of the surname and name segments in characters.
pub const SEGMENT_LEN: usize = 3;

/// Filler character used to pad short segments.
pub const DEFAULT_FILLER: char = 'x';

/// A three-character segment. Sized for any three UTF-8 characters.
pub type Segment = ArrayString<{ SEGMENT_LEN * 4 }>;

/// Computes the surname segment with the default filler.
///
/// # Example
/// ```
/// use codfis_encoder::segment::surname_portion;
///
/// assert_eq!(surname_portion("Edabit").as_str(), "DBT");
/// assert_eq!(surname_portion("Yu").as_str(), "YUX");
/// ```
#[inline]
#[must_use]
pub fn surname_portion(surname: &str) -> Segment {
    surname_portion_with(surname, DEFAULT_FILLER)
}

/// Computes the surname segment, padding with `filler`.
#[must_use]
pub fn surname_portion_with(surname: &str, filler: char) -> Segment {
    let (consonants, vowels) = partition(surname);
    assemble(consonants.into_iter().chain(vowels), filler)
}

/// Computes the name segment with the default filler.
///
/// Names with more than three consonants skip the second one.
///
/// # Example
/// ```
/// use codfis_encoder::segment::name_portion;
///
/// assert_eq!(name_portion("Mickey").as_str(), "MKY");
/// assert_eq!(name_portion("Matt").as_str(), "MTT");
/// ```
#[inline]
#[must_use]
pub fn name_portion(name: &str) -> Segment {
    name_portion_with(name, DEFAULT_FILLER)
}

/// Computes the name segment, padding with `filler`.
#[must_use]
pub fn name_portion_with(name: &str, filler: char) -> Segment {
    let (consonants, vowels) = partition(name);
    let picked: CharSeq = if consonants.len() > SEGMENT_LEN {
        smallvec![consonants[0], consonants[2], consonants[3]]
    } else {
        consonants
    };
    assemble(picked.into_iter().chain(vowels), filler)
}

fn assemble(chars: impl Iterator<Item = char>, filler: char) -> Segment {
    let mut segment = Segment::new();
    for c in chars.chain(iter::repeat(filler)).take(SEGMENT_LEN) {
        segment.push(uppercase(c));
    }
    segment
}

/// One character in, one character out, so the width never changes.
#[inline]
fn uppercase(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
