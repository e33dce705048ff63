/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Consonant/vowel classification.
//!
//! Only the five ASCII vowels count as vowels, in either case. Accented
//! vowels and every other character (spaces and apostrophes included) are
//! classified as consonants.

use codfis_core::error::ClassifyError;
use smallvec::SmallVec;

/// Ordered subsequence of characters taken from a name.
pub type CharSeq = SmallVec<[char; 16]>;

/// Returns true if `c` is one of `a`, `e`, `i`, `o`, `u` in either case.
///
/// # Example
/// ```
/// use codfis_encoder::classify::is_vowel;
///
/// assert!(is_vowel('E'));
/// assert!(!is_vowel('y'));
/// assert!(!is_vowel('è'));
/// ```
#[inline]
#[must_use]
pub const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Classifies a one-character string.
///
/// # Arguments
/// * `s` - A string holding exactly one character
///
/// # Errors
/// Returns `ClassifyError::InvalidArgument` if `s` does not hold exactly one
/// character.
pub fn is_vowel_str(s: &str) -> Result<bool, ClassifyError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(is_vowel(c)),
        _ => Err(ClassifyError::InvalidArgument {
            length: s.chars().count(),
        }),
    }
}

/// Returns the vowels of `text` in their original order.
#[must_use]
pub fn vowels(text: &str) -> CharSeq {
    text.chars().filter(|&c| is_vowel(c)).collect()
}

/// Returns the non-vowels of `text` in their original order.
#[must_use]
pub fn consonants(text: &str) -> CharSeq {
    text.chars().filter(|&c| !is_vowel(c)).collect()
}

/// Splits `text` into `(consonants, vowels)` in a single pass.
#[must_use]
pub fn partition(text: &str) -> (CharSeq, CharSeq) {
    let mut consonants = CharSeq::new();
    let mut vowels = CharSeq::new();
    for c in text.chars() {
        if is_vowel(c) {
            vowels.push(c);
        } else {
            consonants.push(c);
        }
    }
    (consonants, vowels)
}
