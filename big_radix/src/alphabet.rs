//! # Alphabet
//! The ordered digit characters of one radix. A character's position is its value,
//! so `"01"` is binary and `"0123456789abcdef"` is hexadecimal.
//!
//! # Example
//! ```
//! use big_radix::Alphabet;
//!
//! let hex = Alphabet::new("0123456789abcdef").unwrap();
//! let num = hex.parse("36c9").unwrap();
//! assert_eq!(num.format(&big_radix::BASE10), "14025");
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::convert::convert_digits;
use crate::radix_constants::DIGITS;
use crate::{Error, Number, Result};

/// An immutable bijection between digit characters and the values `0..radix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    values: HashMap<char, u32>,
}

// Construction
impl Alphabet {
    /// Builds an alphabet from `chars`, where each character's position is its value.
    ///
    /// Fails with [`Error::DuplicateCharacter`] on the first repeated character and
    /// with [`Error::EmptyAlphabet`] when `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        let mut digits = Vec::with_capacity(chars.len());
        let mut values = HashMap::with_capacity(chars.len());

        for c in chars.chars() {
            match values.entry(c) {
                Entry::Occupied(_) => {
                    tracing::debug!(character = ?c, "repeated character in alphabet");
                    return Err(Error::DuplicateCharacter(c));
                }
                Entry::Vacant(slot) => {
                    slot.insert(digits.len() as u32);
                    digits.push(c);
                }
            }
        }

        if digits.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        tracing::trace!(radix = digits.len(), "built alphabet");
        Ok(Alphabet { chars: digits, values })
    }

    /// The first `radix` characters of [`DIGITS`], which are unique by construction.
    pub(crate) fn from_digit_prefix(radix: usize) -> Self {
        let chars = DIGITS[..radix].to_vec();
        let values = chars
            .iter()
            .enumerate()
            .map(|(value, &c)| (c, value as u32))
            .collect();
        Alphabet { chars, values }
    }
}

// Accessors
impl Alphabet {
    pub fn radix(&self) -> usize {
        self.chars.len()
    }

    /// Digit characters in value order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn char_of(&self, value: u32) -> Option<char> {
        self.chars.get(value as usize).copied()
    }

    pub fn value_of(&self, c: char) -> Option<u32> {
        self.values.get(&c).copied()
    }

    /// The character for value zero.
    pub fn zero(&self) -> char {
        self.chars[0]
    }
}

// Parsing
impl Alphabet {
    /// Reads `input` most-significant digit first. Leading zeros are kept in the
    /// digit sequence and the empty string is a valid spelling of zero.
    ///
    /// Stops at the first character outside this alphabet with
    /// [`Error::InvalidCharacter`].
    pub fn parse(&self, input: &str) -> Result<Number<'_>> {
        let digits = input
            .chars()
            .map(|c| self.value_of(c).ok_or(Error::InvalidCharacter(c)))
            .collect::<Result<Vec<u32>>>()
            .map_err(|err| {
                tracing::debug!(%err, radix = self.radix(), "parse failed");
                err
            })?;

        Ok(Number::new(digits, self))
    }

    /// Writes `value` in this alphabet.
    ///
    /// # Panics
    /// If the radix is 1 and `value` is not zero.
    pub fn from_u64(&self, value: u64) -> Number<'_> {
        let words = [(value >> 32) as u32, value as u32];
        let digits = convert_digits(&words, 1 << 32, self.radix() as u64);
        Number::new(digits, self)
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| std::fmt::Write::write_char(f, *c))
    }
}

#[test]
fn test_new() {
    let abc = Alphabet::new("abc").unwrap();
    assert_eq!(abc.radix(), 3);
    assert_eq!(abc.value_of('a'), Some(0));
    assert_eq!(abc.value_of('c'), Some(2));
    assert_eq!(abc.char_of(1), Some('b'));
    assert_eq!(abc.char_of(3), None);
    assert_eq!(abc.zero(), 'a');

    assert_eq!(Alphabet::new("aab"), Err(Error::DuplicateCharacter('a')));
    assert_eq!(Alphabet::new("wagdd"), Err(Error::DuplicateCharacter('d')));
    assert_eq!(Alphabet::new(""), Err(Error::EmptyAlphabet));
}

#[test]
fn test_new_counts_chars_not_bytes() {
    let greek = Alphabet::new("αβγδ").unwrap();
    assert_eq!(greek.radix(), 4);
    assert_eq!(greek.value_of('γ'), Some(2));
    assert_eq!(greek.char_of(3), Some('δ'));
    assert_eq!(greek.to_string(), "αβγδ");
}

#[test]
fn test_single_digit_alphabet() {
    let unary = Alphabet::new("0").unwrap();
    assert_eq!(unary.radix(), 1);
    assert_eq!(unary.parse("000").unwrap().digits(), &[0, 0, 0]);
}

#[test]
fn test_from_str() {
    let oct: Alphabet = "01234567".parse().unwrap();
    assert_eq!(oct.radix(), 8);
    assert!("0120".parse::<Alphabet>().is_err());
}

#[test]
fn test_parse() {
    let bin = Alphabet::new("01").unwrap();
    assert_eq!(bin.parse("0110").unwrap().digits(), &[0, 1, 1, 0]);
    assert_eq!(bin.parse("012").unwrap_err(), Error::InvalidCharacter('2'));
    // the first bad character wins
    assert_eq!(bin.parse("1x2").unwrap_err(), Error::InvalidCharacter('x'));
    // no trimming, no sign
    assert_eq!(bin.parse(" 1").unwrap_err(), Error::InvalidCharacter(' '));
    assert_eq!(bin.parse("-1").unwrap_err(), Error::InvalidCharacter('-'));

    let empty = bin.parse("").unwrap();
    assert!(empty.digits().is_empty());
    assert!(empty.is_zero());
}

#[test]
fn test_from_u64() {
    let dec = Alphabet::new("0123456789").unwrap();
    assert_eq!(dec.from_u64(0).to_string(), "0");
    assert_eq!(dec.from_u64(14025).to_string(), "14025");
    assert_eq!(dec.from_u64(u64::MAX).to_string(), "18446744073709551615");

    let hex = Alphabet::new("0123456789abcdef").unwrap();
    assert_eq!(hex.from_u64(0xdead_beef_0000_0001).to_string(), "deadbeef00000001");
}
