//! # Number
//! A non-negative integer held as digit values in the radix of the alphabet it was
//! parsed with. Values are unbounded, and formatting never touches the stored digits,
//! so one number can be rendered into any number of alphabets.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::convert::{convert_digits, format};
use crate::{Alphabet, BASE10};

macro_rules! skip_leading_zero {
    ($digits: expr) => {
        {
            let first = $digits.iter().position(|d| *d != 0).unwrap_or($digits.len());
            &$digits[first..]
        }
    };
}

/// Digit values, most-significant first, each below the radix of `alphabet`.
#[derive(Debug, Clone)]
pub struct Number<'a> {
    digits: Vec<u32>,
    alphabet: &'a Alphabet,
}

impl<'a> Number<'a> {
    /// Callers guarantee every digit is below `alphabet.radix()`.
    pub(crate) fn new(digits: Vec<u32>, alphabet: &'a Alphabet) -> Self {
        debug_assert!(digits.iter().all(|&d| (d as usize) < alphabet.radix()));
        Number { digits, alphabet }
    }

    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// True for the empty digit sequence and for any run of zero digits.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Renders this number with the digits of `destination`.
    ///
    /// # Panics
    /// If `destination` has radix 1 and this number is not zero.
    pub fn format(&self, destination: &Alphabet) -> String {
        format(self, destination)
    }
}

// Narrowing
impl Number<'_> {
    /// The value as an `i64`, or `None` once it passes `i64::MAX`.
    pub fn to_i64(&self) -> Option<i64> {
        self.format(&BASE10).parse().ok()
    }

    /// The value as a `u64`, or `None` once it passes `u64::MAX`.
    pub fn to_u64(&self) -> Option<u64> {
        self.format(&BASE10).parse().ok()
    }
}

impl Display for Number<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(self.alphabet))
    }
}

// Comparison by value, regardless of alphabet or leading zeros
impl Number<'_> {
    /// Digit values of this number in `radix`, without leading zeros.
    fn canonical_digits(&self, radix: usize) -> Vec<u32> {
        if radix == self.radix() {
            skip_leading_zero!(self.digits).to_vec()
        } else {
            convert_digits(&self.digits, self.radix() as u64, radix as u64)
        }
    }

    fn compare_value(&self, other: &Number<'_>) -> Ordering {
        // the wider radix can hold both values, and radix 1 only ever holds zero
        let radix = self.radix().max(other.radix());
        let a = self.canonical_digits(radix);
        let b = other.canonical_digits(radix);
        let a = skip_leading_zero!(a);
        let b = skip_leading_zero!(b);
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl PartialEq for Number<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_value(other).is_eq()
    }
}
impl Eq for Number<'_> {}

impl PartialOrd for Number<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_value(other)
    }
}

#[test]
fn test_format_leaves_digits_alone() {
    let num = crate::BASE36.parse("6353835517599558185862").unwrap();
    let before = num.digits().to_vec();

    let first = num.format(&BASE10);
    let second = num.format(&BASE10);
    let hex = num.format(&crate::BASE16);

    assert_eq!(first, second);
    assert_eq!(num.digits(), &before[..]);
    assert_eq!(crate::BASE16.parse(&hex).unwrap().format(&BASE10), first);
}

#[test]
fn test_display() {
    let num = crate::BASE16.parse("00ff").unwrap();
    assert_eq!(num.to_string(), "ff");
    assert_eq!(num.alphabet(), &*crate::BASE16);
    assert_eq!(num.radix(), 16);
    // rendering in its own alphabet is the same as Display
    assert_eq!(num.format(num.alphabet()), num.to_string());
    assert_eq!(crate::BASE16.parse("").unwrap().to_string(), "0");
}

#[test]
fn test_to_i64() {
    assert_eq!(crate::BASE16.parse("36c9").unwrap().to_i64(), Some(14025));
    assert_eq!(BASE10.parse("").unwrap().to_i64(), Some(0));
    assert_eq!(BASE10.parse("9223372036854775807").unwrap().to_i64(), Some(i64::MAX));
    assert_eq!(BASE10.parse("9223372036854775808").unwrap().to_i64(), None);
    assert_eq!(crate::BASE36.parse("6353835517599558185862").unwrap().to_i64(), None);
}

#[test]
fn test_to_u64() {
    assert_eq!(BASE10.parse("18446744073709551615").unwrap().to_u64(), Some(u64::MAX));
    assert_eq!(BASE10.parse("18446744073709551616").unwrap().to_u64(), None);
    assert_eq!(crate::BASE2.parse("1111").unwrap().to_u64(), Some(15));
}

#[test]
fn test_compare() {
    let hex = crate::BASE16.parse("36c9").unwrap();
    let dec = BASE10.parse("0014025").unwrap();
    assert_eq!(hex, dec);
    assert!(BASE10.parse("14024").unwrap() < hex);
    assert!(crate::BASE2.parse("100000000000000").unwrap() > dec);

    let empty = crate::BASE62.parse("").unwrap();
    let zeros = crate::BASE2.parse("000").unwrap();
    assert_eq!(empty, zeros);

    let unary = Alphabet::new("0").unwrap();
    let unary_zero = unary.parse("00").unwrap();
    assert_eq!(unary_zero, empty);
    assert!(unary_zero < crate::BASE2.parse("1").unwrap());
}
