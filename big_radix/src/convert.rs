//! # Radix conversion
//! Repeated schoolbook long division. Each pass divides the working digits (in the
//! source radix) by the destination radix, keeps the quotient in place and yields one
//! destination digit as the remainder, least significant first.
//!
//! Every intermediate value is below `source_radix * destination_radix`, and radices
//! are bounded by the count of Unicode scalar values, so `u64` never overflows.

use crate::{Alphabet, Error, Number, Result};

/// Re-expresses `digits` (most-significant first, each below `from_radix`) in `to_radix`.
///
/// The result is canonical: no leading zeros, and zero (including the empty
/// sequence) comes back as `[0]`. `digits` itself is never modified.
///
/// # Panics
/// If `to_radix` is 1 and the value is not zero, since radix 1 has no digit for it.
pub fn convert_digits(digits: &[u32], from_radix: u64, to_radix: u64) -> Vec<u32> {
    debug_assert!(to_radix > 0, "radix must be positive");
    if to_radix == 1 {
        if digits.iter().any(|&d| d != 0) {
            panic!("cannot represent a non-zero value in radix 1");
        }
        return vec![0];
    }

    // private working copy, the quotient of each pass overwrites its prefix
    let mut work = digits.to_vec();
    let mut places = work.len();
    let mut out: Vec<u32> = Vec::with_capacity(places + 1);
    let mut passes = 0usize;

    while places > 0 {
        let mut remainder: u64 = 0;
        let mut place = 0;
        for i in 0..places {
            let dividend = remainder * from_radix + work[i] as u64;
            let quotient = dividend / to_radix;
            remainder = dividend % to_radix;
            // a zero ahead of the first written digit would be a leading zero,
            // dropping it is what shrinks `places` towards zero
            if quotient == 0 && place == 0 {
                continue;
            }
            work[place] = quotient as u32;
            place += 1;
        }
        places = place;
        out.push(remainder as u32);
        passes += 1;
    }

    if out.is_empty() {
        out.push(0);
    }
    out.reverse();

    tracing::trace!(
        from_radix,
        to_radix,
        input_len = digits.len(),
        output_len = out.len(),
        passes,
        "converted digits"
    );
    out
}

/// Renders `number` with the digit characters of `destination`.
///
/// # Panics
/// If `destination` has radix 1 and `number` is not zero.
pub fn format(number: &Number<'_>, destination: &Alphabet) -> String {
    let from_radix = number.radix() as u64;
    let digits = convert_digits(number.digits(), from_radix, destination.radix() as u64);
    let chars = destination.chars();
    digits.into_iter().map(|d| chars[d as usize]).collect()
}

/// Parses `input` with the digits `from_chars` and writes it with the digits `to_chars`.
///
/// ```
/// let dec = big_radix::convert("36c9", "0123456789abcdef", "0123456789").unwrap();
/// assert_eq!(dec, "14025");
/// ```
///
/// Fails with [`Error::NonZeroInRadixOne`] when `to_chars` is a single character and
/// `input` is not zero.
pub fn convert(input: &str, from_chars: &str, to_chars: &str) -> Result<String> {
    let from = Alphabet::new(from_chars)?;
    let to = Alphabet::new(to_chars)?;
    let number = from.parse(input)?;
    if to.radix() == 1 && !number.is_zero() {
        return Err(Error::NonZeroInRadixOne);
    }
    Ok(number.format(&to))
}

#[test]
fn test_convert_digits() {
    // hex 36c9 -> decimal 14025
    assert_eq!(convert_digits(&[3, 6, 12, 9], 16, 10), vec![1, 4, 0, 2, 5]);
    // decimal 255 -> hex ff
    assert_eq!(convert_digits(&[2, 5, 5], 10, 16), vec![15, 15]);
    // same radix trims leading zeros
    assert_eq!(convert_digits(&[0, 0, 7], 10, 10), vec![7]);
    assert_eq!(convert_digits(&[1, 0, 5], 10, 10), vec![1, 0, 5]);
}

#[test]
fn test_convert_digits_into_wider_radix() {
    // binary 101 -> decimal 5, where the quotient of the first pass starts with zeros
    assert_eq!(convert_digits(&[1, 0, 1], 2, 10), vec![5]);
    assert_eq!(convert_digits(&[1, 1, 1, 1, 1, 1, 1, 1], 2, 10), vec![2, 5, 5]);
    assert_eq!(convert_digits(&[1, 0], 62, 10), vec![6, 2]);
}

#[test]
fn test_convert_digits_zero() {
    assert_eq!(convert_digits(&[], 10, 16), vec![0]);
    assert_eq!(convert_digits(&[0], 2, 62), vec![0]);
    assert_eq!(convert_digits(&[0, 0, 0], 36, 2), vec![0]);
    assert_eq!(convert_digits(&[0, 0], 1, 10), vec![0]);
    assert_eq!(convert_digits(&[0, 0], 10, 1), vec![0]);
}

#[test]
#[should_panic(expected = "radix 1")]
fn test_convert_digits_non_zero_into_radix_one() {
    convert_digits(&[5], 10, 1);
}

#[test]
fn test_convert_digits_leaves_input_alone() {
    let digits = vec![6, 3, 5, 3, 8, 3, 5, 5, 1, 7];
    let first = convert_digits(&digits, 10, 36);
    let second = convert_digits(&digits, 10, 36);
    assert_eq!(first, second);
    assert_eq!(digits, vec![6, 3, 5, 3, 8, 3, 5, 5, 1, 7]);
}

#[test]
fn test_format() {
    let num = crate::BASE62.parse("10").unwrap();
    assert_eq!(format(&num, &crate::BASE10), "62");

    let dna = Alphabet::new("ACGT").unwrap();
    let num = crate::BASE10.parse("27").unwrap();
    assert_eq!(format(&num, &dna), "CGT");
    assert_eq!(format(&dna.parse("").unwrap(), &crate::BASE2), "0");
}

#[test]
fn test_convert() {
    assert_eq!(convert("36c9", "0123456789abcdef", "0123456789").unwrap(), "14025");

    let chars36 = "0123456789abcdefghijklmnopqrstuvwxyz";
    let dec = convert("6353835517599558185862", chars36, &chars36[..10]).unwrap();
    assert_eq!(convert(&dec, &chars36[..10], chars36).unwrap(), "6353835517599558185862");

    assert_eq!(convert("1", "aab", "01"), Err(Error::DuplicateCharacter('a')));
    assert_eq!(convert("1", "01", "0120"), Err(Error::DuplicateCharacter('0')));
    assert_eq!(convert("012", "01", "0123"), Err(Error::InvalidCharacter('2')));
    assert_eq!(convert("", "01", "xyz").unwrap(), "x");
}

#[test]
fn test_convert_into_radix_one() {
    assert_eq!(convert("5", "0123456789", "0"), Err(Error::NonZeroInRadixOne));
    assert_eq!(convert("1", "01", "z"), Err(Error::NonZeroInRadixOne));
    assert_eq!(convert("000", "0123456789", "0").unwrap(), "0");
    assert_eq!(convert("", "01", "z").unwrap(), "z");
    // the source alphabet is still checked first
    assert_eq!(convert("5", "00", "0"), Err(Error::DuplicateCharacter('0')));
}
