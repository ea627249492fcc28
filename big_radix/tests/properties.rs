//! Property-based tests for parsing and radix conversion.
//!
//! Values that fit in a `u128` are checked against native arithmetic; longer inputs
//! are checked through round trips.

use big_radix::{Alphabet, DIGITS};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

/// Distinct characters from the shared digit table, shuffled, radix 2..=62.
fn alphabet_chars() -> impl Strategy<Value = String> {
    proptest::sample::subsequence(DIGITS.to_vec(), 2..=62)
        .prop_shuffle()
        .prop_map(|chars| chars.into_iter().collect())
}

/// An alphabet plus a string written in it, possibly with leading zeros.
fn alphabet_and_input(max_len: usize) -> impl Strategy<Value = (String, String)> {
    alphabet_chars().prop_flat_map(move |chars| {
        let radix = chars.chars().count();
        let digits = proptest::collection::vec(0..radix, 0..=max_len);
        (Just(chars), digits)
    })
    .prop_map(|(chars, digits)| {
        let table: Vec<char> = chars.chars().collect();
        let input = digits.into_iter().map(|d| table[d]).collect();
        (chars, input)
    })
}

/// Canonical spelling: leading zero digits removed, zero kept as one digit.
fn trim_leading_zeros(input: &str, zero: char) -> String {
    let trimmed = input.trim_start_matches(zero);
    if trimmed.is_empty() {
        zero.to_string()
    } else {
        trimmed.to_string()
    }
}

fn to_native(input: &str, alphabet: &Alphabet) -> u128 {
    let radix = alphabet.radix() as u128;
    input
        .chars()
        .fold(0u128, |acc, c| acc * radix + alphabet.value_of(c).unwrap() as u128)
}

fn from_native(mut value: u128, alphabet: &Alphabet) -> String {
    if value == 0 {
        return alphabet.zero().to_string();
    }
    let radix = alphabet.radix() as u128;
    let mut out = Vec::new();
    while value > 0 {
        out.push(alphabet.char_of((value % radix) as u32).unwrap());
        value /= radix;
    }
    out.into_iter().rev().collect()
}

// =============================================================================
// Round trip and zero
// =============================================================================

proptest! {
    /// format(parse(s)) in the same alphabet is s without leading zeros
    #[test]
    fn prop_round_trip((chars, input) in alphabet_and_input(64)) {
        let alphabet = Alphabet::new(&chars).unwrap();
        let num = alphabet.parse(&input).unwrap();
        prop_assert_eq!(num.format(&alphabet), trim_leading_zeros(&input, alphabet.zero()));
    }

    /// going through a second alphabet and back loses nothing
    #[test]
    fn prop_round_trip_through_other(
        (chars, input) in alphabet_and_input(64),
        other in alphabet_chars(),
    ) {
        let alphabet = Alphabet::new(&chars).unwrap();
        let other = Alphabet::new(&other).unwrap();
        let there = alphabet.parse(&input).unwrap().format(&other);
        let back = other.parse(&there).unwrap().format(&alphabet);
        prop_assert_eq!(back, trim_leading_zeros(&input, alphabet.zero()));
    }

    /// zero comes out as exactly one zero digit of the destination
    #[test]
    fn prop_zero_is_one_digit(from in alphabet_chars(), to in alphabet_chars(), len in 0usize..8) {
        let from = Alphabet::new(&from).unwrap();
        let to = Alphabet::new(&to).unwrap();
        let zeros: String = std::iter::repeat(from.zero()).take(len).collect();
        prop_assert_eq!(from.parse(&zeros).unwrap().format(&to), to.zero().to_string());
    }

    /// formatting never changes the number or the next result
    #[test]
    fn prop_format_is_repeatable(
        (chars, input) in alphabet_and_input(64),
        a in alphabet_chars(),
        b in alphabet_chars(),
    ) {
        let alphabet = Alphabet::new(&chars).unwrap();
        let a = Alphabet::new(&a).unwrap();
        let b = Alphabet::new(&b).unwrap();
        let num = alphabet.parse(&input).unwrap();
        let digits = num.digits().to_vec();

        let first = num.format(&a);
        let _ = num.format(&b);
        let again = num.format(&a);

        prop_assert_eq!(first, again);
        prop_assert_eq!(num.digits(), &digits[..]);
    }
}

// =============================================================================
// Agreement with native arithmetic
// =============================================================================

proptest! {
    /// values below 2^64 convert the same way u128 division does
    #[test]
    fn prop_matches_native(
        value in any::<u64>(),
        from in alphabet_chars(),
        to in alphabet_chars(),
    ) {
        let from = Alphabet::new(&from).unwrap();
        let to = Alphabet::new(&to).unwrap();
        let input = from_native(value as u128, &from);
        let num = from.parse(&input).unwrap();
        prop_assert_eq!(num.format(&to), from_native(value as u128, &to));
        prop_assert_eq!(num.to_u64(), Some(value));
        prop_assert_eq!(num.to_i64(), i64::try_from(value).ok());
    }

    /// from_u64 spells the same value as native division
    #[test]
    fn prop_from_u64(value in any::<u64>(), chars in alphabet_chars()) {
        let alphabet = Alphabet::new(&chars).unwrap();
        let expected = from_native(value as u128, &alphabet);
        prop_assert_eq!(alphabet.from_u64(value).to_string(), expected);
    }

    /// ordering agrees with native ordering across alphabets
    #[test]
    fn prop_ordering(
        x in any::<u64>(),
        y in any::<u64>(),
        a in alphabet_chars(),
        b in alphabet_chars(),
    ) {
        let a = Alphabet::new(&a).unwrap();
        let b = Alphabet::new(&b).unwrap();
        let nx = a.from_u64(x);
        let ny = b.from_u64(y);
        prop_assert_eq!(nx.cmp(&ny), x.cmp(&y));
    }
}

/// Every digit string of length 0..=5 over every radix pair up to 5.
#[test]
fn sweep_small_radices() {
    for from_radix in 1..=5usize {
        let from = Alphabet::new(&DIGITS[..from_radix].iter().collect::<String>()).unwrap();
        for to_radix in 2..=5usize {
            let to = Alphabet::new(&DIGITS[..to_radix].iter().collect::<String>()).unwrap();
            for len in 0..=5u32 {
                for n in 0..from_radix.pow(len) {
                    // spell n with exactly `len` digits, keeping leading zeros
                    let mut rest = n;
                    let mut input = vec![from.zero(); len as usize];
                    for slot in input.iter_mut().rev() {
                        *slot = from.char_of((rest % from_radix) as u32).unwrap();
                        rest /= from_radix;
                    }
                    let input: String = input.into_iter().collect();

                    let value = to_native(&input, &from);
                    let got = from.parse(&input).unwrap().format(&to);
                    let expected = from_native(value, &to);
                    let context = format!("{input} from radix {from_radix} to {to_radix}");
                    assert_eq!(got, expected, "{context}");
                }
            }
        }
    }
}

/// Inputs far past 128 bits still round trip between the predefined alphabets.
#[test]
fn long_inputs_round_trip() {
    let input: String = "6353835517599558185862".repeat(20);
    for radix in big_radix::PREDEFINED_RADICES {
        let from = big_radix::predefined(radix).unwrap();
        let num = big_radix::BASE10.parse(&input).unwrap();
        let there = num.format(from);
        assert_eq!(from.parse(&there).unwrap().format(&big_radix::BASE10), input);
    }
}
