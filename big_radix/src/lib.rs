//! Big Radix \
//! Numeric strings in any radix, with any digit characters, converted exactly.
//! Values are held as digit sequences rather than machine integers, so their size is
//! bounded only by memory.
//!
//! This crate provides:
//! - [`Alphabet`]: the digit characters of one radix, validated to be unique.
//! - [`Number`]: a value parsed with an alphabet, renderable into any other alphabet.
//! - [`convert`]: one-shot conversion between two alphabets given as strings.
//! - Ready-made alphabets [`BASE2`], [`BASE8`], [`BASE10`], [`BASE16`], [`BASE36`] and
//!   [`BASE62`], built from `0-9`, then `a-z`, then `A-Z`.
//!
//! # Example
//! ```
//! use big_radix::{BASE10, BASE36};
//!
//! let num = BASE10.parse("6353835517599558185862").unwrap();
//! let b36 = num.format(&BASE36);
//! assert_eq!(BASE36.parse(&b36).unwrap().format(&BASE10), "6353835517599558185862");
//! ```

mod alphabet;
mod convert;
mod error;
mod number;
mod radix_cache;
mod radix_constants;

pub use alphabet::Alphabet;
pub use convert::{convert, convert_digits};
pub use error::{Error, Result};
pub use number::Number;
pub use radix_cache::{predefined, BASE10, BASE16, BASE2, BASE36, BASE62, BASE8};
pub use radix_constants::{DIGITS, PREDEFINED_RADICES};

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn it_works() {
        assert_eq!(BASE16.parse("36c9").unwrap().format(&BASE10), "14025");
        assert_eq!(BASE62.parse("10").unwrap().format(&BASE10), "62");
        assert_eq!(BASE10.parse("62").unwrap().format(&BASE62), "10");
        assert_eq!(BASE2.parse("012"), Err(Error::InvalidCharacter('2')));
        assert_eq!(Alphabet::new("aab"), Err(Error::DuplicateCharacter('a')));
    }

    #[test]
    fn test_empty_input_is_zero_everywhere() {
        for &radix in PREDEFINED_RADICES.iter() {
            let source = predefined(radix).unwrap();
            let num = source.parse("").unwrap();
            for &to in PREDEFINED_RADICES.iter() {
                assert_eq!(num.format(predefined(to).unwrap()), "0");
            }
        }
        let letters = Alphabet::new("xyz").unwrap();
        assert_eq!(BASE8.parse("").unwrap().format(&letters), "x");
    }

    #[test]
    fn test_round_trip_base36() {
        let input = "6353835517599558185862";
        let num = BASE36.parse(input).unwrap();
        let dec = num.format(&BASE10);
        assert_eq!(BASE10.parse(&dec).unwrap().format(&BASE36), input);
        assert_eq!(num.format(&BASE36), input);
    }

    #[test]
    fn test_shared_across_threads() {
        let num = BASE36.parse("6353835517599558185862").unwrap();
        let expected = num.format(&BASE10);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| num.format(&BASE10))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
