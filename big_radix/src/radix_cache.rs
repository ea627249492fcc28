use lazy_static::*;

use crate::Alphabet;

lazy_static! {
    /// `01`
    pub static ref BASE2: Alphabet = Alphabet::from_digit_prefix(2);
    /// `01234567`
    pub static ref BASE8: Alphabet = Alphabet::from_digit_prefix(8);
    /// `0123456789`
    pub static ref BASE10: Alphabet = Alphabet::from_digit_prefix(10);
    /// `0123456789abcdef`
    pub static ref BASE16: Alphabet = Alphabet::from_digit_prefix(16);
    /// `0-9` then `a-z`
    pub static ref BASE36: Alphabet = Alphabet::from_digit_prefix(36);
    /// `0-9`, `a-z`, then `A-Z`
    pub static ref BASE62: Alphabet = Alphabet::from_digit_prefix(62);
}

/// Looks up a predefined alphabet by its radix.
pub fn predefined(radix: usize) -> Option<&'static Alphabet> {
    let alphabet: &'static Alphabet = match radix {
        2 => &*BASE2,
        8 => &*BASE8,
        10 => &*BASE10,
        16 => &*BASE16,
        36 => &*BASE36,
        62 => &*BASE62,
        _ => return None,
    };
    Some(alphabet)
}

#[test]
fn test_predefined_radices() {
    for radix in crate::PREDEFINED_RADICES {
        let alphabet = predefined(radix).unwrap();
        assert_eq!(alphabet.radix(), radix);
        assert_eq!(alphabet.chars(), &crate::DIGITS[..radix]);
    }
    assert!(predefined(7).is_none());
    assert!(predefined(64).is_none());
}

#[test]
fn test_predefined_matches_constructed() {
    let chars = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let built = Alphabet::new(chars).unwrap();
    assert_eq!(*BASE62, built);
    assert_eq!(BASE16.to_string(), "0123456789abcdef");
}
