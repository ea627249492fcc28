use thiserror::Error;

/// Failures raised while building an [`Alphabet`](crate::Alphabet) or parsing with one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("duplicate character {0:?} in alphabet")]
    DuplicateCharacter(char),
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("alphabet has no digit characters")]
    EmptyAlphabet,
    /// A radix-1 alphabet only has a digit for zero.
    #[error("a non-zero value has no digits in radix 1")]
    NonZeroInRadixOne,
}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn test_error_display() {
    assert_eq!(Error::DuplicateCharacter('d').to_string(), "duplicate character 'd' in alphabet");
    assert_eq!(Error::InvalidCharacter('2').to_string(), "invalid character '2'");
    assert_eq!(Error::EmptyAlphabet.to_string(), "alphabet has no digit characters");
    assert_eq!(Error::NonZeroInRadixOne.to_string(), "a non-zero value has no digits in radix 1");
}
