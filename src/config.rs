use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use big_radix::Alphabet;

/// How an alphabet is named on the command line: `base16`, `16`, or `chars:<digits>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetSpec {
    Predefined(usize),
    Custom(String),
}

impl FromStr for AlphabetSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(chars) = s.strip_prefix("chars:") {
            return Ok(AlphabetSpec::Custom(chars.to_string()));
        }
        let digits = s.strip_prefix("base").unwrap_or(s);
        match digits.parse::<usize>() {
            Ok(radix) if big_radix::PREDEFINED_RADICES.contains(&radix) => {
                Ok(AlphabetSpec::Predefined(radix))
            }
            _ => Err(format!(
                "unknown alphabet `{}`, expected one of base2, base8, base10, base16, base36, \
                 base62 or chars:<digits>",
                s
            )),
        }
    }
}

impl Display for AlphabetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetSpec::Predefined(radix) => write!(f, "base{}", radix),
            AlphabetSpec::Custom(chars) => write!(f, "chars:{}", chars),
        }
    }
}

impl AlphabetSpec {
    pub fn resolve(&self) -> anyhow::Result<Alphabet> {
        match self {
            AlphabetSpec::Predefined(radix) => big_radix::predefined(*radix)
                .cloned()
                .with_context(|| format!("no predefined alphabet for radix {}", radix)),
            AlphabetSpec::Custom(chars) => {
                Alphabet::new(chars).with_context(|| format!("invalid alphabet `{}`", chars))
            }
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug)]
pub struct Config {
    pub from: Alphabet,
    pub to: Alphabet,
    pub int64: bool,
}

impl Config {
    pub fn new(from: &AlphabetSpec, to: &AlphabetSpec, int64: bool) -> anyhow::Result<Self> {
        let from = from.resolve().context("resolve source alphabet")?;
        let to = to.resolve().context("resolve destination alphabet")?;
        if to.radix() < 2 {
            anyhow::bail!("destination alphabet `{}` needs at least two digits", to);
        }
        Ok(Config { from, to, int64 })
    }
}

#[test]
fn test_parse_alphabet_name() {
    assert_eq!("base16".parse::<AlphabetSpec>(), Ok(AlphabetSpec::Predefined(16)));
    assert_eq!("62".parse::<AlphabetSpec>(), Ok(AlphabetSpec::Predefined(62)));
    assert_eq!("chars:ACGT".parse::<AlphabetSpec>(), Ok(AlphabetSpec::Custom("ACGT".into())));
    assert!("base7".parse::<AlphabetSpec>().is_err());
    assert!("hex".parse::<AlphabetSpec>().is_err());
    assert_eq!(AlphabetSpec::Custom("01".into()).to_string(), "chars:01");
}

#[test]
fn test_config() {
    let hex = AlphabetSpec::Predefined(16);
    let dec = AlphabetSpec::Predefined(10);
    let config = Config::new(&hex, &AlphabetSpec::Custom("xyz".into()), false).unwrap();
    assert_eq!(config.from.radix(), 16);
    assert_eq!(config.to.radix(), 3);

    assert!(Config::new(&AlphabetSpec::Custom("aab".into()), &dec, false).is_err());
    assert!(Config::new(&dec, &AlphabetSpec::Custom("0".into()), false).is_err());
    assert!(Config::new(&dec, &AlphabetSpec::Custom("".into()), false).is_err());
}
