use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;

use crate::config::{AlphabetSpec, Config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Command {
    /// Numbers to convert, read line by line from stdin when absent
    #[arg()]
    inputs: Vec<String>,

    #[arg(short, long, env = "RADIX_CONV_FROM", default_value = "base10")]
    from: AlphabetSpec,

    #[arg(short, long, env = "RADIX_CONV_TO", default_value = "base16")]
    to: AlphabetSpec,

    /// Also print the value as a signed 64-bit integer
    #[arg(long = "int64", default_value = "false")]
    int64: bool,
}

pub fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    let config = Config::new(&cli.from, &cli.to, cli.int64)?;
    tracing::debug!(from = %cli.from, to = %cli.to, "Starting cli");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.inputs.is_empty() {
        convert_lines(&config, std::io::stdin().lock(), &mut out)?;
    } else {
        for input in &cli.inputs {
            convert_one(&config, input, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Converts one number per line. Lines are passed on as read, since whitespace
/// can be a digit.
fn convert_lines(
    config: &Config,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("read stdin")?;
        convert_one(config, &line, out)?;
    }
    Ok(())
}

fn convert_one(config: &Config, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let num = config
        .from
        .parse(input)
        .with_context(|| format!("parse `{}` as {}", input, config.from))?;

    write!(out, "{}", num.format(&config.to))?;
    if config.int64 {
        match num.to_i64() {
            Some(value) => write!(out, "\t{}", value)?,
            None => write!(out, "\toverflow")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

#[test]
fn test_convert_one() {
    let config = Config::new(
        &AlphabetSpec::Predefined(16),
        &AlphabetSpec::Predefined(10),
        true,
    )
    .unwrap();
    let mut out = Vec::new();
    convert_one(&config, "36c9", &mut out).unwrap();
    convert_one(&config, "ffffffffffffffffff", &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "14025\t14025\n4722366482869645213695\toverflow\n"
    );

    let mut out = Vec::new();
    assert!(convert_one(&config, "36g9", &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_command_args() {
    let args = ["radix_conv", "-f", "base2", "-t", "chars:ab", "101"];
    let cli = Command::try_parse_from(args).unwrap();
    assert_eq!(cli.from, AlphabetSpec::Predefined(2));
    assert_eq!(cli.to, AlphabetSpec::Custom("ab".into()));
    assert_eq!(cli.inputs, vec!["101".to_string()]);
    assert!(!cli.int64);
}

#[test]
fn test_convert_lines_keeps_whitespace_digits() {
    // space is digit zero, so "1 " is binary 10
    let config = Config::new(
        &AlphabetSpec::Custom(" 1".into()),
        &AlphabetSpec::Predefined(10),
        false,
    )
    .unwrap();
    let mut out = Vec::new();
    convert_lines(&config, "1 \n 1\r\n11\n".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\n1\n3\n");

    let mut from_args = Vec::new();
    convert_one(&config, "1 ", &mut from_args).unwrap();
    assert_eq!(String::from_utf8(from_args).unwrap(), "2\n");
}
