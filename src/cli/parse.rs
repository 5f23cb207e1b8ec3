use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-x" | "--exclude-similar" => flags.exclude_similar = true,
            "-l" | "--length" => {
                let value = value_for(args, &mut i)?;
                flags.length = Some(parse_number(value)?);
            }
            "-n" | "--number" => {
                let value = value_for(args, &mut i)?;
                flags.number = Some(parse_number(value)?);
            }
            "--rate" => {
                flags.rate = Some(value_for(args, &mut i)?.to_string());
            }
            "-o" | "--output" => {
                // Path is optional; the next flag is never taken as one
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(String::new());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_for<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn parse_number(s: &str) -> Result<usize, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn class_and_length_flags() {
        let flags = parse(&args(&["-l", "20", "--no-special", "-x", "--no-digits"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert!(flags.no_special && flags.no_digits && flags.exclude_similar);
        assert!(!flags.no_upper && !flags.no_lower);
        assert!(flags.has_generation_args());
    }

    #[test]
    fn output_path_is_optional() {
        let flags = parse(&args(&["-o", "vault.txt", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("vault.txt"));
        assert!(flags.quiet);

        let flags = parse(&args(&["--output", "-n", "3"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some(""));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn rate_takes_any_string() {
        let flags = parse(&args(&["--rate", "-dash-first-"])).unwrap();
        assert_eq!(flags.rate.as_deref(), Some("-dash-first-"));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["-l", "ten"])),
            Err(ParseError::InvalidNumber("ten".into()))
        );
        assert_eq!(
            parse(&args(&["-l", "-3"])),
            Err(ParseError::InvalidNumber("-3".into()))
        );
        assert_eq!(
            parse(&args(&["--length"])),
            Err(ParseError::MissingValue("--length".into()))
        );
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
    }
}
