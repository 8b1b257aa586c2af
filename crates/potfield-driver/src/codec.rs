//! Text codec: command lines in, reply lines out.
//!
//! Decoding is strict about arity: each command takes exactly the
//! arguments listed in the crate docs, separated by any whitespace.
//! Numbers are rendered in `%g` style with six significant digits.

use std::fmt;
use std::str::FromStr;

use potfield_core::{Command, Reply};
use smallvec::SmallVec;

/// Significant digits used by [`format_g`].
const PRECISION: i32 = 6;

/// Errors from [`parse_command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The first token is not a known command name.
    UnknownCommand {
        /// The unrecognised token.
        name: String,
    },
    /// A required argument is absent.
    MissingArgument {
        /// Command keyword.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// More tokens than the command accepts.
    UnexpectedArgument {
        /// Command keyword.
        command: &'static str,
        /// The first surplus token.
        token: String,
    },
    /// An argument is not a valid number.
    InvalidNumber {
        /// Command keyword.
        command: &'static str,
        /// Name of the argument.
        argument: &'static str,
        /// The offending token.
        token: String,
    },
}

impl ParseError {
    /// `true` if the line named a real command but its arguments were bad.
    pub fn is_malformed_arguments(&self) -> bool {
        !matches!(self, Self::UnknownCommand { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { name } => write!(f, "unknown command {name:?}"),
            Self::MissingArgument { command, argument } => {
                write!(f, "{command}: missing argument {argument}")
            }
            Self::UnexpectedArgument { command, token } => {
                write!(f, "{command}: unexpected argument {token:?}")
            }
            Self::InvalidNumber {
                command,
                argument,
                token,
            } => write!(f, "{command}: {argument} is not a number: {token:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Positional argument cursor over one tokenised line.
struct Args<'a> {
    command: &'static str,
    tokens: std::slice::Iter<'a, &'a str>,
}

impl<'a> Args<'a> {
    fn new(command: &'static str, rest: &'a [&'a str]) -> Self {
        Self {
            command,
            tokens: rest.iter(),
        }
    }

    fn token(&mut self, argument: &'static str) -> Result<&'a str, ParseError> {
        self.tokens
            .next()
            .copied()
            .ok_or(ParseError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn number<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ParseError> {
        let token = self.token(argument)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            command: self.command,
            argument,
            token: token.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(extra) => Err(ParseError::UnexpectedArgument {
                command: self.command,
                token: (*extra).to_string(),
            }),
        }
    }
}

/// Decode one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Examples
///
/// ```
/// use potfield_core::Command;
/// use potfield_driver::parse_command;
///
/// assert_eq!(
///     parse_command("CREATE 5 4").unwrap(),
///     Some(Command::Create { rows: 5, cols: 4 })
/// );
/// assert_eq!(parse_command("   ").unwrap(), None);
/// assert!(parse_command("MOVE 1").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
    let Some((&name, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let (cmd, args) = match name {
        "CREATE" => {
            let mut a = Args::new("CREATE", rest);
            let cmd = Command::Create {
                rows: a.number("N")?,
                cols: a.number("M")?,
            };
            (cmd, a)
        }
        "POINT" => {
            let mut a = Args::new("POINT", rest);
            let cmd = Command::Point {
                tag: a.token("T")?.to_string(),
                x: a.number("X")?,
                y: a.number("Y")?,
            };
            (cmd, a)
        }
        "MOVE" => {
            let mut a = Args::new("MOVE", rest);
            let cmd = Command::Move {
                x: a.number("X")?,
                y: a.number("Y")?,
            };
            (cmd, a)
        }
        "CLEAR" => (Command::Clear, Args::new("CLEAR", rest)),
        "UPDATE" => {
            let mut a = Args::new("UPDATE", rest);
            let cmd = Command::Update {
                gain: a.number("K")?,
            };
            (cmd, a)
        }
        "EXIT" => (Command::Exit, Args::new("EXIT", rest)),
        other => {
            return Err(ParseError::UnknownCommand {
                name: other.to_string(),
            })
        }
    };
    args.finish()?;
    Ok(Some(cmd))
}

/// Render a reply as its output line, or `None` for [`Reply::Exit`].
///
/// ```
/// use potfield_core::{FieldError, Reply, Vector2};
/// use potfield_driver::format_reply;
///
/// assert_eq!(format_reply(&Reply::Success).as_deref(), Some("success"));
/// assert_eq!(
///     format_reply(&Reply::Failure(FieldError::NotConfigured)).as_deref(),
///     Some("failure")
/// );
/// assert_eq!(
///     format_reply(&Reply::Value(Vector2::splat(-0.5))).as_deref(),
///     Some("-0.5 -0.5")
/// );
/// ```
pub fn format_reply(reply: &Reply) -> Option<String> {
    match reply {
        Reply::Success => Some("success".to_string()),
        Reply::Failure(_) => Some("failure".to_string()),
        Reply::Value(v) => Some(format!("{} {}", format_g(v.px), format_g(v.py))),
        Reply::Exit => None,
    }
}

/// Format a number like C's `%g`: six significant digits, trailing
/// zeros removed, scientific notation when the decimal exponent is
/// below -4 or at least 6.
///
/// ```
/// use potfield_driver::format_g;
///
/// assert_eq!(format_g(-1.0), "-1");
/// assert_eq!(format_g(1.0 / 2f64.sqrt()), "0.707107");
/// assert_eq!(format_g(1234567.0), "1.23457e+06");
/// assert_eq!(format_g(0.00001), "1e-05");
/// ```
pub fn format_g(v: f64) -> String {
    if v.is_nan() {
        return if v.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to PRECISION significant digits.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_zeros(mantissa), exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        strip_zeros(&format!("{v:.decimals$}")).to_string()
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // parse_command
    // ---------------------------------------------------------------

    #[test]
    fn parses_every_command() {
        let cases = [
            ("CREATE 5 6", Command::Create { rows: 5, cols: 6 }),
            (
                "POINT G 1 2",
                Command::Point {
                    tag: "G".to_string(),
                    x: 1,
                    y: 2,
                },
            ),
            ("MOVE 3 4", Command::Move { x: 3, y: 4 }),
            ("CLEAR", Command::Clear),
            ("UPDATE 2.5", Command::Update { gain: 2.5 }),
            ("EXIT", Command::Exit),
        ];
        for (line, expected) in cases {
            assert_eq!(parse_command(line).unwrap(), Some(expected), "{line}");
        }
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert_eq!(
            parse_command("\t MOVE   -1\t7  \r").unwrap(),
            Some(Command::Move { x: -1, y: 7 })
        );
    }

    #[test]
    fn keeps_raw_point_tag() {
        assert_eq!(
            parse_command("POINT Q 0 0").unwrap(),
            Some(Command::Point {
                tag: "Q".to_string(),
                x: 0,
                y: 0
            })
        );
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command(" \t ").unwrap(), None);
    }

    #[test]
    fn unknown_command() {
        let err = parse_command("create 5 5").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCommand {
                name: "create".to_string()
            }
        );
        assert!(!err.is_malformed_arguments());
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            parse_command("POINT G 1").unwrap_err(),
            ParseError::MissingArgument {
                command: "POINT",
                argument: "Y"
            }
        );
        assert_eq!(
            parse_command("UPDATE").unwrap_err(),
            ParseError::MissingArgument {
                command: "UPDATE",
                argument: "K"
            }
        );
    }

    #[test]
    fn surplus_argument() {
        let err = parse_command("CLEAR now").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedArgument {
                command: "CLEAR",
                token: "now".to_string()
            }
        );
        assert!(err.is_malformed_arguments());
        assert!(parse_command("MOVE 1 2 3").is_err());
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(
            parse_command("CREATE five 5").unwrap_err(),
            ParseError::InvalidNumber {
                command: "CREATE",
                argument: "N",
                token: "five".to_string()
            }
        );
        assert!(parse_command("MOVE 1.5 2").is_err());
        assert!(parse_command("UPDATE x").is_err());
    }

    #[test]
    fn non_finite_gain_reaches_engine() {
        // Rejected by the engine, not the codec.
        assert!(matches!(
            parse_command("UPDATE inf").unwrap(),
            Some(Command::Update { gain }) if gain.is_infinite()
        ));
    }

    // ---------------------------------------------------------------
    // format_g
    // ---------------------------------------------------------------

    #[test]
    fn format_integers_and_zero() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(-0.0), "-0");
        assert_eq!(format_g(1.0), "1");
        assert_eq!(format_g(-3.0), "-3");
        assert_eq!(format_g(100000.0), "100000");
    }

    #[test]
    fn format_six_significant_digits() {
        assert_eq!(format_g(-1.0 / 2f64.sqrt()), "-0.707107");
        assert_eq!(format_g(1.0 / 3.0), "0.333333");
        assert_eq!(format_g(2.0 / 3.0), "0.666667");
        assert_eq!(format_g(123.456789), "123.457");
        assert_eq!(format_g(0.5), "0.5");
        assert_eq!(format_g(0.0001), "0.0001");
    }

    #[test]
    fn format_scientific() {
        assert_eq!(format_g(1e6), "1e+06");
        assert_eq!(format_g(999999.7), "1e+06");
        assert_eq!(format_g(-2.5e-7), "-2.5e-07");
        assert_eq!(format_g(1.5e100), "1.5e+100");
        assert_eq!(format_g(0.000012345678), "1.23457e-05");
    }

    #[test]
    fn format_non_finite() {
        assert_eq!(format_g(f64::INFINITY), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_g(f64::NAN), "nan");
    }

    #[test]
    fn reply_rendering() {
        assert_eq!(format_reply(&Reply::Exit), None);
        assert_eq!(
            format_reply(&Reply::Value(potfield_core::Vector2::new(1.0, -0.25))).as_deref(),
            Some("1 -0.25")
        );
    }
}
