//! Command session: feeds decoded lines to a field engine.
//!
//! [`Session`] owns one [`FieldEngine`] for its whole lifetime. Lines are
//! processed strictly in order, each to completion, and every reply is
//! written before the next line is read.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use potfield_core::{Command, Reply};
use potfield_engine::FieldEngine;

use crate::codec::{format_reply, parse_command, ParseError};

/// What happened to a single input line.
#[derive(Clone, Debug, PartialEq)]
pub enum LineOutcome {
    /// Nothing but whitespace.
    Blank,
    /// Unknown command name; no output is produced.
    Skipped(ParseError),
    /// Known command with bad arguments; rendered as `failure`.
    Malformed(ParseError),
    /// The command was applied to the engine.
    Applied(Reply),
}

impl LineOutcome {
    /// The output line for this outcome, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Blank | Self::Skipped(_) => None,
            Self::Malformed(_) => Some("failure".to_string()),
            Self::Applied(reply) => format_reply(reply),
        }
    }
}

/// Counters accumulated over a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines read, including blank and skipped ones.
    pub lines: u64,
    /// Commands applied to the engine (excluding `EXIT`).
    pub commands: u64,
    /// Commands that rendered `success` or a value.
    pub successes: u64,
    /// Engine failures plus malformed lines.
    pub failures: u64,
    /// Successful `MOVE` queries.
    pub queries: u64,
    /// Lines ignored because the command name was unknown.
    pub skipped: u64,
}

/// A driver session over one engine.
///
/// # Examples
///
/// ```
/// use potfield_driver::Session;
///
/// let input = "CREATE 5 5\nPOINT G 0 0\nMOVE 1 0\nEXIT\nMOVE 2 0\n";
/// let mut out = Vec::new();
/// let stats = Session::new().run(input.as_bytes(), &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "success\nsuccess\n-1 -1\n");
/// assert_eq!(stats.queries, 1);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    engine: FieldEngine,
    stats: SessionStats,
    exited: bool,
}

impl Session {
    /// Start a session over a fresh, unconfigured engine.
    pub fn new() -> Self {
        Self::with_engine(FieldEngine::new())
    }

    /// Start a session over an existing engine.
    pub fn with_engine(engine: FieldEngine) -> Self {
        Self {
            engine,
            stats: SessionStats::default(),
            exited: false,
        }
    }

    /// The engine driven by this session.
    pub fn engine(&self) -> &FieldEngine {
        &self.engine
    }

    /// Counters so far.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Whether `EXIT` has been seen.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Apply one decoded command to the engine.
    pub fn apply(&mut self, cmd: &Command) -> Reply {
        let reply: Reply = match cmd {
            Command::Create { rows, cols } => self.engine.configure(*rows, *cols).into(),
            Command::Point { tag, x, y } => self.engine.register_tagged(tag, *x, *y).into(),
            Command::Move { x, y } => self.engine.query_at(*x, *y).into(),
            Command::Clear => self.engine.clear().into(),
            Command::Update { gain } => self.engine.set_gain(*gain).into(),
            Command::Exit => {
                self.exited = true;
                return Reply::Exit;
            }
        };

        self.stats.commands += 1;
        if reply.is_ok() {
            self.stats.successes += 1;
            if cmd.is_mutating() {
                log::debug!("{} applied", cmd.name());
            } else {
                self.stats.queries += 1;
            }
        } else if let Reply::Failure(e) = &reply {
            self.stats.failures += 1;
            log::debug!("{} failed: {e}", cmd.name());
        }
        reply
    }

    /// Decode and apply one input line.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        self.stats.lines += 1;
        match parse_command(line) {
            Ok(None) => LineOutcome::Blank,
            Ok(Some(cmd)) => LineOutcome::Applied(self.apply(&cmd)),
            Err(e) if e.is_malformed_arguments() => {
                log::warn!("line {}: {e}", self.stats.lines);
                self.stats.failures += 1;
                LineOutcome::Malformed(e)
            }
            Err(e) => {
                log::warn!("line {}: {e}, skipping", self.stats.lines);
                self.stats.skipped += 1;
                LineOutcome::Skipped(e)
            }
        }
    }

    /// Process `reader` line by line until `EXIT` or end of input,
    /// writing one output line per rendered outcome.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so such
    /// a line decodes as an unknown command or bad argument rather than
    /// ending the session.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from reading or writing. Command failures
    /// are not errors; they render as `failure`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> io::Result<SessionStats> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                log::warn!("line {}: invalid UTF-8", self.stats.lines + 1);
            }
            let outcome = self.handle_line(&line);
            if let Some(out) = outcome.render() {
                writeln!(writer, "{out}")?;
            }
            if self.exited {
                break;
            }
        }
        writer.flush()?;
        log::info!(
            "session done: {} commands, {} failures, {} skipped",
            self.stats.commands,
            self.stats.failures,
            self.stats.skipped
        );
        Ok(self.stats.clone())
    }
}
