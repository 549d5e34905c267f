//! Interactive menu shell over [`RedBlackTree`].
//!
//! Provides the logic behind the `rbtree` binary:
//! - [`CliConfig`] - flags and environment for the binary
//! - [`Command`] - the five menu actions
//! - [`Session`] - prompt / read / dispatch loop over any reader and writer

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{info, LevelFilter};
use thiserror::Error;

use crate::tree::RedBlackTree;
use crate::types::Key;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV: &str = "RBTREE_LOG";

const MENU: &str = "Red-Black Tree Operations:\n\
1. Insert\n\
2. Delete\n\
3. Search\n\
4. Print Tree\n\
5. Exit\n";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid option: {0}")]
    InvalidConfig(String),
}

// ── Config ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: LevelFilter,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
        }
    }
}

impl CliConfig {
    /// Parse `--log-level <level>` and `--quiet` from `args` (program name
    /// excluded), falling back to `env_level` for the level.
    pub fn from_args<I, S>(args: I, env_level: Option<&str>) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        if let Some(level) = env_level {
            config.log_level = parse_level(level)?;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--quiet" | "-q" => config.log_level = LevelFilter::Off,
                "--log-level" => {
                    let level = args.next().ok_or_else(|| {
                        CliError::InvalidConfig("--log-level needs a value".to_string())
                    })?;
                    config.log_level = parse_level(level.as_ref())?;
                }
                other => return Err(CliError::InvalidConfig(other.to_string())),
            }
        }
        Ok(config)
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, CliError> {
    s.trim()
        .parse()
        .map_err(|_| CliError::InvalidConfig(format!("unknown log level {s:?}")))
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert,
    Delete,
    Search,
    Print,
    Exit,
}

impl Command {
    /// Map a menu choice (`"1"` … `"5"`) to its command.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::Insert),
            "2" => Some(Command::Delete),
            "3" => Some(Command::Search),
            "4" => Some(Command::Print),
            "5" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Parse a key typed at a prompt.
pub fn parse_key(input: &str) -> Result<Key, CliError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| CliError::InvalidNumber(input.to_string()))
}

// ── Session ───────────────────────────────────────────────────────────────

/// One interactive run: owns the tree and talks over `input` / `output`.
///
/// Answers are whitespace-separated tokens, so `1 10` on one line picks
/// Insert and supplies the key.
pub struct Session<R, W> {
    tree: RedBlackTree,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            tree: RedBlackTree::new(),
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn tree(&self) -> &RedBlackTree {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            let Some(command) = Command::parse(&choice) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            match self.dispatch(command) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(CliError::UnexpectedEof) => return Ok(()),
                Err(err @ CliError::InvalidNumber(_)) => writeln!(self.output, "{err}")?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Execute one command; `Ok(false)` ends the session.
    pub fn dispatch(&mut self, command: Command) -> Result<bool, CliError> {
        match command {
            Command::Insert => {
                let key = self.read_key("Enter value to insert: ")?;
                info!("insert {key}");
                self.tree.insert(key);
                writeln!(self.output, "Value inserted.")?;
            }
            Command::Delete => {
                let key = self.read_key("Enter value to delete: ")?;
                info!("delete {key}");
                self.tree.delete(key);
                writeln!(self.output, "Value deleted.")?;
            }
            Command::Search => {
                let key = self.read_key("Enter value to search: ")?;
                if self.tree.contains(key) {
                    writeln!(self.output, "Value found.")?;
                } else {
                    writeln!(self.output, "Value not found.")?;
                }
            }
            Command::Print => {
                writeln!(self.output, "Red-Black Tree:")?;
                self.output.write_all(self.tree.print_tree().as_bytes())?;
            }
            Command::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn read_key(&mut self, prompt: &str) -> Result<Key, CliError> {
        let line = self.prompt(prompt)?.ok_or(CliError::UnexpectedEof)?;
        parse_key(&line)
    }

    /// Print `text`, then take the next input token; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
