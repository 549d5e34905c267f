//! `rbtree` - interactive red-black tree shell.
//!
//! Usage:
//!   rbtree [--log-level <off|error|warn|info|debug|trace>] [--quiet]
//!
//! Menu choices are read from stdin. The log level falls back to the
//! `RBTREE_LOG` environment variable, then to `warn`. Logs go to stderr.

use rb_tree::cli::{CliConfig, Session, LOG_ENV};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;

fn main() {
    let env_level = std::env::var(LOG_ENV).ok();
    let config = match CliConfig::from_args(std::env::args().skip(1), env_level.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = TermLogger::init(
        config.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    if let Err(e) = session.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
