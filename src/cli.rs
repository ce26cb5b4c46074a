//! Command-line surface.
//!
//! `minit [OPTIONS] PROGRAM [ARGS...]` - everything after the program name
//! is handed to the child untouched, so option-like child arguments pass
//! through, and `--` works as the conventional separator.

use std::ffi::OsString;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " - git.", env!("MINIT_GIT_COMMIT"));

#[derive(Parser, Debug)]
#[command(name = "minit")]
#[command(version = VERSION)]
#[command(about = "Execute a program under the supervision of a minimal init process")]
#[command(help_template = "\
{name} (version {version})
{about}

{usage-heading} {usage}

{all-args}
")]
pub struct Args {
    /// Generate more verbose output. Repeat up to 4 times.
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Program to supervise, followed by its arguments.
    #[arg(value_name = "PROGRAM", required = true, trailing_var_arg = true)]
    pub command: Vec<OsString>,
}

/// Parse the command line.
///
/// `-h` prints the banner to stdout and exits 0; any invalid invocation
/// prints to stderr and exits 1.
pub fn parse() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // clap routes help to stdout and errors to stderr.
            let _ = err.print();
            process::exit(code);
        }
    }
}
