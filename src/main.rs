//! minit - minimal init for containers
//!
//! Spawns the supervised program, then loops: forward one pending signal,
//! reap terminated descendants, and exit with the child's code once it is
//! gone.

use std::process;

use minit::{cli, logging, supervisor};

fn main() {
    let args = cli::parse();
    logging::init(args.verbose);

    match supervisor::run(&args.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    }
}
