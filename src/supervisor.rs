//! The supervision loop.
//!
//! Prepare the masks, spawn the child, then a single-threaded event loop:
//! wait up to the poll interval for one signal and forward it, drain
//! terminated descendants, and stop once the main child has been reaped.
//! Forwarding happens before reaping on every iteration so that a forwarded
//! termination signal is observed in the same pass.

use std::ffi::OsString;

use crate::error::InitError;
use crate::signals::SignalHandler;
use crate::{mask, reaper, spawn};

/// Timeout of the per-iteration signal wait, in milliseconds.
///
/// Bounds the latency between a descendant exit and its reaping when no
/// forwardable signal is flowing, e.g. a reparented grandchild exiting
/// while its SIGCHLD was coalesced away.
pub const POLL_INTERVAL_MS: u16 = 1_000;

/// Run the supervisor until the main child has terminated.
///
/// Returns the child's exit code: its exit status if it exited normally,
/// 128 + the signal number if it was killed by a signal.
pub fn run(command: &[OsString]) -> Result<i32, InitError> {
    let (parent_mask, child_mask) = mask::install()?;
    let mut handler = SignalHandler::new(&parent_mask)?;
    let child = spawn::spawn(&child_mask, command)?;

    loop {
        handler.wait_and_forward(child)?;
        if let Some(code) = reaper::reap(child)? {
            log::trace!("Child has exited, exiting");
            return Ok(code);
        }
    }
}
