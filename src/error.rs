//! Fatal errors of the supervision loop.
//!
//! Transient conditions (a signal-wait timeout, an interrupted poll, a
//! forwarding target that already exited, "no children" from the reaper) are
//! absorbed where they occur and never appear here. Anything that does is
//! grounds for exiting.

use std::ffi::OsString;

use nix::errno::Errno;
use nix::sys::wait::WaitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    /// Installing the supervisor signal mask failed at startup.
    #[error("setting signal mask failed: {0}")]
    MaskSetup(#[source] Errno),

    /// The child command was empty.
    #[error("no program to execute")]
    EmptyCommand,

    /// A child argument could not be turned into a C string.
    #[error("invalid program argument {0:?}")]
    InvalidArgument(OsString),

    #[error("creating signalfd failed: {0}")]
    SignalFd(#[source] Errno),

    #[error("fork failed: {0}")]
    Fork(#[source] Errno),

    /// The timed signal wait failed with something other than a timeout or
    /// an interruption.
    #[error("unexpected error while waiting for signals: {0}")]
    SignalWait(#[source] Errno),

    /// Forwarding failed while the target still existed.
    #[error("unexpected error forwarding signal {signo} to pid {pid}: {errno}")]
    Forward {
        signo: i32,
        pid: i32,
        #[source]
        errno: Errno,
    },

    #[error("error while waiting for pids: {0}")]
    Reap(#[source] Errno),

    /// The main child terminated some way other than exiting or being killed
    /// by a signal; there is no meaningful exit code to propagate.
    #[error("main child terminated with an unrecognized status: {0:?}")]
    UnexpectedStatus(WaitStatus),
}
