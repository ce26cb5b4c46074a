//! Signal wait and forwarding.
//!
//! One bounded wait per supervisor iteration: poll the signalfd for up to
//! the poll interval, then classify. SIGCHLD is swallowed (the reap drain
//! observes the state change); everything else goes to the main child.

use std::os::fd::AsFd;

use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use nix::sys::signal::{kill, SigSet, Signal};
use nix::sys::signalfd::{SfdFlags, SignalFd};
use nix::unistd::Pid;

use crate::error::InitError;
use crate::supervisor::POLL_INTERVAL_MS;

/// Synchronous receiver for the blocked supervisor-mask signals.
pub struct SignalHandler {
    fd: SignalFd,
}

impl SignalHandler {
    /// Create the signalfd over `mask`.
    ///
    /// The signals in `mask` must already be blocked; the supervisor is the
    /// sole consumer of the queue. The fd is close-on-exec so the child
    /// never inherits it.
    pub fn new(mask: &SigSet) -> Result<Self, InitError> {
        let fd = SignalFd::with_flags(mask, SfdFlags::SFD_NONBLOCK | SfdFlags::SFD_CLOEXEC)
            .map_err(InitError::SignalFd)?;
        Ok(Self { fd })
    }

    /// Wait up to the poll interval for one signal and dispatch it.
    ///
    /// A timeout is a normal outcome: the caller proceeds to reap either
    /// way, which bounds how long a coalesced or missing SIGCHLD can delay
    /// the reaping of a dead descendant.
    pub fn wait_and_forward(&mut self, child: Pid) -> Result<(), InitError> {
        match self.wait_one()? {
            Some(signo) if signo == Signal::SIGCHLD as i32 => {
                log::debug!("Received SIGCHLD");
                Ok(())
            }
            Some(signo) => forward(child, signo),
            None => Ok(()),
        }
    }

    // Returns the pending signal number, or None on timeout.
    fn wait_one(&mut self) -> Result<Option<i32>, InitError> {
        let ready = {
            let mut fds = [PollFd::new(self.fd.as_fd(), PollFlags::POLLIN)];
            poll(&mut fds, PollTimeout::from(POLL_INTERVAL_MS))
        };
        match ready {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            // SIGSTOP/SIGCONT can interrupt the poll with nothing queued;
            // same as a timeout.
            Err(Errno::EINTR) => return Ok(None),
            Err(errno) => return Err(InitError::SignalWait(errno)),
        }
        let info = self.fd.read_signal().map_err(InitError::SignalWait)?;
        Ok(info.map(|si| si.ssi_signo as i32))
    }
}

/// Send `signo` to the main child.
///
/// ESRCH means the child is already gone; the next reap will observe its
/// exit, so delivery failure degrades to a warning.
fn forward(child: Pid, signo: i32) -> Result<(), InitError> {
    let delivery = match Signal::try_from(signo) {
        Ok(sig) => {
            log::debug!("Passing {} to pid {}", sig, child);
            kill(child, sig)
        }
        // Real-time signals have no Signal variant; send the raw number.
        Err(_) => {
            log::debug!("Passing signal {} to pid {}", signo, child);
            Errno::result(unsafe { libc::kill(child.as_raw(), signo) }).map(drop)
        }
    };

    match delivery {
        Ok(()) => Ok(()),
        Err(Errno::ESRCH) => {
            log::warn!("Child was dead when forwarding signal {}", signo);
            Ok(())
        }
        Err(errno) => Err(InitError::Forward {
            signo,
            pid: child.as_raw(),
            errno,
        }),
    }
}
