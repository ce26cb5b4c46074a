//! Descendant reaping.
//!
//! As init, every orphaned descendant reparents to the supervisor. Each call
//! drains all currently-terminated children without blocking, so the process
//! table never accumulates zombies between signals.

use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::error::InitError;

/// Drain all terminated descendants.
///
/// Returns the main child's exit code if it was among the reaped, `None`
/// otherwise. "No children" (ECHILD) is a normal stop condition: the main
/// child and everything else may have been reaped on an earlier call.
pub fn reap(main_child: Pid) -> Result<Option<i32>, InitError> {
    let mut exit_code = None;

    loop {
        match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => {
                log::trace!("No child to reap");
                break;
            }
            Ok(status) => {
                if let Some(pid) = status.pid() {
                    log::debug!("Reaped child with pid {}", pid);
                    if pid == main_child {
                        exit_code = Some(exit_code_for(status)?);
                    }
                }
            }
            Err(Errno::ECHILD) => {
                log::trace!("No child to wait for");
                break;
            }
            Err(errno) => return Err(InitError::Reap(errno)),
        }
    }

    Ok(exit_code)
}

/// Translate the main child's termination status into the supervisor exit
/// code. Signal deaths map to 128 + the signal number, matching shell
/// convention.
fn exit_code_for(status: WaitStatus) -> Result<i32, InitError> {
    match status {
        WaitStatus::Exited(_, code) => {
            log::info!("Main child exited normally with status {}", code);
            Ok(code & 0xff)
        }
        WaitStatus::Signaled(_, signal, _) => {
            log::info!("Main child exited with signal {}", signal);
            Ok(128 + signal as i32)
        }
        status => Err(InitError::UnexpectedStatus(status)),
    }
}
