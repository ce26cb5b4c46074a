//! Child spawning.

use std::ffi::{CString, OsString};
use std::os::unix::ffi::OsStrExt;
use std::process;

use nix::sys::signal::{sigprocmask, SigSet, SigmaskHow};
use nix::unistd::{execvp, fork, ForkResult, Pid};

use crate::error::InitError;

/// Fork and exec the user command, restoring `child_mask` in the child
/// before the exec. The program is resolved through PATH.
///
/// If the mask restore or the exec fails, the child exits 1; the parent
/// observes that through the reaper like any other child exit.
pub fn spawn(child_mask: &SigSet, command: &[OsString]) -> Result<Pid, InitError> {
    let argv = to_argv(command)?;

    match unsafe { fork() }.map_err(InitError::Fork)? {
        ForkResult::Parent { child } => {
            log::info!("Spawned {:?} as pid {}", command[0], child);
            Ok(child)
        }
        ForkResult::Child => {
            if let Err(errno) = sigprocmask(SigmaskHow::SIG_SETMASK, Some(child_mask), None) {
                log::error!("Restoring signal mask in child failed: {}", errno);
                process::exit(1);
            }
            let Err(errno) = execvp(&argv[0], &argv);
            log::error!("Executing {:?} failed: {}", command[0], errno);
            process::exit(1);
        }
    }
}

fn to_argv(command: &[OsString]) -> Result<Vec<CString>, InitError> {
    if command.is_empty() {
        return Err(InitError::EmptyCommand);
    }
    command
        .iter()
        .map(|arg| {
            CString::new(arg.as_bytes()).map_err(|_| InitError::InvalidArgument(arg.clone()))
        })
        .collect()
}
