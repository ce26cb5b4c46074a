//! Signal-mask preparation.
//!
//! The supervisor consumes signals synchronously through a signalfd rather
//! than through handlers, so everything catchable is blocked up front.
//! Synchronous fault signals stay unblocked: a fault in the supervisor
//! itself must keep its default disposition.

use nix::sys::signal::{sigprocmask, SigSet, SigmaskHow, Signal};

use crate::error::InitError;

/// Program-error signals left out of the supervisor mask.
const FAULT_SIGNALS: [Signal; 7] = [
    Signal::SIGFPE,
    Signal::SIGILL,
    Signal::SIGSEGV,
    Signal::SIGBUS,
    Signal::SIGABRT,
    Signal::SIGTRAP,
    Signal::SIGSYS,
];

/// The set of signals the supervisor consumes synchronously.
pub fn parent_mask() -> SigSet {
    let mut mask = SigSet::all();
    for sig in FAULT_SIGNALS {
        mask.remove(sig);
    }
    mask
}

/// Install the supervisor mask on the current process.
///
/// Returns `(parent, child)`: the mask just installed, and the mask that was
/// in effect before, which the spawner restores in the child.
pub fn install() -> Result<(SigSet, SigSet), InitError> {
    let parent = parent_mask();
    let mut child = SigSet::empty();
    sigprocmask(SigmaskHow::SIG_SETMASK, Some(&parent), Some(&mut child))
        .map_err(InitError::MaskSetup)?;
    Ok((parent, child))
}
