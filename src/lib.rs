//! minit - a minimal init for containers
//!
//! Runs as the first process of a process namespace and does the two things
//! the kernel expects of init, nothing more:
//! - Forwards the signals it receives to the single child it spawned.
//! - Reaps every descendant that terminates, so zombies never accumulate.
//!
//! The child's exit status becomes minit's own (128 + N for death by signal
//! N), so the supervised program looks unsupervised from the outside.

pub mod cli;
pub mod error;
pub mod logging;
pub mod mask;
pub mod reaper;
pub mod signals;
pub mod spawn;
pub mod supervisor;

pub use error::InitError;
