//! Shared plumbing for the generator command-line tools.

pub mod config_file;
pub mod invariants;
pub mod logging;
pub mod snapshot_file;
