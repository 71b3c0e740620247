//! Shared plumbing for the cave generation binaries.

pub mod invariants;
pub mod logging;
pub mod output;
