//! Subcommands of the `relearn` binary

pub mod compare;
pub mod play;
pub mod train;
