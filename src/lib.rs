//! Value-table reinforcement learning for Tic-Tac-Toe
//!
//! This crate provides:
//! - A base-3 position encoding and a game engine for two policies
//! - Fixed-strategy opponents (top-left, center-corners, block-attack, random)
//! - A TD(0) value-table learner with curiosity-driven exploration
//! - Match, training and reporting pipelines behind the `relearn` binary

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod policies;
pub mod ports;
pub mod tictactoe;
pub mod vtable;

pub use error::{Error, Result};
