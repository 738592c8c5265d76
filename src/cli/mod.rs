//! CLI infrastructure for the relearn toolkit
//!
//! This module provides the command-line interface for training a value-table
//! learner, comparing fixed policies, and watching single games.

pub mod commands;
pub mod output;
