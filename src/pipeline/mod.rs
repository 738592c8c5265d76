//! Match and training pipeline
//!
//! This module provides:
//! - Running matches of many games between two policies
//! - Training a value-table learner against a fixed opponent
//! - Observers that report on matches as they run

pub mod matches;
pub mod observers;
pub mod training;

pub use matches::{MatchResult, MatchRunner, run_match};
pub use observers::{
    GameRecord, JsonlObserver, LogObserver, MetricsObserver, MetricsSummary, ProgressObserver,
};
pub use training::{RoundReport, TrainingConfig, TrainingReport, TrainingSession};
