//! Observers for match runs
//!
//! Observers allow composable reporting during a match without coupling the
//! runner to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::matches::MatchResult;
use crate::{
    Result,
    ports::MatchObserver,
    tictactoe::{GameLog, GameOutcome},
};

/// Progress bar observer - Shows match progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: MatchResult,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: MatchResult::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "X:{} O:{} D:{}",
            self.tally.x_wins, self.tally.o_wins, self.tally.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.tally = MatchResult::default();
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, log: &GameLog) -> Result<()> {
        self.tally.record(log.outcome());
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_match_end(&mut self, _result: &MatchResult) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Log observer - Reports games and the final tally through `log`
pub struct LogObserver {
    label: String,
}

impl LogObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl MatchObserver for LogObserver {
    fn on_game_end(&mut self, game_num: usize, log: &GameLog) -> Result<()> {
        debug!(
            "[{}] game {game_num}: {:?} {:?}",
            self.label,
            log.outcome(),
            log.values()
        );
        Ok(())
    }

    fn on_match_end(&mut self, result: &MatchResult) -> Result<()> {
        info!(
            "[{}] {} games: X {:.2}, O {:.2}, draw {:.2}",
            self.label,
            result.games,
            result.x_win_rate(),
            result.o_win_rate(),
            result.draw_rate()
        );
        Ok(())
    }
}

/// Metrics observer - Tracks outcome counts and game lengths
pub struct MetricsObserver {
    tally: MatchResult,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            tally: MatchResult::default(),
            move_counts: Vec::new(),
        }
    }

    /// Get average game length in moves
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            result: self.tally,
            shortest_game: self.move_counts.iter().copied().min().unwrap_or(0),
            longest_game: self.move_counts.iter().copied().max().unwrap_or(0),
            avg_game_length: self.avg_game_length(),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of match metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub result: MatchResult,
    pub shortest_game: usize,
    pub longest_game: usize,
    pub avg_game_length: f64,
}

impl MatchObserver for MetricsObserver {
    fn on_game_end(&mut self, _game_num: usize, log: &GameLog) -> Result<()> {
        self.tally.record(log.outcome());
        self.move_counts.push(log.len() - 1);
        Ok(())
    }
}

/// Record of one game as written by [`JsonlObserver`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_num: usize,
    pub outcome: GameOutcome,
    pub moves: Vec<usize>,
    pub positions: Vec<u16>,
}

/// JSONL observer - Exports every game log to JSON Lines format
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl MatchObserver for JsonlObserver {
    fn on_game_end(&mut self, game_num: usize, log: &GameLog) -> Result<()> {
        let record = GameRecord {
            game_num,
            outcome: log.outcome(),
            moves: log.moves(),
            positions: log.values(),
        };

        // One JSON object per line
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_match_end(&mut self, _result: &MatchResult) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::MatchRunner,
        policies::{CenterCornersPolicy, TopLeftPolicy},
    };

    #[test]
    fn test_jsonl_observer_writes_one_line_per_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");

        let mut runner =
            MatchRunner::new(3).with_observer(Box::new(JsonlObserver::new(&path).unwrap()));
        runner.run(&mut TopLeftPolicy, &mut TopLeftPolicy).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let records: Vec<GameRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].positions, vec![0, 1, 7, 16, 70, 151, 637, 1366]);
        assert_eq!(records[0].moves, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_metrics_observer_tracks_lengths() {
        let mut metrics = MetricsObserver::new();
        let mut x = CenterCornersPolicy;
        let mut o = CenterCornersPolicy;
        for game_num in 0..2 {
            let log = crate::tictactoe::run_game(&mut x, &mut o).unwrap();
            metrics.on_game_end(game_num, &log).unwrap();
        }
        let summary = metrics.summary();
        assert_eq!(summary.result.draws, 2);
        assert_eq!(summary.longest_game, 9);
        assert_eq!(summary.avg_game_length, 9.0);
    }
}
