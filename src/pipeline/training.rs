//! Training a value-table learner against a fixed opponent

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{
    matches::{MatchResult, MatchRunner},
    observers::{LogObserver, ProgressObserver},
};
use crate::{
    Error, Result,
    error::ensure_unit_interval,
    policies::PolicyKind,
    ports::Policy,
    tictactoe::Player,
    vtable::VTablePolicy,
};

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Learning rate α
    pub alpha: f64,

    /// Exploration rate during the first round
    pub curiosity: f64,

    /// Multiplier applied to curiosity after each round
    pub curiosity_decay: f64,

    /// Lower bound for the decayed curiosity
    pub min_curiosity: f64,

    /// Number of training rounds
    pub rounds: usize,

    /// Games per training round
    pub games_per_round: usize,

    /// Games in the final evaluation (played with curiosity 0)
    pub evaluation_games: usize,

    /// Opponent the learner trains against
    pub opponent: PolicyKind,

    /// Side the learner plays
    pub learner_player: Player,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            curiosity: 0.1,
            curiosity_decay: 1.0,
            min_curiosity: 0.0,
            rounds: 5,
            games_per_round: 100,
            evaluation_games: 100,
            opponent: PolicyKind::CenterCorners,
            learner_player: Player::X,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Check parameter ranges and game counts.
    pub fn validate(&self) -> Result<()> {
        ensure_unit_interval("alpha", self.alpha)?;
        ensure_unit_interval("curiosity", self.curiosity)?;
        ensure_unit_interval("curiosity_decay", self.curiosity_decay)?;
        ensure_unit_interval("min_curiosity", self.min_curiosity)?;
        if self.games_per_round == 0 && self.rounds > 0 {
            return Err(Error::InvalidConfiguration {
                message: "games_per_round must be positive when rounds > 0".to_string(),
            });
        }
        if self.rounds == 0 && self.evaluation_games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "nothing to play: rounds and evaluation_games are both 0".to_string(),
            });
        }
        Ok(())
    }

    /// Curiosity for the round after one played at `curiosity`.
    pub fn decayed_curiosity(&self, curiosity: f64) -> f64 {
        let next = curiosity * self.curiosity_decay;
        if next < self.min_curiosity {
            if self.min_curiosity > curiosity {
                warn!(
                    "min_curiosity {} is above the current curiosity {curiosity}; keeping {curiosity}",
                    self.min_curiosity
                );
                return curiosity;
            }
            return self.min_curiosity;
        }
        next
    }
}

/// Result of one training round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    /// Curiosity used throughout the round
    pub curiosity: f64,
    pub result: MatchResult,
}

/// Result of a training session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub learner_player: Player,
    pub opponent: PolicyKind,
    pub rounds: Vec<RoundReport>,
    /// Final greedy evaluation, absent when `evaluation_games` is 0
    pub evaluation: Option<MatchResult>,
}

impl TrainingReport {
    /// Learner win rate in the evaluation, or in the last round without one.
    pub fn final_win_rate(&self) -> f64 {
        self.evaluation
            .as_ref()
            .or_else(|| self.rounds.last().map(|round| &round.result))
            .map(|result| result.win_rate_for(self.learner_player))
            .unwrap_or(0.0)
    }

    /// Save report to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

/// Sequential training of one learner against one opponent
///
/// Each round plays `games_per_round` games, then curiosity decays. The
/// learner keeps learning during the evaluation, which only switches off
/// exploration.
pub struct TrainingSession {
    config: TrainingConfig,
    learner: VTablePolicy,
    opponent: Box<dyn Policy>,
    progress: bool,
}

impl TrainingSession {
    /// Build the learner and opponent described by `config`.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        let mut learner =
            VTablePolicy::new(config.learner_player, config.alpha, config.curiosity)?;
        if let Some(seed) = config.seed {
            learner = learner.with_seed(seed);
        }
        let opponent = config
            .opponent
            .build(config.learner_player.opponent(), config.seed.map(|s| s.wrapping_add(1)));

        Ok(Self {
            config,
            learner,
            opponent,
            progress: false,
        })
    }

    /// Show a progress bar for every round
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn learner(&self) -> &VTablePolicy {
        &self.learner
    }

    /// Hand the trained learner to the caller.
    pub fn into_learner(self) -> VTablePolicy {
        self.learner
    }

    fn play(&mut self, games: usize, label: String) -> Result<MatchResult> {
        let mut runner = MatchRunner::new(games).with_observer(Box::new(LogObserver::new(label)));
        if self.progress {
            runner = runner.with_observer(Box::new(ProgressObserver::new()));
        }

        match self.config.learner_player {
            Player::X => runner.run(&mut self.learner, self.opponent.as_mut()),
            Player::O => runner.run(self.opponent.as_mut(), &mut self.learner),
        }
    }

    /// Run all training rounds followed by the evaluation.
    pub fn run(&mut self) -> Result<TrainingReport> {
        let player = self.config.learner_player;
        let mut rounds = Vec::with_capacity(self.config.rounds);
        let mut curiosity = self.config.curiosity;

        for round in 1..=self.config.rounds {
            self.learner.set_curiosity(curiosity)?;
            let result = self.play(
                self.config.games_per_round,
                format!("round {round}/{}", self.config.rounds),
            )?;
            info!(
                "round {round}/{}: curiosity {curiosity:.3}, learner win rate {:.2}",
                self.config.rounds,
                result.win_rate_for(player)
            );
            rounds.push(RoundReport {
                round,
                curiosity,
                result,
            });
            curiosity = self.config.decayed_curiosity(curiosity);
        }

        let evaluation = if self.config.evaluation_games > 0 {
            self.learner.set_curiosity(0.0)?;
            let result = self.play(self.config.evaluation_games, "evaluation".to_string())?;
            info!(
                "evaluation: learner win rate {:.2}, draw rate {:.2}",
                result.win_rate_for(player),
                result.draw_rate()
            );
            Some(result)
        } else {
            None
        };

        Ok(TrainingReport {
            learner_player: player,
            opponent: self.config.opponent,
            rounds,
            evaluation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TrainingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_alpha() {
        let config = TrainingConfig {
            alpha: 2.0,
            ..TrainingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "alpha", .. })
        ));
    }

    #[test]
    fn test_curiosity_decay_floors_at_minimum() {
        let config = TrainingConfig {
            curiosity_decay: 0.5,
            min_curiosity: 0.05,
            ..TrainingConfig::default()
        };
        assert_eq!(config.decayed_curiosity(0.4), 0.2);
        assert_eq!(config.decayed_curiosity(0.08), 0.05);
    }

    #[test]
    fn test_session_reports_each_round() {
        let config = TrainingConfig {
            rounds: 3,
            games_per_round: 20,
            evaluation_games: 10,
            curiosity_decay: 0.5,
            seed: Some(42),
            ..TrainingConfig::default()
        };
        let mut session = TrainingSession::new(config).unwrap();
        let report = session.run().unwrap();

        assert_eq!(report.rounds.len(), 3);
        assert_eq!(report.rounds[0].curiosity, 0.1);
        assert_eq!(report.rounds[1].curiosity, 0.05);
        assert!(report.rounds.iter().all(|round| round.result.games == 20));
        assert_eq!(report.evaluation.map(|result| result.games), Some(10));
        assert_eq!(session.learner().curiosity(), 0.0);
    }

    #[test]
    fn test_session_as_o() {
        let config = TrainingConfig {
            rounds: 1,
            games_per_round: 10,
            evaluation_games: 0,
            opponent: PolicyKind::Random,
            learner_player: Player::O,
            seed: Some(3),
            ..TrainingConfig::default()
        };
        let mut session = TrainingSession::new(config).unwrap();
        let report = session.run().unwrap();

        assert!(report.evaluation.is_none());
        assert_eq!(report.rounds[0].result.games, 10);
        assert_eq!(session.learner().player(), Player::O);
    }
}
