//! Running a series of games between two policies

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{MatchObserver, Policy},
    tictactoe::{GameOutcome, Player, run_game},
};

/// Tally of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Total games played
    pub games: usize,
    /// Games won by X
    pub x_wins: usize,
    /// Games won by O
    pub o_wins: usize,
    /// Drawn games
    pub draws: usize,
}

impl MatchResult {
    /// Count one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games > 0 {
            count as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Share of games won by `player`.
    pub fn win_rate_for(&self, player: Player) -> f64 {
        self.rate(self.wins_for(player))
    }
}

/// Plays a fixed number of games between the same two policies
pub struct MatchRunner<'a> {
    games: usize,
    observers: Vec<Box<dyn MatchObserver + 'a>>,
}

impl<'a> MatchRunner<'a> {
    /// Create a runner for `games` games
    pub fn new(games: usize) -> Self {
        Self {
            games,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn MatchObserver + 'a>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn games(&self) -> usize {
        self.games
    }

    /// Play the match with `x` moving first in every game.
    ///
    /// # Errors
    ///
    /// Stops at the first failed game or observer error.
    pub fn run(&mut self, x: &mut dyn Policy, o: &mut dyn Policy) -> Result<MatchResult> {
        for observer in &mut self.observers {
            observer.on_match_start(self.games)?;
        }

        let mut result = MatchResult::default();
        for game_num in 0..self.games {
            let log = run_game(x, o)?;
            let outcome = log.outcome();
            debug!(
                "game {game_num}: {} vs {} -> {outcome:?} in {} moves",
                x.name(),
                o.name(),
                log.len() - 1
            );
            result.record(outcome);

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &log)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end(&result)?;
        }
        Ok(result)
    }
}

/// Play `games` games between `x` and `o` without observers.
pub fn run_match(x: &mut dyn Policy, o: &mut dyn Policy, games: usize) -> Result<MatchResult> {
    MatchRunner::new(games).run(x, o)
}
