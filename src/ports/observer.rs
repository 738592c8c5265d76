//! Observer port - abstraction for watching a match
//!
//! Observers receive match events from [`crate::pipeline::MatchRunner`]
//! without the runner depending on any output format.

use crate::{Result, pipeline::MatchResult, tictactoe::GameLog};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - Once at the beginning
/// 2. `on_game_end(game_num, log)` - After every finished game
/// 3. `on_match_end(result)` - Once at the end
pub trait MatchObserver: Send {
    /// Called before the first game.
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each game with its full log.
    ///
    /// `game_num` is 0-based.
    fn on_game_end(&mut self, _game_num: usize, _log: &GameLog) -> Result<()> {
        Ok(())
    }

    /// Called once the match tally is complete.
    fn on_match_end(&mut self, _result: &MatchResult) -> Result<()> {
        Ok(())
    }
}

/// Lets a caller lend an observer to a runner and read it back afterwards.
impl<T: MatchObserver + ?Sized> MatchObserver for &mut T {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        (**self).on_match_start(total_games)
    }

    fn on_game_end(&mut self, game_num: usize, log: &GameLog) -> Result<()> {
        (**self).on_game_end(game_num, log)
    }

    fn on_match_end(&mut self, result: &MatchResult) -> Result<()> {
        (**self).on_match_end(result)
    }
}
