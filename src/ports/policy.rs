//! Policy port - abstraction for anything that can play a side of a game
//!
//! Fixed heuristics and the value-table learner both implement this trait,
//! which keeps [`crate::tictactoe::run_game`] independent of concrete
//! strategies.

use crate::{Result, tictactoe::Position};

/// Policy trait - a decision-making agent for one side of a game
///
/// # Event Sequence
///
/// For every game the engine calls:
/// 1. `start()` on both policies
/// 2. `propose_move(position)` on the side to move, alternating X and O
/// 3. `notify_game_over(final_position)` on both policies, X first
///
/// A policy must drive at most one game at a time; learners keep per-game
/// state between `propose_move` calls.
///
/// # Examples
///
/// ```
/// use relearn::{Result, ports::Policy, tictactoe::Position};
///
/// struct LastEmpty;
///
/// impl Policy for LastEmpty {
///     fn propose_move(&mut self, position: Position) -> Result<usize> {
///         position
///             .legal_moves()
///             .last()
///             .ok_or(relearn::Error::NoLegalMoves)
///     }
///
///     fn name(&self) -> &str {
///         "LastEmpty"
///     }
/// }
/// ```
pub trait Policy: Send {
    /// Reset per-game state. Called once before each game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless heuristics.
    fn start(&mut self) {}

    /// Choose a legal cell (0-8) to play in `position`.
    ///
    /// Callers only pass non-terminal positions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMoves`] if the board is full.
    fn propose_move(&mut self, position: Position) -> Result<usize>;

    /// Inform the policy that the game ended in `final_position`.
    ///
    /// Both players are notified, including the one that did not make the
    /// final move.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn notify_game_over(&mut self, _final_position: Position) {}

    /// Get the policy's name for reports and logging.
    fn name(&self) -> &str;

    /// Seed the policy's internal random number generator.
    ///
    /// Match drivers call this when supplied with a deterministic seed.
    /// Deterministic policies ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
