//! Running a full game between two policies

use serde::{Deserialize, Serialize};

use super::board::{Cell, Player, Position};
use crate::{Result, ports::Policy};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished position (`None` while the game is still running).
    pub fn of(position: Position) -> Option<GameOutcome> {
        match position.winner().to_player() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if position.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// Positions visited during one game, starting at the empty board and ending
/// at the first won or full position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog(Vec<Position>);

impl GameLog {
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Last position of the game.
    pub fn final_position(&self) -> Position {
        self.0.last().copied().unwrap_or(Position::EMPTY)
    }

    pub fn winner(&self) -> Cell {
        self.final_position().winner()
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner().to_player() {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        }
    }

    /// Cell played at each ply, recovered from consecutive positions.
    pub fn moves(&self) -> Vec<usize> {
        self.0
            .windows(2)
            .filter_map(|pair| {
                let (before, after) = (pair[0], pair[1]);
                (0..9).find(|&cell| before.cell(cell) != after.cell(cell))
            })
            .collect()
    }

    /// Number of positions in the log (moves played + 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position numbers, convenient for comparing against fixtures.
    pub fn values(&self) -> Vec<u16> {
        self.0.iter().map(|p| p.value()).collect()
    }
}

/// Play one game: `x` moves first, the two policies alternate until a line is
/// complete or the board is full.
///
/// Both policies are told about the final position, `x` first, whichever of
/// them made the last move.
///
/// # Errors
///
/// Propagates policy errors, and [`crate::Error::OccupiedCell`] if a policy
/// proposes a taken cell. A failed game is abandoned without notifying the
/// policies.
pub fn run_game(x: &mut dyn Policy, o: &mut dyn Policy) -> Result<GameLog> {
    x.start();
    o.start();

    let mut log = vec![Position::EMPTY];
    let mut to_move = Player::X;

    loop {
        let before = log[log.len() - 1];
        let policy: &mut dyn Policy = if to_move == Player::X { x } else { o };
        let cell = policy.propose_move(before)?;
        let after = before.apply_move(to_move, cell)?;
        log.push(after);

        if after.winner() != Cell::Empty || after.is_full() {
            x.notify_game_over(after);
            o.notify_game_over(after);
            return Ok(GameLog(log));
        }
        to_move = to_move.opponent();
    }
}
