//! Dense value table over all encoded positions

use crate::{
    Error, Result,
    tictactoe::{Cell, NUM_POSITIONS, Player, Position},
};

/// Value estimate for a position nobody has won yet.
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Value table mapping every encoded position to an estimate
///
/// Holds all 3^9 positions, including ones unreachable in legal play, and is
/// indexed directly by [`Position::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    values: Vec<f64>,
}

impl ValueTable {
    /// Seed a table for `player`: 1.0 where `player` has won, 0.0 where the
    /// opponent has won and 0.5 everywhere else.
    pub fn for_player(player: Player) -> Self {
        let target = player.to_cell();
        let values = Position::all()
            .map(|position| match position.winner() {
                Cell::Empty => NEUTRAL_VALUE,
                winner if winner == target => 1.0,
                _ => 0.0,
            })
            .collect();
        Self { values }
    }

    /// Table with every position set to `value`.
    pub fn filled(value: f64) -> Self {
        Self {
            values: vec![value; NUM_POSITIONS],
        }
    }

    /// Copy an external table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableSizeMismatch`] unless `values` has exactly 3^9
    /// entries.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != NUM_POSITIONS {
            return Err(Error::TableSizeMismatch {
                expected: NUM_POSITIONS,
                got: values.len(),
            });
        }
        Ok(Self {
            values: values.to_vec(),
        })
    }

    /// Get the value of a position
    pub fn get(&self, position: Position) -> f64 {
        self.values[position.index()]
    }

    /// Set the value of a position
    pub fn set(&mut self, position: Position, value: f64) {
        self.values[position.index()] = value;
    }

    /// Move the value of `position` a fraction `alpha` of the way to `target`.
    ///
    /// V(s) ← V(s) + α[target − V(s)]
    pub fn backup(&mut self, position: Position, target: f64, alpha: f64) {
        let slot = &mut self.values[position.index()];
        *slot += alpha * (target - *slot);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
