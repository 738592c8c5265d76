//! Deterministic cell-preference policies

use crate::{
    Error, Result,
    ports::Policy,
    tictactoe::{Cell, Position},
};

/// Plays the lowest-numbered empty cell (leftmost cell of the topmost
/// non-full row).
#[derive(Debug, Clone, Copy, Default)]
pub struct TopLeftPolicy;

impl Policy for TopLeftPolicy {
    fn propose_move(&mut self, position: Position) -> Result<usize> {
        position.legal_moves().next().ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "TopLeft"
    }
}

/// Plays the center if free, then corners, then sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterCornersPolicy;

impl CenterCornersPolicy {
    //                                    Center, Corners   , Sides
    pub const PREFERENCE_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];
}

impl Policy for CenterCornersPolicy {
    fn propose_move(&mut self, position: Position) -> Result<usize> {
        Self::PREFERENCE_ORDER
            .iter()
            .copied()
            .find(|&cell| position.cell(cell) == Cell::Empty)
            .ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "CenterCorners"
    }
}
