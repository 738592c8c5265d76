//! Line-scoring heuristic that builds its own lines and blocks the opponent's

use crate::{
    Error, Result,
    ports::Policy,
    tictactoe::{Cell, LineAnalyzer, Player, Position, WINNING_LINES},
};

/// Occupant of a cell seen from the acting player.
///
/// The derived order (own < opponent < empty) is the order a line's
/// occupants are sorted into before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Occupant {
    Own,
    Opponent,
    Empty,
}

/// Plays the move that maximizes the summed score of all eight lines.
///
/// Each line of the resulting board is scored by its occupant multiset:
///
/// | Line          | Score |
/// |---------------|-------|
/// | own ×3        | 1000  |
/// | own ×2, empty | 10    |
/// | own, empty ×2 | 1     |
/// | empty ×3      | 0     |
/// | opp, empty ×2 | -1    |
/// | opp ×2, empty | -100  |
///
/// Lines holding both marks can no longer be won by anyone and score 0.
/// Ties go to the lowest cell index.
#[derive(Debug, Clone, Copy)]
pub struct BlockAttackPolicy {
    player: Player,
}

impl BlockAttackPolicy {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    fn occupant(&self, cell: Cell) -> Occupant {
        match cell.to_player() {
            None => Occupant::Empty,
            Some(owner) if owner == self.player => Occupant::Own,
            Some(_) => Occupant::Opponent,
        }
    }

    fn line_score(mut line: [Occupant; 3]) -> i32 {
        use Occupant::{Empty, Opponent, Own};

        line.sort_unstable();
        match line {
            [Own, Own, Own] => 1000,
            [Own, Own, Empty] => 10,
            [Own, Empty, Empty] => 1,
            [Opponent, Empty, Empty] => -1,
            [Opponent, Opponent, Empty] => -100,
            _ => 0,
        }
    }

    /// Total line score of a board from this policy's side.
    pub fn score(&self, position: Position) -> i32 {
        let cells = position.decode();
        WINNING_LINES
            .iter()
            .map(|line| {
                let occupants = LineAnalyzer::line_cells(&cells, line).map(|c| self.occupant(c));
                Self::line_score(occupants)
            })
            .sum()
    }
}

impl Policy for BlockAttackPolicy {
    fn propose_move(&mut self, position: Position) -> Result<usize> {
        let mut best: Option<(usize, i32)> = None;
        for cell in position.legal_moves() {
            let score = self.score(position.apply_move(self.player, cell)?);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((cell, score));
            }
        }
        best.map(|(cell, _)| cell).ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "BlockAttack"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(label: &str) -> Position {
        Position::from_label(label).unwrap()
    }

    #[test]
    fn test_opens_in_center() {
        let mut policy = BlockAttackPolicy::new(Player::X);
        assert_eq!(policy.propose_move(Position::EMPTY).unwrap(), 4);
    }

    #[test]
    fn test_blocks_open_pair() {
        let mut policy = BlockAttackPolicy::new(Player::O);
        assert_eq!(policy.propose_move(pos("XX..O....")).unwrap(), 2);
    }

    #[test]
    fn test_prefers_win_over_block() {
        let mut policy = BlockAttackPolicy::new(Player::O);
        assert_eq!(policy.propose_move(pos("XX.OO.X..")).unwrap(), 5);
    }

    #[test]
    fn test_dead_lines_score_zero() {
        let policy = BlockAttackPolicy::new(Player::X);
        // Every line holds both marks.
        assert_eq!(policy.score(pos("XOXXOOOXX")), 0);
    }

    #[test]
    fn test_ties_go_to_lowest_cell() {
        // Center taken by X: all four corners score the same for O.
        let mut policy = BlockAttackPolicy::new(Player::O);
        assert_eq!(policy.propose_move(pos("....X....")).unwrap(), 0);
    }
}
