//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark of the first line (in [`WINNING_LINES`] order) whose three cells
    /// hold the same mark, or [`Cell::Empty`] if no line is complete.
    pub fn winner(cells: &[Cell; 9]) -> Cell {
        WINNING_LINES
            .iter()
            .find_map(|&[a, b, c]| {
                let mark = cells[a];
                (mark != Cell::Empty && cells[b] == mark && cells[c] == mark).then_some(mark)
            })
            .unwrap_or(Cell::Empty)
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The three occupants of a line.
    pub fn line_cells(cells: &[Cell; 9], line: &[usize; 3]) -> [Cell; 3] {
        [cells[line[0]], cells[line[1]], cells[line[2]]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winner(&cells), Cell::X);
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winner(&cells), Cell::O);
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Cell::X);
    }

    #[test]
    fn test_winner_takes_first_line_in_order() {
        // Unreachable board with both marks owning a line: the top row wins
        // because rows are checked first.
        // O O O
        // X X X
        // . . .
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[1] = Cell::O;
        cells[2] = Cell::O;
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Cell::O);
    }

    #[test]
    fn test_no_winner_with_mixed_lines() {
        // X O X
        // X O O
        // O X X
        let cells = [
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::O,
            Cell::X,
            Cell::X,
        ];
        assert_eq!(LineAnalyzer::winner(&cells), Cell::Empty);
    }
}
