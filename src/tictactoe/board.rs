//! Board encoding and basic operations
//!
//! A board is stored as a single base-3 number: digit `i` holds the occupant of
//! cell `i` (0 = empty, 1 = X, 2 = O). Cells are numbered row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of distinct encoded positions (3^9), reachable or not.
pub const NUM_POSITIONS: usize = 19_683;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

const POWERS: [u16; BOARD_SIZE] = [1, 3, 9, 27, 81, 243, 729, 2187, 6561];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Digit used for this cell in the position encoding.
    pub fn digit(self) -> u16 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    /// Inverse of [`Cell::digit`]. Only the low base-3 digit is considered.
    pub fn from_digit(digit: u16) -> Cell {
        match digit % 3 {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Digit this player's mark contributes to the position encoding.
    pub fn digit(self) -> u16 {
        self.to_cell().digit()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Encoded board position, an integer in `[0, 3^9)`.
///
/// Positions are immutable values: applying a move yields a new position.
/// Every value in range decodes to exactly one cell assignment and every
/// assignment encodes to exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u16);

impl Position {
    /// The empty board.
    pub const EMPTY: Position = Position(0);

    /// Create a position from its number, rejecting values outside `[0, 3^9)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PositionOutOfRange`] if `value >= 19683`.
    pub fn new(value: u32) -> Result<Self, crate::Error> {
        if (value as usize) < NUM_POSITIONS {
            Ok(Position(value as u16))
        } else {
            Err(crate::Error::PositionOutOfRange { value })
        }
    }

    /// Iterate over every encoded position in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_POSITIONS as u16).map(Position)
    }

    /// Get the position number.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Position number as a table index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn digit(self, cell: usize) -> u16 {
        self.0 / POWERS[cell] % 3
    }

    /// Occupant of a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell > 8`.
    pub fn cell(self, cell: usize) -> Cell {
        Cell::from_digit(self.digit(cell))
    }

    /// Decode into the nine cell occupants.
    pub fn decode(self) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|i| self.cell(i))
    }

    /// Encode nine cell occupants into a position.
    pub fn encode(cells: &[Cell; BOARD_SIZE]) -> Position {
        Position(
            cells
                .iter()
                .zip(POWERS)
                .map(|(cell, power)| cell.digit() * power)
                .sum(),
        )
    }

    /// Empty cells in ascending order.
    ///
    /// The iterator is lazy; call again (or clone it) to restart.
    pub fn legal_moves(self) -> LegalMoves {
        LegalMoves {
            position: self,
            next: 0,
        }
    }

    /// Whether no empty cell remains.
    pub fn is_full(self) -> bool {
        self.legal_moves().next().is_none()
    }

    /// Place `player`'s mark on `cell`, returning the new position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OccupiedCell`] if the cell is taken and
    /// [`crate::Error::InvalidCell`] if `cell > 8`.
    pub fn apply_move(self, player: Player, cell: usize) -> Result<Position, crate::Error> {
        if cell >= BOARD_SIZE {
            return Err(crate::Error::InvalidCell { cell });
        }
        if self.digit(cell) != 0 {
            return Err(crate::Error::OccupiedCell { cell });
        }
        Ok(Position(self.0 + POWERS[cell] * player.digit()))
    }

    /// Mark owning the first complete line, or [`Cell::Empty`] if none.
    pub fn winner(self) -> Cell {
        LineAnalyzer::winner(&self.decode())
    }

    /// Whether the game is over (a line is complete or the board is full).
    pub fn is_terminal(self) -> bool {
        self.winner() != Cell::Empty || self.is_full()
    }

    /// Number of occupied cells.
    pub fn occupied_count(self) -> usize {
        BOARD_SIZE - self.legal_moves().count()
    }

    /// Nine-character label, one character per cell.
    pub fn to_label(self) -> String {
        self.decode().iter().map(|c| c.to_char()).collect()
    }

    /// Parse a nine-character label (`.` or space for empty, `X`, `O`).
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not exactly nine cells long or holds
    /// an unknown character.
    pub fn from_label(label: &str) -> Result<Position, crate::Error> {
        let chars: Vec<char> = label.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: label.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                cell: i,
                context: label.to_string(),
            })?;
        }
        Ok(Position::encode(&cells))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::EMPTY
    }
}

impl TryFrom<u32> for Position {
    type Error = crate::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.index()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.decode().iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Lazy iterator over the empty cells of a position.
#[derive(Debug, Clone)]
pub struct LegalMoves {
    position: Position,
    next: usize,
}

impl Iterator for LegalMoves {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < BOARD_SIZE {
            let cell = self.next;
            self.next += 1;
            if self.position.digit(cell) == 0 {
                return Some(cell);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(BOARD_SIZE - self.next))
    }
}

impl std::iter::FusedIterator for LegalMoves {}
