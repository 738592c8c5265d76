//! Tic-Tac-Toe board encoding and game engine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIZE, Cell, LegalMoves, NUM_POSITIONS, Player, Position};
pub use game::{GameLog, GameOutcome, run_game};
pub use lines::{LineAnalyzer, WINNING_LINES};
