//! Tests for the base-3 position encoding over the whole position space

use proptest::prelude::*;
use relearn::tictactoe::{BOARD_SIZE, Cell, LineAnalyzer, NUM_POSITIONS, Player, Position};

/// Generate any encodable position number
fn arb_position() -> impl Strategy<Value = Position> {
    (0u32..NUM_POSITIONS as u32).prop_map(|value| Position::new(value).unwrap())
}

#[test]
fn test_every_position_round_trips() {
    for position in Position::all() {
        let cells = position.decode();
        assert_eq!(Position::encode(&cells), position);

        let label = position.to_label();
        assert_eq!(label.len(), BOARD_SIZE);
        assert_eq!(Position::from_label(&label).unwrap(), position);
    }
    assert_eq!(Position::all().count(), NUM_POSITIONS);
}

#[test]
fn test_out_of_range_numbers_rejected() {
    assert!(Position::new(NUM_POSITIONS as u32).is_err());
    assert!(Position::try_from(u32::MAX).is_err());
    assert!(Position::new(NUM_POSITIONS as u32 - 1).is_ok());
}

#[test]
fn test_malformed_labels_rejected() {
    assert!(Position::from_label("XO").is_err());
    assert!(Position::from_label("XO.......Z").is_err());
    assert!(Position::from_label("XO......Z").is_err());
}

proptest! {
    #[test]
    fn prop_legal_moves_are_the_empty_cells(position in arb_position()) {
        let moves: Vec<usize> = position.legal_moves().collect();
        prop_assert_eq!(moves.len(), BOARD_SIZE - position.occupied_count());
        prop_assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));
        for &cell in &moves {
            prop_assert_eq!(position.cell(cell), Cell::Empty);
        }
        prop_assert_eq!(position.is_full(), moves.is_empty());
    }

    #[test]
    fn prop_apply_move_fills_exactly_one_cell(position in arb_position(), x_to_move in any::<bool>()) {
        let player = if x_to_move { Player::X } else { Player::O };
        for cell in 0..BOARD_SIZE {
            let result = position.apply_move(player, cell);
            if position.cell(cell) == Cell::Empty {
                let after = result.unwrap();
                prop_assert_eq!(after.cell(cell), player.to_cell());
                prop_assert_eq!(after.occupied_count(), position.occupied_count() + 1);
                for other in (0..BOARD_SIZE).filter(|&other| other != cell) {
                    prop_assert_eq!(after.cell(other), position.cell(other));
                }
            } else {
                prop_assert!(result.is_err());
            }
        }
    }

    #[test]
    fn prop_winner_matches_line_analysis(position in arb_position()) {
        let cells = position.decode();
        let winner = position.winner();
        prop_assert_eq!(winner, LineAnalyzer::winner(&cells));
        if let Some(player) = winner.to_player() {
            prop_assert!(LineAnalyzer::has_won(&cells, player));
            prop_assert!(position.is_terminal());
        }
    }
}
