//! Value-table learning agent
//!
//! The agent backs up the value of the position it last moved into as soon
//! as it sees what the best follow-up is worth, then picks its next move.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::value_table::ValueTable;
use crate::{
    Error, Result,
    error::ensure_unit_interval,
    ports::Policy,
    tictactoe::{Player, Position},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Policy based on a value table that is updated as it plays
#[derive(Debug, Clone)]
pub struct VTablePolicy {
    player: Player,
    alpha: f64,
    curiosity: f64,
    table: ValueTable,
    /// Position reached by our own last move, awaiting its backup.
    pending: Option<Position>,
    rng: StdRng,
}

impl VTablePolicy {
    /// Create a learner with the default seeded table for `player`.
    ///
    /// # Arguments
    ///
    /// * `player` - Side the learner plays
    /// * `alpha` - Learning rate (0.0 to 1.0); 0 freezes the table
    /// * `curiosity` - Probability of a uniformly random exploratory move
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `alpha` or `curiosity` is
    /// outside `[0, 1]`.
    pub fn new(player: Player, alpha: f64, curiosity: f64) -> Result<Self> {
        Self::build(player, alpha, curiosity, ValueTable::for_player(player))
    }

    /// Create a learner starting from a copy of `values`.
    ///
    /// # Errors
    ///
    /// Fails on out-of-range parameters or if `values` does not hold 3^9
    /// entries.
    pub fn with_table(player: Player, alpha: f64, curiosity: f64, values: &[f64]) -> Result<Self> {
        Self::build(player, alpha, curiosity, ValueTable::from_slice(values)?)
    }

    fn build(player: Player, alpha: f64, curiosity: f64, table: ValueTable) -> Result<Self> {
        ensure_unit_interval("alpha", alpha)?;
        ensure_unit_interval("curiosity", curiosity)?;
        Ok(Self {
            player,
            alpha,
            curiosity,
            table,
            pending: None,
            rng: build_rng(None),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn curiosity(&self) -> f64 {
        self.curiosity
    }

    /// Change the exploration rate, e.g. between training rounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `curiosity` is outside `[0, 1]`.
    pub fn set_curiosity(&mut self, curiosity: f64) -> Result<()> {
        ensure_unit_interval("curiosity", curiosity)?;
        self.curiosity = curiosity;
        Ok(())
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ValueTable {
        &mut self.table
    }

    /// Position awaiting a backup, if the learner has moved since the last one.
    pub fn pending_position(&self) -> Option<Position> {
        self.pending
    }

    /// Value of the position reached by playing `cell` from `position`.
    ///
    /// # Errors
    ///
    /// Fails if `cell` is not a legal move in `position`.
    pub fn evaluate_move(&self, position: Position, cell: usize) -> Result<f64> {
        let result = position.apply_move(self.player, cell)?;
        Ok(self.table.get(result))
    }

    /// Back the pending position up toward `target` and clear it.
    fn learn(&mut self, target: f64) {
        if self.alpha == 0.0 {
            return;
        }
        if let Some(position) = self.pending.take() {
            self.table.backup(position, target, self.alpha);
        }
    }
}

impl Policy for VTablePolicy {
    fn start(&mut self) {
        self.pending = None;
    }

    fn propose_move(&mut self, position: Position) -> Result<usize> {
        let mut scored = Vec::with_capacity(9);
        for cell in position.legal_moves() {
            let successor = position.apply_move(self.player, cell)?;
            scored.push((cell, successor, self.table.get(successor)));
        }
        if scored.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        let max_value = scored
            .iter()
            .map(|&(_, _, value)| value)
            .fold(f64::NEG_INFINITY, f64::max);

        // The previous decision learns what its outcome is worth now, before
        // this turn's choice replaces the pending position.
        self.learn(max_value);

        let explore = self.rng.random::<f64>() < self.curiosity;
        let chosen = if explore {
            scored.choose(&mut self.rng)
        } else {
            let top: Vec<_> = scored
                .iter()
                .filter(|&&(_, _, value)| value == max_value)
                .collect();
            top.choose(&mut self.rng).copied()
        };
        let &(cell, successor, _) = chosen.ok_or(Error::NoLegalMoves)?;

        self.pending = Some(successor);
        Ok(cell)
    }

    fn notify_game_over(&mut self, final_position: Position) {
        self.learn(self.table.get(final_position));
    }

    fn name(&self) -> &str {
        "VTable"
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::NUM_POSITIONS;

    fn pos(value: u32) -> Position {
        Position::new(value).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        assert!(VTablePolicy::new(Player::X, 1.5, 0.0).is_err());
        assert!(VTablePolicy::new(Player::X, 0.5, -0.1).is_err());
        assert!(VTablePolicy::new(Player::X, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_greedy_takes_win() {
        let mut policy = VTablePolicy::new(Player::X, 0.0, 0.0).unwrap().with_seed(1);
        policy.start();
        // XX. / ... / ... : completing the top row is the only 1.0 successor.
        assert_eq!(policy.propose_move(pos(4)).unwrap(), 2);
        // X.. / X.. / ... : completing the left column.
        assert_eq!(policy.propose_move(pos(28)).unwrap(), 6);
    }

    #[test]
    fn test_first_move_has_nothing_to_learn() {
        let mut policy = VTablePolicy::new(Player::X, 0.5, 0.0).unwrap().with_seed(3);
        let before = policy.table().clone();
        policy.start();
        let cell = policy.propose_move(Position::EMPTY).unwrap();

        assert_eq!(policy.table(), &before);
        assert_eq!(
            policy.pending_position(),
            Some(Position::EMPTY.apply_move(Player::X, cell).unwrap())
        );
    }

    #[test]
    fn test_game_over_consumes_pending_once() {
        let zeros = vec![0.0; NUM_POSITIONS];
        let mut policy = VTablePolicy::with_table(Player::X, 0.5, 0.0, &zeros)
            .unwrap()
            .with_seed(5);
        policy.start();
        let cell = policy.propose_move(Position::EMPTY).unwrap();
        let pending = Position::EMPTY.apply_move(Player::X, cell).unwrap();

        let terminal = pos(13);
        policy.table_mut().set(terminal, 1.0);
        policy.notify_game_over(terminal);
        assert_eq!(policy.table().get(pending), 0.5);
        assert_eq!(policy.pending_position(), None);

        policy.notify_game_over(terminal);
        assert_eq!(policy.table().get(pending), 0.5);
    }

    #[test]
    fn test_start_drops_pending_without_backup() {
        let zeros = vec![0.0; NUM_POSITIONS];
        let mut policy = VTablePolicy::with_table(Player::X, 0.5, 0.0, &zeros)
            .unwrap()
            .with_seed(9);
        policy.start();
        policy.propose_move(Position::EMPTY).unwrap();
        policy.start();
        assert_eq!(policy.pending_position(), None);
    }

    #[test]
    fn test_zero_alpha_never_changes_table() {
        let mut policy = VTablePolicy::new(Player::O, 0.0, 0.3).unwrap().with_seed(11);
        let before = policy.table().clone();
        let mut opponent = crate::policies::TopLeftPolicy;
        for _ in 0..20 {
            crate::tictactoe::run_game(&mut opponent, &mut policy).unwrap();
        }
        assert_eq!(policy.table(), &before);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut policy = VTablePolicy::new(Player::X, 0.1, 0.0).unwrap();
        assert!(matches!(
            policy.propose_move(pos(19682)),
            Err(Error::NoLegalMoves)
        ));
    }
}
