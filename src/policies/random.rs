//! Uniformly random baseline

use rand::{SeedableRng, random, rngs::StdRng, seq::IteratorRandom};

use crate::{Error, Result, ports::Policy, tictactoe::Position};

/// Random policy (baseline)
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Create a new random policy
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random policy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn propose_move(&mut self, position: Position) -> Result<usize> {
        position
            .legal_moves()
            .choose(&mut self.rng)
            .ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_legal_moves() {
        let mut policy = RandomPolicy::with_seed(42);
        let position = Position::new(14263).unwrap();
        for _ in 0..50 {
            let cell = policy.propose_move(position).unwrap();
            assert!([2, 3, 7].contains(&cell));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomPolicy::with_seed(7);
        let mut b = RandomPolicy::with_seed(7);
        for _ in 0..20 {
            assert_eq!(
                a.propose_move(Position::EMPTY).unwrap(),
                b.propose_move(Position::EMPTY).unwrap()
            );
        }
    }
}
