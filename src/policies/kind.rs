//! Named policy selection for configuration files and the CLI

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{BlockAttackPolicy, CenterCornersPolicy, RandomPolicy, TopLeftPolicy};
use crate::{ports::Policy, tictactoe::Player};

/// Fixed-strategy policies that can be named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Lowest-numbered empty cell
    TopLeft,
    /// Center, then corners, then sides
    CenterCorners,
    /// Line-scoring heuristic that blocks and builds
    BlockAttack,
    /// Uniformly random legal move
    Random,
}

impl PolicyKind {
    /// Get short label
    pub fn label(&self) -> &'static str {
        match self {
            PolicyKind::TopLeft => "top-left",
            PolicyKind::CenterCorners => "center-corners",
            PolicyKind::BlockAttack => "block-attack",
            PolicyKind::Random => "random",
        }
    }

    /// Build a policy playing `player`, seeding it when a seed is given.
    pub fn build(self, player: Player, seed: Option<u64>) -> Box<dyn Policy> {
        let mut policy: Box<dyn Policy> = match self {
            PolicyKind::TopLeft => Box::new(TopLeftPolicy),
            PolicyKind::CenterCorners => Box::new(CenterCornersPolicy),
            PolicyKind::BlockAttack => Box::new(BlockAttackPolicy::new(player)),
            PolicyKind::Random => Box::new(RandomPolicy::new()),
        };
        if let Some(seed) = seed {
            policy.set_rng_seed(seed);
        }
        policy
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_labels_match_display() {
        for kind in PolicyKind::value_variants() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_build_names() {
        assert_eq!(PolicyKind::TopLeft.build(Player::X, None).name(), "TopLeft");
        assert_eq!(
            PolicyKind::BlockAttack.build(Player::O, None).name(),
            "BlockAttack"
        );
        assert_eq!(PolicyKind::Random.build(Player::O, Some(3)).name(), "Random");
    }
}
