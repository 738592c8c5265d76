//! Fixed-strategy policies used as opponents and baselines

pub mod block_attack;
pub mod kind;
pub mod random;
pub mod simple;

pub use block_attack::BlockAttackPolicy;
pub use kind::PolicyKind;
pub use random::RandomPolicy;
pub use simple::{CenterCornersPolicy, TopLeftPolicy};
