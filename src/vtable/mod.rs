//! Value-table temporal difference learning
//!
//! [`VTablePolicy`] keeps one value estimate for every encoded position and
//! plays the move whose successor has the highest estimate, exploring at
//! random with probability `curiosity`.
//!
//! ## Backup Rule
//!
//! Learning is a one-step delayed TD(0) update. After the learner moves into
//! position `s`, it remembers `s` as pending. At its next decision it first
//! backs `s` up toward the best value now reachable:
//!
//! ```text
//! V(s) ← V(s) + α · (max_a V(s') − V(s))
//! ```
//!
//! When the game ends the target is the table's own value of the final
//! position, which the seeding rule sets to 1 for wins and 0 for losses.
//!
//! ## Usage Example
//!
//! ```no_run
//! use relearn::{
//!     policies::CenterCornersPolicy,
//!     tictactoe::{Player, run_game},
//!     vtable::VTablePolicy,
//! };
//!
//! let mut learner = VTablePolicy::new(
//!     Player::X,
//!     0.1, // alpha (learning rate)
//!     0.1, // curiosity (exploration rate)
//! )?
//! .with_seed(7);
//! let mut opponent = CenterCornersPolicy;
//!
//! for _ in 0..500 {
//!     run_game(&mut learner, &mut opponent)?;
//! }
//! # Ok::<(), relearn::Error>(())
//! ```

pub mod agent;
pub mod value_table;

pub use agent::VTablePolicy;
pub use value_table::ValueTable;
