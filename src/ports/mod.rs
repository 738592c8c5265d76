//! Ports (trait boundaries) between the game engine and its collaborators.
//!
//! The engine and match runner only talk to policies and observers through
//! these traits; concrete strategies and reporting live in other modules.

pub mod observer;
pub mod policy;

pub use observer::MatchObserver;
pub use policy::Policy;
