//! Team balancing over scored rosters
//!
//! This module provides the subset enumeration and the exhaustive search that
//! splits ten players into two five-player teams of near-equal strength.

pub mod balancer;
pub mod combinations;

// Re-export commonly used types
pub use balancer::{balance, ExhaustiveBalancer, TeamBalancer, TieBreak};
pub use combinations::{binomial, Combinations};
