//! Team Balancer - rank-based 5v5 team balancing for custom lobbies
//!
//! This crate scores competitive ranks into strengths and splits ten players
//! into two five-player teams with the smallest possible strength gap.

pub mod balance;
pub mod config;
pub mod error;
pub mod intake;
pub mod rank;
pub mod report;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{BalancerError, Result};
pub use types::*;

// Re-export key components
pub use balance::{balance, ExhaustiveBalancer, TeamBalancer, TieBreak};
pub use rank::{score, score_parts, Rank};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
