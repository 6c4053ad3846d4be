//! Error types for the team balancer
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific balancing scenarios
#[derive(Debug, thiserror::Error)]
pub enum BalancerError {
    #[error("Invalid rank: {reason}")]
    InvalidRank { reason: String },

    #[error("Roster must contain exactly {expected} players, got {actual}")]
    RosterSize { expected: usize, actual: usize },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Rank resolution failed for {handle}: {reason}")]
    RankResolutionFailed { handle: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl BalancerError {
    pub(crate) fn invalid_rank(reason: impl Into<String>) -> Self {
        Self::InvalidRank {
            reason: reason.into(),
        }
    }
}
