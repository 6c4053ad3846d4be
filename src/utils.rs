//! Utility functions for the team balancer

use crate::types::Strength;
use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Calculate the absolute difference between two strengths
pub fn strength_difference(strength1: Strength, strength2: Strength) -> Strength {
    strength1.abs_diff(strength2)
}

/// Check if two strengths are within the given tolerance
pub fn strengths_within_tolerance(
    strength1: Strength,
    strength2: Strength,
    tolerance: Strength,
) -> bool {
    strength_difference(strength1, strength2) <= tolerance
}
