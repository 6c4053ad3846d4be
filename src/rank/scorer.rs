//! Rank to strength scoring
//!
//! Standard ranks score linearly from their table positions. Apex tiers sit on
//! fixed values above Diamond I, with wider gaps between them.

use crate::error::Result;
use crate::rank::label::Rank;
use crate::rank::tier::ApexTier;
use crate::types::Strength;

/// Strength added per standard tier step
pub const TIER_STEP: Strength = 400;

/// Strength added per division step within a tier
pub const DIVISION_STEP: Strength = 100;

/// Strength of the unranked sentinel
pub const UNRANKED_STRENGTH: Strength = 0;

/// Fixed strength of an apex tier
pub const fn apex_strength(tier: ApexTier) -> Strength {
    match tier {
        ApexTier::Master => 2800,
        ApexTier::Grandmaster => 3000,
        ApexTier::Challenger => 3100,
    }
}

/// Score a rank
pub fn score(rank: &Rank) -> Strength {
    match rank {
        Rank::Unranked => UNRANKED_STRENGTH,
        Rank::Standard { tier, division } => {
            tier.index() as Strength * TIER_STEP + division.index() as Strength * DIVISION_STEP
        }
        Rank::Apex(apex) => apex_strength(*apex),
    }
}

/// Score the raw (tier, division) pair handed over by a rank lookup
///
/// Fails with `InvalidRank` when the pair is not a recognized combination.
pub fn score_parts(tier: &str, division: &str) -> Result<Strength> {
    Ok(score(&Rank::from_parts(tier, division)?))
}
