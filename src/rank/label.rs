//! Rank values and their text labels
//!
//! Labels look like `UNRANKED`, `GOLD II` or `MASTER`. This is the format the
//! rank lookup hands over and the format the review table offers for overrides.

use crate::error::{BalancerError, Result};
use crate::rank::tier::{parse_division, ApexTier, Division, Tier};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the no-rank sentinel
pub const UNRANKED_LABEL: &str = "UNRANKED";

/// A competitive rank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rank {
    #[default]
    Unranked,
    Standard { tier: Tier, division: Division },
    Apex(ApexTier),
}

impl Rank {
    pub fn standard(tier: Tier, division: Division) -> Self {
        Rank::Standard { tier, division }
    }

    /// Build a rank from the raw (tier, division) pair of a rank lookup
    ///
    /// Apex tiers and `UNRANKED` take an empty division; standard tiers require one.
    pub fn from_parts(tier: &str, division: &str) -> Result<Self> {
        let tier = tier.trim();
        let division = division.trim();

        if tier.eq_ignore_ascii_case(UNRANKED_LABEL) {
            return if division.is_empty() {
                Ok(Rank::Unranked)
            } else {
                Err(BalancerError::invalid_rank(format!(
                    "{} cannot carry division '{}'",
                    UNRANKED_LABEL, division
                ))
                .into())
            };
        }

        if let Some(apex) = ApexTier::from_label(tier) {
            return if division.is_empty() {
                Ok(Rank::Apex(apex))
            } else {
                Err(BalancerError::invalid_rank(format!(
                    "{} cannot carry division '{}'",
                    apex, division
                ))
                .into())
            };
        }

        let standard = Tier::from_label(tier)
            .ok_or_else(|| BalancerError::invalid_rank(format!("unknown tier '{}'", tier)))?;
        if division.is_empty() {
            return Err(
                BalancerError::invalid_rank(format!("{} requires a division", standard)).into(),
            );
        }

        Ok(Rank::standard(standard, parse_division(division)?))
    }

    /// Tier label, `UNRANKED` for the sentinel
    pub fn tier_label(&self) -> &'static str {
        match self {
            Rank::Unranked => UNRANKED_LABEL,
            Rank::Standard { tier, .. } => tier.as_str(),
            Rank::Apex(apex) => apex.as_str(),
        }
    }

    /// Division label, empty for apex and unranked
    pub fn division_label(&self) -> &'static str {
        match self {
            Rank::Standard { division, .. } => division.as_str(),
            Rank::Unranked | Rank::Apex(_) => "",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Standard { tier, division } => write!(f, "{} {}", tier, division),
            _ => f.write_str(self.tier_label()),
        }
    }
}

impl FromStr for Rank {
    type Err = anyhow::Error;

    fn from_str(label: &str) -> Result<Self> {
        let mut parts = label.split_whitespace();
        let tier = parts
            .next()
            .ok_or_else(|| BalancerError::invalid_rank("empty rank label"))?;
        let division = parts.next().unwrap_or("");
        if let Some(extra) = parts.next() {
            return Err(BalancerError::invalid_rank(format!(
                "unexpected '{}' in rank label '{}'",
                extra,
                label.trim()
            ))
            .into());
        }
        Rank::from_parts(tier, division)
    }
}

impl TryFrom<String> for Rank {
    type Error = anyhow::Error;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.to_string()
    }
}

/// Every selectable rank in non-decreasing strength order
///
/// `UNRANKED`, then each standard tier IV→I, then the apex tiers.
pub fn rank_options() -> Vec<Rank> {
    let mut options = Vec::with_capacity(1 + Tier::ALL.len() * Division::ALL.len() + 3);
    options.push(Rank::Unranked);
    for tier in Tier::ALL {
        for division in Division::ALL {
            options.push(Rank::standard(tier, division));
        }
    }
    options.extend(ApexTier::ALL.into_iter().map(Rank::Apex));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<Rank>) {
        let err = result.unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<BalancerError>(),
                Some(BalancerError::InvalidRank { .. })
            ),
            "expected InvalidRank, got {err}"
        );
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(Rank::from_parts("UNRANKED", "").unwrap(), Rank::Unranked);
        assert_eq!(
            Rank::from_parts("GOLD", "II").unwrap(),
            Rank::standard(Tier::Gold, Division::Two)
        );
        assert_eq!(
            Rank::from_parts("MASTER", "").unwrap(),
            Rank::Apex(ApexTier::Master)
        );
    }

    #[test]
    fn test_from_parts_rejects_invalid_combinations() {
        assert_invalid(Rank::from_parts("MASTER", "I"));
        assert_invalid(Rank::from_parts("UNRANKED", "IV"));
        assert_invalid(Rank::from_parts("GOLD", ""));
        assert_invalid(Rank::from_parts("GOLD", "V"));
        assert_invalid(Rank::from_parts("WOOD", "I"));
        assert_invalid(Rank::from_parts("", ""));
    }

    #[test]
    fn test_label_round_trip_for_all_options() {
        for rank in rank_options() {
            let label = rank.to_string();
            assert_eq!(label.parse::<Rank>().unwrap(), rank, "label {label}");
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_spacing() {
        assert_eq!(
            "  platinum   iii ".parse::<Rank>().unwrap(),
            Rank::standard(Tier::Platinum, Division::Three)
        );
        assert_eq!("challenger".parse::<Rank>().unwrap(), Rank::Apex(ApexTier::Challenger));
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        assert_invalid("".parse::<Rank>());
        assert_invalid("GOLD II EXTRA".parse::<Rank>());
        assert_invalid("DIAMOND".parse::<Rank>());
    }

    #[test]
    fn test_rank_options_layout() {
        let options = rank_options();
        assert_eq!(options.len(), 32);
        assert_eq!(options[0], Rank::Unranked);
        assert_eq!(options[1].to_string(), "IRON IV");
        assert_eq!(options[28].to_string(), "DIAMOND I");
        assert_eq!(options[29].to_string(), "MASTER");
        assert_eq!(options[31].to_string(), "CHALLENGER");
    }

    #[test]
    fn test_serde_as_label() {
        let rank = Rank::standard(Tier::Emerald, Division::One);
        assert_eq!(serde_json::to_string(&rank).unwrap(), "\"EMERALD I\"");

        let parsed: Rank = serde_json::from_str("\"GRANDMASTER\"").unwrap();
        assert_eq!(parsed, Rank::Apex(ApexTier::Grandmaster));

        assert!(serde_json::from_str::<Rank>("\"GRANDMASTER I\"").is_err());
    }
}
