//! Ordered lookup tables for the tier/division rank model
//!
//! Ordering comes from each table's position, never from comparing labels.

use crate::error::{BalancerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard tiers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
}

impl Tier {
    pub const ALL: [Tier; 7] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
    ];

    /// Position in [`Tier::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
        }
    }

    /// Look up a tier by label, ignoring ASCII case
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Divisions within a standard tier, weakest (IV) first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "IV")]
    Four,
    #[serde(rename = "III")]
    Three,
    #[serde(rename = "II")]
    Two,
    #[serde(rename = "I")]
    One,
}

impl Division {
    pub const ALL: [Division; 4] = [
        Division::Four,
        Division::Three,
        Division::Two,
        Division::One,
    ];

    /// Position in [`Division::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Division::Four => "IV",
            Division::Three => "III",
            Division::Two => "II",
            Division::One => "I",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|division| division.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tiers above every standard tier; they carry no division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApexTier {
    Master,
    Grandmaster,
    Challenger,
}

impl ApexTier {
    pub const ALL: [ApexTier; 3] = [ApexTier::Master, ApexTier::Grandmaster, ApexTier::Challenger];

    pub fn as_str(self) -> &'static str {
        match self {
            ApexTier::Master => "MASTER",
            ApexTier::Grandmaster => "GRANDMASTER",
            ApexTier::Challenger => "CHALLENGER",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ApexTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a division label, failing with `InvalidRank`
pub(crate) fn parse_division(label: &str) -> Result<Division> {
    Division::from_label(label).ok_or_else(|| {
        BalancerError::invalid_rank(format!("unknown division '{}'", label)).into()
    })
}
