//! Exhaustive 5v5 team balancing
//!
//! Every 5-player subset of the roster is scored against the ideal split of
//! half the total strength. The search is exact and deliberately exhaustive;
//! C(10, 5) = 252 candidates is small enough that no pruning is needed.

use crate::balance::combinations::Combinations;
use crate::error::{BalancerError, Result};
use crate::types::{Player, Team, TeamPartition, TeamSide, ROSTER_SIZE, TEAM_SIZE};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which of several equally balanced subsets becomes Blue
///
/// Neither policy applies a secondary criterion; they only pick an end of the
/// lexicographic enumeration over roster positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First minimal subset in enumeration order
    #[default]
    #[serde(alias = "first", alias = "first-found")]
    FirstFound,
    /// Last minimal subset in enumeration order
    #[serde(alias = "last", alias = "last-found")]
    LastFound,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstFound => write!(f, "first_found"),
            TieBreak::LastFound => write!(f, "last_found"),
        }
    }
}

/// Accepts exactly the names the serde representation accepts
impl FromStr for TieBreak {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let deserializer: StrDeserializer<'_, ValueError> = value.into_deserializer();
        TieBreak::deserialize(deserializer).map_err(|_| {
            BalancerError::ConfigurationError {
                message: format!("Unknown tie-break policy: {}", value),
            }
            .into()
        })
    }
}

/// Trait for splitting a roster into two teams
pub trait TeamBalancer: Send + Sync {
    /// Partition exactly [`ROSTER_SIZE`] players into Blue and Red
    fn balance(&self, roster: &[Player]) -> Result<TeamPartition>;
}

/// Brute-force balancer over all 5-of-10 subsets
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveBalancer {
    tie_break: TieBreak,
}

impl ExhaustiveBalancer {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    fn replaces_best(&self, deviation: u64, best: u64) -> bool {
        match self.tie_break {
            TieBreak::FirstFound => deviation < best,
            TieBreak::LastFound => deviation <= best,
        }
    }
}

impl TeamBalancer for ExhaustiveBalancer {
    fn balance(&self, roster: &[Player]) -> Result<TeamPartition> {
        if roster.len() != ROSTER_SIZE {
            return Err(BalancerError::RosterSize {
                expected: ROSTER_SIZE,
                actual: roster.len(),
            }
            .into());
        }

        let strengths: Vec<u64> = roster.iter().map(|p| u64::from(p.strength())).collect();
        let total: u64 = strengths.iter().sum();

        // |2 * sum - total| orders candidates exactly like |sum - total / 2|
        let deviation_of = |subset: &[usize]| {
            let sum: u64 = subset.iter().map(|&i| strengths[i]).sum();
            (2 * sum).abs_diff(total)
        };

        // Enumeration starts at the first TEAM_SIZE positions; that subset seeds the search
        let mut blue_indices: Vec<usize> = (0..TEAM_SIZE).collect();
        let mut deviation = deviation_of(&blue_indices);
        let mut candidates = 1usize;
        for subset in Combinations::new(ROSTER_SIZE, TEAM_SIZE).skip(1) {
            candidates += 1;
            let candidate = deviation_of(&subset);
            if self.replaces_best(candidate, deviation) {
                deviation = candidate;
                blue_indices = subset;
            }
        }

        debug!(
            "Balanced {} players over {} candidates: total {}, ideal {:.1}, deviation {:.1} ({})",
            roster.len(),
            candidates,
            total,
            total as f64 / 2.0,
            deviation as f64 / 2.0,
            self.tie_break
        );

        let mut on_blue = [false; ROSTER_SIZE];
        for &i in &blue_indices {
            on_blue[i] = true;
        }

        let (blue, red): (Vec<(usize, &Player)>, Vec<(usize, &Player)>) =
            roster.iter().enumerate().partition(|(i, _)| on_blue[*i]);

        Ok(TeamPartition {
            blue: Team::new(
                TeamSide::Blue,
                blue.into_iter().map(|(_, p)| p.clone()).collect(),
            ),
            red: Team::new(
                TeamSide::Red,
                red.into_iter().map(|(_, p)| p.clone()).collect(),
            ),
        })
    }
}

/// Balance a roster with the default first-found tie-break
pub fn balance(roster: &[Player]) -> Result<TeamPartition> {
    ExhaustiveBalancer::default().balance(roster)
}
