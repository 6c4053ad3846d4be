//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use team_balancer::error::{BalancerError, Result};
use team_balancer::intake::{PlayerHandle, RankResolver};
use team_balancer::rank::{ApexTier, Division, Tier};
use team_balancer::{Player, Rank, Strength, TeamPartition};

/// Rank resolver that records every lookup and can be told to fail
#[derive(Debug, Default)]
pub struct RecordingRankResolver {
    ranks: HashMap<String, Rank>,
    failing: HashSet<String>,
    lookups: Mutex<Vec<String>>,
}

impl RecordingRankResolver {
    pub fn new(ranks: &[(&str, &str)]) -> Self {
        Self {
            ranks: ranks
                .iter()
                .map(|(handle, label)| (handle.to_string(), label.parse().unwrap()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make lookups for this handle fail
    pub fn failing_for(mut self, handle: &str) -> Self {
        self.failing.insert(handle.to_string());
        self
    }

    /// All handles looked up so far (for testing)
    pub fn lookups(&self) -> Vec<String> {
        self.lookups
            .lock()
            .map(|lookups| lookups.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RankResolver for RecordingRankResolver {
    async fn resolve(&self, handle: &PlayerHandle) -> Result<Option<Rank>> {
        let key = handle.to_string();
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(key.clone());
        }

        if self.failing.contains(&key) {
            return Err(BalancerError::RankResolutionFailed {
                handle: key,
                reason: "lookup service unavailable".to_string(),
            }
            .into());
        }

        Ok(self.ranks.get(&key).copied())
    }
}

/// Rank whose strength equals `strength`; must be a valid strength value
pub fn rank_for_strength(strength: Strength) -> Rank {
    match strength {
        0 => Rank::Unranked,
        2800 => Rank::Apex(ApexTier::Master),
        3000 => Rank::Apex(ApexTier::Grandmaster),
        3100 => Rank::Apex(ApexTier::Challenger),
        s if s < 2800 && s % 100 == 0 => Rank::standard(
            Tier::ALL[(s / 400) as usize],
            Division::ALL[((s % 400) / 100) as usize],
        ),
        other => panic!("no rank scores {}", other),
    }
}

/// Roster named `player0..` with the given strengths
pub fn roster_from_strengths(strengths: &[Strength]) -> Vec<Player> {
    strengths
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(format!("player{}#JP1", i), rank_for_strength(s)))
        .collect()
}

/// A realistic mixed lobby of ten
pub fn mixed_lobby() -> Vec<Player> {
    [
        ("Hide on bush#KR1", "CHALLENGER"),
        ("たろう#JP1", "GOLD II"),
        ("はなこ#JP1", "SILVER IV"),
        ("midlaner#0001", "EMERALD I"),
        ("support main#JP1", "PLATINUM III"),
        ("newbie#JP1", "UNRANKED"),
        ("jungler#JG", "DIAMOND II"),
        ("toplaner#TOP", "MASTER"),
        ("adc#BOT", "BRONZE I"),
        ("coach#JP1", "IRON III"),
    ]
    .iter()
    .map(|(name, label)| Player::new(*name, label.parse().unwrap()))
    .collect()
}

/// Sorted member names of each team as an unordered pair
pub fn partition_as_sets(partition: &TeamPartition) -> [Vec<String>; 2] {
    let names = |players: &[Player]| {
        let mut names: Vec<String> = players.iter().map(|p| p.name().to_string()).collect();
        names.sort();
        names
    };
    let mut sets = [names(&partition.blue.players), names(&partition.red.players)];
    sets.sort();
    sets
}

/// Smallest achievable |sum - total/2| over all 5-subsets, by plain nested loops
pub fn brute_force_best_deviation(strengths: &[Strength]) -> f64 {
    let total: Strength = strengths.iter().sum();
    let ideal = f64::from(total) / 2.0;
    let n = strengths.len();
    let mut best = f64::INFINITY;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let sum = strengths[a] + strengths[b] + strengths[c] + strengths[d]
                            + strengths[e];
                        best = best.min((f64::from(sum) - ideal).abs());
                    }
                }
            }
        }
    }
    best
}
