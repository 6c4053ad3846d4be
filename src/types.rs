//! Common types used throughout the team balancer

use crate::rank::{score, Rank};
use crate::utils::strength_difference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill strength derived from a rank
pub type Strength = u32;

/// Number of players balanced in one request
pub const ROSTER_SIZE: usize = 10;

/// Players per team
pub const TEAM_SIZE: usize = 5;

/// Which side a team plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Blue,
    Red,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Blue => write!(f, "Blue Team"),
            TeamSide::Red => write!(f, "Red Team"),
        }
    }
}

/// Serialized form of a player; strength is always recomputed from the rank
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub rank: Rank,
}

/// A player with a resolved rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PlayerRecord")]
pub struct Player {
    name: String,
    rank: Rank,
    strength: Strength,
}

impl Player {
    pub fn new(name: impl Into<String>, rank: Rank) -> Self {
        Self {
            name: name.into(),
            strength: score(&rank),
            rank,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Replace the rank and re-score
    pub fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
        self.strength = score(&rank);
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Player::new(record.name, record.rank)
    }
}

/// One side of a balanced match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub side: TeamSide,
    pub players: Vec<Player>,
    pub strength: Strength,
}

impl Team {
    pub fn new(side: TeamSide, players: Vec<Player>) -> Self {
        let strength = players.iter().map(Player::strength).sum();
        Self {
            side,
            players,
            strength,
        }
    }
}

/// Result of balancing a roster into Blue and Red
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPartition {
    pub blue: Team,
    pub red: Team,
}

impl TeamPartition {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Blue => &self.blue,
            TeamSide::Red => &self.red,
        }
    }

    /// Absolute strength gap between the teams
    pub fn difference(&self) -> Strength {
        strength_difference(self.blue.strength, self.red.strength)
    }

    pub fn total_strength(&self) -> Strength {
        self.blue.strength + self.red.strength
    }

    /// Half of the combined strength, the target each team aims for
    pub fn ideal_team_strength(&self) -> f64 {
        f64::from(self.total_strength()) / 2.0
    }
}
