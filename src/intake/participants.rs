//! Participant review list
//!
//! Resolved participants can be deselected or have their rank corrected
//! before the selected ten are handed to a balancer.

use crate::balance::TeamBalancer;
use crate::error::{BalancerError, Result};
use crate::rank::Rank;
use crate::types::{Player, TeamPartition, ROSTER_SIZE};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One row of the review list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub player: Player,
    pub selected: bool,
}

/// Ordered participants with selection state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantList {
    entries: Vec<Participant>,
}

impl ParticipantList {
    /// Every player starts selected
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            entries: players
                .into_iter()
                .map(|player| Participant {
                    player,
                    selected: true,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[Participant] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Participant> {
        self.entries
            .iter_mut()
            .find(|entry| entry.player.name() == name)
            .ok_or_else(|| {
                BalancerError::PlayerNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }

    pub fn set_selected(&mut self, name: &str, selected: bool) -> Result<()> {
        self.find_mut(name)?.selected = selected;
        Ok(())
    }

    /// Correct a participant's rank; strength is re-scored from the new rank
    pub fn override_rank(&mut self, name: &str, rank: Rank) -> Result<()> {
        let entry = self.find_mut(name)?;
        info!(
            "Overriding rank for {}: {} -> {}",
            name,
            entry.player.rank(),
            rank
        );
        entry.player.set_rank(rank);
        Ok(())
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    /// Selected players in list order
    pub fn selected_roster(&self) -> Vec<Player> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.player.clone())
            .collect()
    }

    /// Balance the selected players; exactly ten must be selected
    pub fn balance_selected(&self, balancer: &dyn TeamBalancer) -> Result<TeamPartition> {
        let selected = self.selected_count();
        if selected != ROSTER_SIZE {
            return Err(BalancerError::RosterSize {
                expected: ROSTER_SIZE,
                actual: selected,
            }
            .into());
        }
        balancer.balance(&self.selected_roster())
    }
}
