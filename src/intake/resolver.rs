//! Rank resolution interface and implementations
//!
//! The remote rank lookup lives outside this crate. It is modeled as a trait so
//! callers can plug in an HTTP client while tests and the CLI use a static table.

use crate::error::{BalancerError, Result};
use crate::intake::chat_log::PlayerHandle;
use crate::intake::participants::ParticipantList;
use crate::rank::Rank;
use crate::types::Player;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Trait for looking up a player's current solo-queue rank
#[async_trait]
pub trait RankResolver: Send + Sync {
    /// Resolve a handle to a rank
    ///
    /// `Ok(None)` means the player exists but has no ranked entry and is
    /// treated as unranked. `Err` is a lookup failure and is propagated.
    async fn resolve(&self, handle: &PlayerHandle) -> Result<Option<Rank>>;
}

/// Rank resolver backed by an in-memory table keyed by `name#tag`
#[derive(Debug, Default)]
pub struct StaticRankResolver {
    ranks: RwLock<HashMap<String, Rank>>,
}

impl StaticRankResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(handle, rank)` pairs
    pub fn with_ranks<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Rank)>,
        S: Into<String>,
    {
        let ranks = entries
            .into_iter()
            .map(|(handle, rank)| (handle.into(), rank))
            .collect();
        Self {
            ranks: RwLock::new(ranks),
        }
    }

    /// Parse a TOML table of `"name#tag" = "RANK LABEL"` entries
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: HashMap<String, Rank> = toml::from_str(contents)?;
        Ok(Self::with_ranks(table))
    }

    /// Load a rank table from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let resolver = Self::from_toml_str(&contents)?;
        info!("Loaded {} ranks from {}", resolver.len(), path.display());
        Ok(resolver)
    }

    /// Add or replace a rank
    pub fn insert(&self, handle: impl Into<String>, rank: Rank) -> Result<()> {
        let handle = handle.into();
        let mut ranks = self
            .ranks
            .write()
            .map_err(|_| BalancerError::RankResolutionFailed {
                handle: handle.clone(),
                reason: "rank table lock poisoned".to_string(),
            })?;
        ranks.insert(handle, rank);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ranks.read().map(|ranks| ranks.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RankResolver for StaticRankResolver {
    async fn resolve(&self, handle: &PlayerHandle) -> Result<Option<Rank>> {
        let ranks = self
            .ranks
            .read()
            .map_err(|_| BalancerError::RankResolutionFailed {
                handle: handle.to_string(),
                reason: "rank table lock poisoned".to_string(),
            })?;
        Ok(ranks.get(&handle.to_string()).copied())
    }
}

/// Resolve every handle concurrently into a participant list
///
/// Output order follows `handles`. Handles without a ranked entry become
/// unranked; the first lookup failure aborts the whole batch.
pub async fn resolve_participants(
    resolver: Arc<dyn RankResolver>,
    handles: &[PlayerHandle],
) -> Result<ParticipantList> {
    let mut lookups = JoinSet::new();
    for (index, handle) in handles.iter().cloned().enumerate() {
        let resolver = resolver.clone();
        lookups.spawn(async move {
            let rank = resolver.resolve(&handle).await;
            (index, handle, rank)
        });
    }

    let mut resolved: Vec<Option<Player>> = vec![None; handles.len()];
    while let Some(joined) = lookups.join_next().await {
        let (index, handle, rank) = joined?;
        let rank = rank?.unwrap_or_else(|| {
            debug!("{} has no ranked entry, treating as unranked", handle);
            Rank::Unranked
        });
        resolved[index] = Some(Player::new(handle.to_string(), rank));
    }

    let players: Vec<Player> = resolved.into_iter().flatten().collect();
    info!("Resolved ranks for {} participants", players.len());
    Ok(ParticipantList::new(players))
}
