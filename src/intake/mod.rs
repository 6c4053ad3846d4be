//! Roster intake from lobby chat
//!
//! This module covers everything before balancing: extracting handles from a
//! pasted chat log, resolving their ranks, and reviewing the participant list.

pub mod chat_log;
pub mod participants;
pub mod resolver;

// Re-export commonly used types
pub use chat_log::{parse_lobby_log, PlayerHandle, DEFAULT_JOIN_SUFFIXES};
pub use participants::{Participant, ParticipantList};
pub use resolver::{resolve_participants, RankResolver, StaticRankResolver};
