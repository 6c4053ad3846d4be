//! Rank model and strength scoring
//!
//! This module holds the ordered tier/division tables, rank labels and the
//! scoring function that turns a rank into a comparable strength.

pub mod label;
pub mod scorer;
pub mod tier;

// Re-export commonly used types
pub use label::{rank_options, Rank, UNRANKED_LABEL};
pub use scorer::{apex_strength, score, score_parts};
pub use tier::{ApexTier, Division, Tier};
