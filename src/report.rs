//! Rendering of balancing results
//!
//! Results are shown either as a side-by-side text table or as JSON.

use crate::types::{Player, Strength, TeamPartition, TeamSide};
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// JSON envelope around a partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    pub generated_at: DateTime<Utc>,
    pub ideal_team_strength: f64,
    pub difference: Strength,
    pub partition: TeamPartition,
}

impl BalanceReport {
    pub fn new(partition: TeamPartition) -> Self {
        Self {
            generated_at: current_timestamp(),
            ideal_team_strength: partition.ideal_team_strength(),
            difference: partition.difference(),
            partition,
        }
    }
}

fn cell(player: Option<&Player>) -> (String, String) {
    player
        .map(|p| (p.name().to_string(), p.rank().to_string()))
        .unwrap_or_default()
}

/// Render Blue and Red side by side
pub fn render_table(partition: &TeamPartition) -> String {
    let blue = &partition.blue.players;
    let red = &partition.red.players;
    let rows = blue.len().max(red.len());

    let rendered: Vec<((String, String), (String, String))> = (0..rows)
        .map(|i| (cell(blue.get(i)), cell(red.get(i))))
        .collect();

    let name_w = column_width(
        rendered.iter().flat_map(|((bn, _), (rn, _))| [bn, rn]),
        "Player".len(),
    );
    let rank_w = column_width(
        rendered.iter().flat_map(|((_, br), (_, rr))| [br, rr]),
        "Rank".len(),
    );
    let side_w = name_w + rank_w + 3;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<side_w$} | {:<side_w$}",
        TeamSide::Blue.to_string(),
        TeamSide::Red.to_string()
    );
    let _ = writeln!(
        out,
        "{:<name_w$} | {:<rank_w$} | {:<name_w$} | {:<rank_w$}",
        "Player", "Rank", "Player", "Rank"
    );
    let _ = writeln!(out, "{}", "-".repeat(side_w * 2 + 3));
    for ((blue_name, blue_rank), (red_name, red_rank)) in &rendered {
        let _ = writeln!(
            out,
            "{} | {} | {} | {}",
            pad(blue_name, name_w),
            pad(blue_rank, rank_w),
            pad(red_name, name_w),
            pad(red_rank, rank_w)
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(side_w * 2 + 3));
    let _ = writeln!(
        out,
        "{:<side_w$} | {:<side_w$}",
        format!("Strength: {}", partition.blue.strength),
        format!("Strength: {}", partition.red.strength)
    );
    let _ = writeln!(
        out,
        "Difference: {} (ideal per team: {:.1})",
        partition.difference(),
        partition.ideal_team_strength()
    );
    out
}

/// Widest value in chars so multi-byte names line up
fn column_width<'a>(values: impl Iterator<Item = &'a String>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(min)
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}
