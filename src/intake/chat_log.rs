//! Lobby chat log parsing
//!
//! Players are collected by pasting the lobby chat, where every join notice
//! carries a Riot-style handle (`name#tag`) followed by a join message.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Join-message suffixes stripped from a chat line by default
pub const DEFAULT_JOIN_SUFFIXES: [&str; 4] = [
    "がロビーに参加しました。",
    "がロビーに参加しました",
    " joined the lobby.",
    " joined the lobby",
];

/// A player handle as `game_name#tag_line`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHandle {
    pub game_name: String,
    pub tag_line: String,
}

impl PlayerHandle {
    /// Split `name#tag` at the first `#`, dropping invisible characters
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, tag) = raw.split_once('#')?;
        let game_name = sanitize(name);
        let tag_line = sanitize(tag);
        if game_name.is_empty() || tag_line.is_empty() {
            return None;
        }
        Some(Self {
            game_name,
            tag_line,
        })
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Remove control and bidi-isolate characters, then trim whitespace
///
/// Chat copy-paste wraps names in U+2066..U+2069 which must not reach lookups.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() && !is_invisible_format(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_invisible_format(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2069}' | '\u{FEFF}'
    )
}

/// Extract unique player handles from a pasted lobby chat, in first-seen order
pub fn parse_lobby_log<S: AsRef<str>>(text: &str, join_suffixes: &[S]) -> Vec<PlayerHandle> {
    let mut handles: Vec<PlayerHandle> = Vec::new();

    for line in text.lines() {
        if !line.contains('#') {
            continue;
        }

        let mut entry = line.trim_end();
        for suffix in join_suffixes {
            if let Some(stripped) = entry.strip_suffix(suffix.as_ref()) {
                entry = stripped;
                break;
            }
        }

        match PlayerHandle::parse(entry) {
            Some(handle) if handles.contains(&handle) => {
                debug!("Skipping duplicate handle {}", handle);
            }
            Some(handle) => handles.push(handle),
            None => debug!("Skipping chat line without a usable handle: {:?}", line),
        }
    }

    handles
}
