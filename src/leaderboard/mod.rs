use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player's standing as produced by the ranking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub user_id: Uuid,
    pub username: String,
    pub score: f64,
    pub wins: u32,
    pub games: u32,
    pub accuracy: f64,
}

/// Wire shape of one leaderboard row on the live feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub rank: usize,
    pub user_id: String,
    pub username: String,
    pub score: f64,
    pub wins: u32,
    pub games: u32,
    pub accuracy: f64,
}

impl DisplayEntry {
    fn from_entry(rank: usize, entry: &Entry) -> Self {
        Self {
            rank,
            user_id: entry.user_id.to_string(),
            username: entry.username.clone(),
            score: entry.score,
            wins: entry.wins,
            games: entry.games,
            accuracy: entry.accuracy,
        }
    }
}

/// Annotates entries with their 1-based position.
///
/// The slice must already be in leaderboard order; nothing is sorted or
/// filtered here, so `rank` is exactly `index + 1`.
pub fn to_display_entries(entries: &[Entry]) -> Vec<DisplayEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| DisplayEntry::from_entry(index + 1, entry))
        .collect()
}
