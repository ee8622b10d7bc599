use serde::Serialize;

use crate::domain::formatting::{
    NOT_AVAILABLE, check_mark, format_duration, format_short_timestamp, medal,
};
use crate::domain::statistics::LeaderboardEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub medal: Option<&'static str>,
    pub is_top_rank: bool,
    pub pseudo: String,
    pub score: String,
    pub time: String,
    pub joker: &'static str,
    pub completed: &'static str,
    pub submitted_at: String,
}

impl LeaderboardRow {
    pub fn from_domain(entry: &LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            medal: medal(entry.rank),
            is_top_rank: (1..=3).contains(&entry.rank),
            pseudo: entry.pseudo.clone(),
            score: entry
                .final_score
                .map_or_else(|| NOT_AVAILABLE.to_string(), |s| format!("{s:.1}")),
            time: format_duration(entry.completion_time),
            joker: check_mark(entry.joker_used),
            completed: check_mark(entry.is_completed),
            submitted_at: format_short_timestamp(entry.submitted_at.as_deref()),
        }
    }

    /// Rank cell with its medal, e.g. `🥇 1`.
    pub fn rank_label(&self) -> String {
        match self.medal {
            Some(medal) => format!("{medal} {}", self.rank),
            None => self.rank.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub grid_number: i64,
    pub rows: Vec<LeaderboardRow>,
}

impl LeaderboardView {
    pub fn from_domain(grid_number: i64, entries: &[LeaderboardEntry]) -> Self {
        Self {
            grid_number,
            rows: entries.iter().map(LeaderboardRow::from_domain).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub const HEADERS: [&'static str; 7] = [
        "Rank",
        "Player",
        "Score",
        "Time",
        "Joker",
        "Completed",
        "Date",
    ];

    /// Table cells in `HEADERS` order.
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    row.rank_label(),
                    row.pseudo.clone(),
                    row.score.clone(),
                    row.time.clone(),
                    row.joker.to_string(),
                    row.completed.to_string(),
                    row.submitted_at.clone(),
                ]
            })
            .collect()
    }
}
