use serde::Serialize;

use super::{Chart, ChartPoint, Slice, StatCard};
use crate::domain::formatting::{format_count, round1, whole_minutes};
use crate::domain::ids::GridId;
use crate::domain::statistics::{GlobalStatistics, GridSummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSummaryRow {
    pub name: String,
    pub grid_id: GridId,
    pub version: String,
    pub players: u64,
    pub completion: f64,
    pub joker: f64,
    pub total_words: u64,
    pub average_words_found: f64,
    pub median_time_secs: f64,
    pub median_time_minutes: u64,
    /// Seconds left over after `median_time_minutes`.
    pub median_time_remainder_secs: u64,
}

impl GridSummaryRow {
    pub fn from_domain(summary: &GridSummary) -> Self {
        let median_time_minutes = whole_minutes(summary.median_completion_time);
        let whole_secs = if summary.median_completion_time > 0.0 {
            summary.median_completion_time.floor() as u64
        } else {
            0
        };

        Self {
            name: format!("Grid {}", summary.grid_id),
            grid_id: summary.grid_id,
            version: summary.grid_version.clone(),
            players: summary.total_players,
            completion: summary.completion_rate,
            joker: summary.joker_usage_rate,
            total_words: summary.total_words,
            average_words_found: summary.average_words_found,
            median_time_secs: summary.median_completion_time,
            median_time_minutes,
            median_time_remainder_secs: whole_secs % 60,
        }
    }

    pub fn median_time_label(&self) -> String {
        format!(
            "{} min {}s",
            self.median_time_minutes, self.median_time_remainder_secs
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStatsView {
    pub cards: Vec<StatCard>,
    pub overview: Vec<ChartPoint>,
    pub grids: Vec<GridSummaryRow>,
    /// Unweighted mean of the per-grid joker rates, rounded to one decimal.
    pub joker_rate: f64,
    pub joker_slices: Vec<Slice>,
}

/// Mean of the per-grid joker usage rates, each grid weighing the same
/// regardless of how many players it had. Zero when there are no grids.
pub fn global_joker_rate(grids: &[GridSummary]) -> f64 {
    if grids.is_empty() {
        return 0.0;
    }
    grids.iter().map(|g| g.joker_usage_rate).sum::<f64>() / grids.len() as f64
}

impl GlobalStatsView {
    pub fn from_domain(stats: &GlobalStatistics) -> Self {
        let cards = vec![
            StatCard::new("Total users", format_count(stats.total_users)),
            StatCard::new("Total grids", format_count(stats.total_grids)),
            StatCard::new("Total submissions", format_count(stats.total_submissions)),
            StatCard::new(
                "Avg submissions / grid",
                format!("{:.1}", stats.average_submissions_per_grid),
            ),
        ];

        let overview = vec![
            ChartPoint::new("Users", stats.total_users as f64),
            ChartPoint::new("Grids", stats.total_grids as f64),
            ChartPoint::new("Submissions", stats.total_submissions as f64),
        ];

        let grids: Vec<GridSummaryRow> = stats
            .grid_stats
            .iter()
            .map(GridSummaryRow::from_domain)
            .collect();

        let mean = global_joker_rate(&stats.grid_stats);
        let joker_slices = vec![
            Slice::new("With joker", round1(mean)),
            Slice::new("Without joker", round1(100.0 - mean)),
        ];

        Self {
            cards,
            overview,
            grids,
            joker_rate: round1(mean),
            joker_slices,
        }
    }

    pub fn charts(&self) -> Vec<Chart> {
        vec![
            Chart::bar("Overview", self.overview.clone()),
            Chart::bar(
                "Players per grid",
                self.grids
                    .iter()
                    .map(|g| ChartPoint::new(g.name.clone(), g.players as f64))
                    .collect(),
            ),
            Chart::bar(
                "Completion rate per grid (%)",
                self.grids
                    .iter()
                    .map(|g| {
                        ChartPoint::new(g.name.clone(), g.completion).with_detail(format!(
                            "{} / {} words on average",
                            g.average_words_found, g.total_words
                        ))
                    })
                    .collect(),
            ),
            Chart::pie("Global joker usage (%)", &self.joker_slices),
            Chart::bar(
                "Median completion time per grid (min)",
                self.grids
                    .iter()
                    .map(|g| {
                        ChartPoint::new(g.name.clone(), g.median_time_minutes as f64)
                            .with_detail(g.median_time_label())
                    })
                    .collect(),
            ),
        ]
    }
}
