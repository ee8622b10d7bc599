use serde::Serialize;

use super::{Chart, ChartKind, ChartPoint, Slice, StatCard};
use crate::domain::formatting::{format_minutes_seconds, percent_of};
use crate::domain::ids::GridId;
use crate::domain::statistics::{Distribution, DistributionBin, GridStatistics};

/// A histogram bin with its axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinPoint {
    pub range: String,
    pub count: u64,
    pub start: f64,
    pub end: f64,
    /// Midpoint in minutes; only set for completion-time bins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_minutes: Option<f64>,
}

impl BinPoint {
    /// Score bins are labelled with rounded bounds, e.g. `"0-10"`.
    pub fn score(bin: &DistributionBin) -> Self {
        Self {
            range: format!("{}-{}", bin.start.round() as i64, bin.end.round() as i64),
            count: bin.count,
            start: bin.start,
            end: bin.end,
            midpoint_minutes: None,
        }
    }

    /// Time bins arrive in seconds and are labelled in whole minutes, e.g. `"1-3 min"`.
    pub fn completion_time(bin: &DistributionBin) -> Self {
        Self {
            range: format!(
                "{}-{} min",
                (bin.start / 60.0).floor() as i64,
                (bin.end / 60.0).floor() as i64
            ),
            count: bin.count,
            start: bin.start,
            end: bin.end,
            midpoint_minutes: Some((bin.start + bin.end) / 120.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummaryView {
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSummaryView {
    pub min: String,
    pub mean: String,
    pub median: String,
    pub max: String,
}

/// Average words found against the words left to find.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordsBreakdown {
    pub found: i64,
    pub remaining: i64,
    pub total: u64,
    pub found_percent: f64,
    pub remaining_percent: f64,
}

impl WordsBreakdown {
    pub fn new(average_found: f64, total_words: u64) -> Self {
        let found = if average_found.is_finite() {
            average_found.round() as i64
        } else {
            0
        };
        let remaining = (total_words as i64 - found).max(0);
        let total = total_words as f64;

        Self {
            found,
            remaining,
            total: total_words,
            found_percent: percent_of(found as f64, total),
            remaining_percent: percent_of(remaining as f64, total),
        }
    }

    pub fn slices(&self) -> Vec<Slice> {
        vec![
            Slice::new("Words found", self.found as f64),
            Slice::new("Words remaining", self.remaining as f64),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridStatsView {
    pub grid_id: GridId,
    pub grid_number: i64,
    pub cards: Vec<StatCard>,
    pub completion: Vec<Slice>,
    pub joker: Vec<Slice>,
    pub words: WordsBreakdown,
    pub score_bins: Vec<BinPoint>,
    pub score_summary: ScoreSummaryView,
    pub time_bins: Vec<BinPoint>,
    pub time_summary: TimeSummaryView,
}

impl GridStatsView {
    pub fn from_domain(
        grid: GridId,
        stats: &GridStatistics,
        scores: &Distribution,
        times: &Distribution,
    ) -> Self {
        let completion_rate = stats.completion_rate;
        let joker_used = stats.joker_usage.total_used;

        let cards = vec![
            StatCard::new("Total players", stats.total_players.to_string()),
            StatCard::new("Total submissions", stats.total_submissions.to_string()),
            StatCard::new("Completion rate", format!("{completion_rate:.1}%")),
        ];

        Self {
            grid_id: grid,
            grid_number: stats.grid_number.unwrap_or(grid.into_inner()),
            cards,
            completion: vec![
                Slice::new("Completed", completion_rate),
                Slice::new("Not completed", 100.0 - completion_rate),
            ],
            joker: vec![
                Slice::new("With joker", joker_used as f64),
                Slice::new(
                    "Without joker",
                    stats.total_submissions.saturating_sub(joker_used) as f64,
                ),
            ],
            words: WordsBreakdown::new(
                stats.words_stats.average_found,
                stats.words_stats.total_words,
            ),
            score_bins: scores.bins.iter().map(BinPoint::score).collect(),
            score_summary: ScoreSummaryView {
                min: scores.min.round(),
                mean: scores.mean.round(),
                median: stats.scores.median.round(),
                max: scores.max.round(),
            },
            time_bins: times.bins.iter().map(BinPoint::completion_time).collect(),
            time_summary: TimeSummaryView {
                min: format_minutes_seconds(times.min),
                mean: format_minutes_seconds(times.mean),
                median: format_minutes_seconds(times.median.unwrap_or_default()),
                max: format_minutes_seconds(times.max),
            },
        }
    }

    pub fn charts(&self) -> Vec<Chart> {
        vec![
            Chart::bar(
                "Score distribution",
                self.score_bins
                    .iter()
                    .map(|b| ChartPoint::new(b.range.clone(), b.count as f64))
                    .collect(),
            ),
            Chart::bar(
                "Completion time distribution",
                self.time_bins
                    .iter()
                    .map(|b| ChartPoint::new(b.range.clone(), b.count as f64))
                    .collect(),
            ),
            Chart::pie("Completion rate (%)", &self.completion),
            Chart::pie("Joker usage", &self.joker),
            Chart {
                title: "Average words found",
                kind: ChartKind::Pie,
                points: self
                    .words
                    .slices()
                    .iter()
                    .zip([self.words.found_percent, self.words.remaining_percent])
                    .map(|(slice, percent)| {
                        ChartPoint::new(slice.name, slice.value)
                            .with_detail(format!("{percent:.1}%"))
                    })
                    .collect(),
            },
        ]
    }
}
