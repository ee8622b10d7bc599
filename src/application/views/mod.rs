//! Chart-ready view-models built from raw statistics payloads.
//!
//! Every view is rebuilt from its payload on demand; nothing derived here is
//! cached. Renderers (terminal and HTML) only ever see these types.

pub mod global;
pub mod grid;
pub mod leaderboard;
pub mod temporal;

pub use global::{GlobalStatsView, GridSummaryRow};
pub use grid::{BinPoint, GridStatsView, ScoreSummaryView, TimeSummaryView, WordsBreakdown};
pub use leaderboard::{LeaderboardRow, LeaderboardView};
pub use temporal::{HourlyPoint, PeakHourView, TemporalStatsView, TimelinePoint};

use serde::Serialize;

/// Headline figure shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// One slice of a two-part breakdown (pie chart).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
}

impl Slice {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Extra text shown next to the value, such as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A chart is data: a fixed template picks the drawing from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: &'static str,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    pub fn bar(title: &'static str, points: Vec<ChartPoint>) -> Self {
        Self {
            title,
            kind: ChartKind::Bar,
            points,
        }
    }

    pub fn line(title: &'static str, points: Vec<ChartPoint>) -> Self {
        Self {
            title,
            kind: ChartKind::Line,
            points,
        }
    }

    pub fn pie(title: &'static str, slices: &[Slice]) -> Self {
        Self {
            title,
            kind: ChartKind::Pie,
            points: slices
                .iter()
                .map(|s| ChartPoint::new(s.name, s.value))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value, used to scale bars. Never negative.
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Sum of the values, used for slice shares. Never negative.
    pub fn total(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum()
    }
}
