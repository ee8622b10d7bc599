use serde::Serialize;

use super::{Chart, ChartPoint, StatCard};
use crate::domain::formatting::{format_long_timestamp, format_short_date};
use crate::domain::ids::GridId;
use crate::domain::statistics::{DayCount, TemporalStatistics};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    /// `None` when the server used a key that is not an hour number.
    pub hour: Option<u32>,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub date: String,
    pub raw_date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakHourView {
    pub rank: usize,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalStatsView {
    pub grid_number: i64,
    pub cards: Vec<StatCard>,
    pub first_submission: String,
    pub last_submission: String,
    pub peak_hours: Vec<PeakHourView>,
    pub hourly: Vec<HourlyPoint>,
    pub weekly: Vec<DayCount>,
    pub timeline: Vec<TimelinePoint>,
}

impl TemporalStatsView {
    pub fn from_domain(grid: GridId, stats: &TemporalStatistics) -> Self {
        let mut hourly: Vec<HourlyPoint> = stats
            .submissions_by_hour
            .iter()
            .map(|(hour, count)| HourlyPoint {
                hour: hour.trim().parse().ok(),
                label: format!("{hour}h"),
                count,
            })
            .collect();
        // Numeric hours ascending; unparseable keys trail in server order.
        hourly.sort_by_key(|point| (point.hour.is_none(), point.hour));

        let timeline = stats
            .daily_timeline
            .iter()
            .map(|day| TimelinePoint {
                date: format_short_date(&day.date),
                raw_date: day.date.clone(),
                count: day.count,
            })
            .collect();

        let peak_hours = stats
            .peak_hours
            .iter()
            .enumerate()
            .map(|(i, peak)| PeakHourView {
                rank: i + 1,
                label: format!("{}h", peak.hour),
                count: peak.count,
            })
            .collect();

        Self {
            grid_number: stats.grid_number.unwrap_or(grid.into_inner()),
            cards: vec![
                StatCard::new("Total submissions", stats.total_submissions.to_string()),
                StatCard::new("Active days", stats.unique_days.to_string()),
                StatCard::new(
                    "Average / day",
                    format!("{:.1}", stats.average_submissions_per_day),
                ),
            ],
            first_submission: format_long_timestamp(stats.first_submission.as_deref()),
            last_submission: format_long_timestamp(stats.last_submission.as_deref()),
            peak_hours,
            hourly,
            weekly: stats.submissions_by_day_of_week.clone(),
            timeline,
        }
    }

    pub fn charts(&self) -> Vec<Chart> {
        vec![
            Chart::bar(
                "Submissions by hour of day",
                self.hourly
                    .iter()
                    .map(|h| ChartPoint::new(h.label.clone(), h.count as f64))
                    .collect(),
            ),
            Chart::bar(
                "Submissions by day of week",
                self.weekly
                    .iter()
                    .map(|d| ChartPoint::new(d.day.clone(), d.count as f64))
                    .collect(),
            ),
            Chart::line(
                "Submissions timeline",
                self.timeline
                    .iter()
                    .map(|t| ChartPoint::new(t.date.clone(), t.count as f64))
                    .collect(),
            ),
        ]
    }
}
