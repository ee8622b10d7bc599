//! Standalone HTML rendering of the dashboard.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::application::services::Dashboard;
use crate::application::shell::{Shell, Tab};
use crate::application::view_state::ViewState;
use crate::domain::formatting::format_generated_at;
use crate::application::views::{
    Chart, ChartKind, GlobalStatsView, GridStatsView, LeaderboardView, StatCard,
    TemporalStatsView,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub value: String,
    /// Bar width or slice share, in percent of the chart.
    pub width: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBlock {
    pub title: String,
    pub kind: &'static str,
    pub rows: Vec<ChartRow>,
}

impl ChartBlock {
    pub fn from_chart(chart: &Chart) -> Self {
        let scale = match chart.kind {
            ChartKind::Pie => chart.total(),
            ChartKind::Bar | ChartKind::Line => chart.max_value(),
        };

        let rows = chart
            .points
            .iter()
            .map(|point| {
                let width = if scale > 0.0 && point.value.is_finite() {
                    (point.value.max(0.0) / scale * 100.0).min(100.0)
                } else {
                    0.0
                };
                ChartRow {
                    label: point.label.clone(),
                    value: format!("{}", point.value),
                    width: format!("{width:.1}"),
                    detail: point.detail.clone().unwrap_or_default(),
                }
            })
            .collect();

        Self {
            title: chart.title.to_string(),
            kind: match chart.kind {
                ChartKind::Bar => "bar",
                ChartKind::Pie => "pie",
                ChartKind::Line => "line",
            },
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One dashboard tab as rendered in the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSection {
    pub title: String,
    /// Empty unless the view failed or is still loading.
    pub notice: String,
    pub cards: Vec<StatCard>,
    pub charts: Vec<ChartBlock>,
    pub tables: Vec<TableBlock>,
}

impl ReportSection {
    fn ready(title: impl Into<String>, cards: &[StatCard], charts: Vec<Chart>) -> Self {
        Self {
            title: title.into(),
            cards: cards.to_vec(),
            charts: charts.iter().map(ChartBlock::from_chart).collect(),
            ..Self::default()
        }
    }

    fn from_state<T>(tab: Tab, state: &ViewState<T>, build: impl FnOnce(&T) -> Self) -> Option<Self> {
        let notice = match state {
            ViewState::Idle => return None,
            ViewState::Ready(view) => return Some(build(view)),
            ViewState::Loading => "Loading...".to_string(),
            ViewState::Error(message) => format!("Error: {message}"),
        };
        Some(Self {
            title: tab.title().to_string(),
            notice,
            ..Self::default()
        })
    }

    pub fn global(view: &GlobalStatsView) -> Self {
        let mut section = Self::ready(Tab::Global.title(), &view.cards, view.charts());
        if !view.grids.is_empty() {
            section.tables.push(TableBlock {
                headers: ["Grid", "Version", "Players", "Completion", "Joker", "Median time"]
                    .map(String::from)
                    .to_vec(),
                rows: view
                    .grids
                    .iter()
                    .map(|g| {
                        vec![
                            g.name.clone(),
                            g.version.clone(),
                            g.players.to_string(),
                            format!("{:.1}%", g.completion),
                            format!("{:.1}%", g.joker),
                            g.median_time_label(),
                        ]
                    })
                    .collect(),
            });
        }
        section
    }

    pub fn grid(view: &GridStatsView) -> Self {
        let mut section = Self::ready(
            format!("Grid #{} statistics", view.grid_number),
            &view.cards,
            view.charts(),
        );
        let scores = &view.score_summary;
        let times = &view.time_summary;
        section.tables.push(TableBlock {
            headers: ["", "Min", "Mean", "Median", "Max"].map(String::from).to_vec(),
            rows: vec![
                vec![
                    "Score".to_string(),
                    scores.min.to_string(),
                    scores.mean.to_string(),
                    scores.median.to_string(),
                    scores.max.to_string(),
                ],
                vec![
                    "Time".to_string(),
                    times.min.clone(),
                    times.mean.clone(),
                    times.median.clone(),
                    times.max.clone(),
                ],
            ],
        });
        section
    }

    pub fn temporal(view: &TemporalStatsView) -> Self {
        let mut section = Self::ready(
            format!("Grid #{} temporal analysis", view.grid_number),
            &view.cards,
            view.charts(),
        );
        section.cards.push(StatCard::new(
            "First submission",
            view.first_submission.clone(),
        ));
        section
            .cards
            .push(StatCard::new("Last submission", view.last_submission.clone()));
        if !view.peak_hours.is_empty() {
            section.tables.push(TableBlock {
                headers: ["#", "Hour", "Submissions"].map(String::from).to_vec(),
                rows: view
                    .peak_hours
                    .iter()
                    .map(|p| vec![p.rank.to_string(), p.label.clone(), p.count.to_string()])
                    .collect(),
            });
        }
        section
    }

    pub fn leaderboard(view: &LeaderboardView) -> Self {
        let mut section = Self {
            title: format!("Grid #{} leaderboard", view.grid_number),
            ..Self::default()
        };
        if view.is_empty() {
            section.notice = "No data".to_string();
        } else {
            section.tables.push(TableBlock {
                headers: LeaderboardView::HEADERS.map(String::from).to_vec(),
                rows: view.table_rows(),
            });
        }
        section
    }
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct DashboardReportTemplate {
    pub title: String,
    pub grid_label: String,
    pub generated_at: String,
    pub sections: Vec<ReportSection>,
}

impl DashboardReportTemplate {
    pub fn new(shell: &Shell, dashboard: &Dashboard, generated_at: DateTime<Utc>) -> Self {
        let sections = [
            ReportSection::from_state(Tab::Global, dashboard.global.state(), ReportSection::global),
            ReportSection::from_state(Tab::Grid, dashboard.grid.state(), ReportSection::grid),
            ReportSection::from_state(
                Tab::Temporal,
                dashboard.temporal.state(),
                ReportSection::temporal,
            ),
            ReportSection::from_state(
                Tab::Leaderboard,
                dashboard.leaderboard.state(),
                ReportSection::leaderboard,
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            title: "Crosswords statistics".to_string(),
            grid_label: shell
                .selected_grid()
                .map(|g| g.label())
                .unwrap_or_default(),
            generated_at: format_generated_at(generated_at),
            sections,
        }
    }
}

pub fn render_report(
    shell: &Shell,
    dashboard: &Dashboard,
    generated_at: DateTime<Utc>,
) -> Result<String, askama::Error> {
    DashboardReportTemplate::new(shell, dashboard, generated_at).render()
}
