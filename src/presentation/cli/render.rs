//! Plain-text rendering of the dashboard view-models.

use std::fmt::Write;

use crate::application::services::LoadedView;
use crate::application::view_state::ViewState;
use crate::domain::statistics::Grid;
use crate::application::views::{
    Chart, ChartKind, GlobalStatsView, GridStatsView, LeaderboardView, StatCard,
    TemporalStatsView,
};

const BAR_WIDTH: usize = 30;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub const NO_DATA: &str = "No data";
pub const LOADING: &str = "Loading...";

/// Render one view according to its state. Idle views render nothing.
pub fn render_state<T>(state: &ViewState<T>, render: impl FnOnce(&T) -> String) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => format!("{LOADING}\n"),
        ViewState::Ready(view) => render(view),
        ViewState::Error(message) => format!("Error: {message}\n"),
    }
}

/// A dashboard section: the view itself once ready, otherwise its title and state.
pub fn render_section<T>(
    title: &str,
    state: &ViewState<T>,
    render: impl FnOnce(&T) -> String,
) -> String {
    match state {
        ViewState::Ready(view) => render(view),
        ViewState::Idle => format!("{}No grid selected.\n", heading(title)),
        _ => format!("{}{}", heading(title), render_state(state, |_| String::new())),
    }
}

pub fn render_view(view: &LoadedView) -> String {
    match view {
        LoadedView::Global(view) => render_global(view),
        LoadedView::Grid(view) => render_grid(view),
        LoadedView::Temporal(view) => render_temporal(view),
        LoadedView::Leaderboard(view) => render_leaderboard(view),
    }
}

pub fn render_grids(grids: &[Grid]) -> String {
    if grids.is_empty() {
        return "No grids available.\n".to_string();
    }
    let rows = grids
        .iter()
        .map(|g| {
            vec![
                g.id.to_string(),
                g.display_number().to_string(),
                g.version.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "Number", "Version"], &rows)
}

pub fn render_global(view: &GlobalStatsView) -> String {
    let mut out = heading("Global statistics");
    out.push_str(&render_cards(&view.cards));

    for chart in view.charts() {
        out.push('\n');
        out.push_str(&render_chart(&chart));
    }

    if !view.grids.is_empty() {
        out.push('\n');
        let rows = view
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
            .collect::<Vec<_>>();
        out.push_str(&render_table(
            &["Grid", "Version", "Players", "Completion", "Joker", "Median time"],
            &rows,
        ));
    }
    out
}

pub fn render_grid(view: &GridStatsView) -> String {
    let mut out = heading(&format!("Grid #{} statistics", view.grid_number));
    out.push_str(&render_cards(&view.cards));

    let charts = view.charts();
    let (distributions, breakdowns) = charts.split_at(2);

    for chart in distributions {
        out.push('\n');
        out.push_str(&render_chart(chart));
    }

    out.push('\n');
    let scores = &view.score_summary;
    let times = &view.time_summary;
    out.push_str(&render_table(
        &["", "Min", "Mean", "Median", "Max"],
        &[
            vec![
                "Score".to_string(),
                format_value(scores.min),
                format_value(scores.mean),
                format_value(scores.median),
                format_value(scores.max),
            ],
            vec![
                "Time".to_string(),
                times.min.clone(),
                times.mean.clone(),
                times.median.clone(),
                times.max.clone(),
            ],
        ],
    ));

    for chart in breakdowns {
        out.push('\n');
        out.push_str(&render_chart(chart));
    }
    out
}

pub fn render_temporal(view: &TemporalStatsView) -> String {
    let mut out = heading(&format!("Grid #{} temporal analysis", view.grid_number));
    out.push_str(&render_cards(&view.cards));
    let _ = writeln!(out, "First submission: {}", view.first_submission);
    let _ = writeln!(out, "Last submission:  {}", view.last_submission);

    if !view.peak_hours.is_empty() {
        out.push_str("\nPeak hours\n");
        for peak in &view.peak_hours {
            let _ = writeln!(
                out,
                "  #{} {:<4} {} submissions",
                peak.rank, peak.label, peak.count
            );
        }
    }

    for chart in view.charts() {
        out.push('\n');
        out.push_str(&render_chart(&chart));
    }
    out
}

pub fn render_leaderboard(view: &LeaderboardView) -> String {
    let mut out = heading(&format!("Grid #{} leaderboard", view.grid_number));
    if view.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
        return out;
    }
    out.push_str(&render_table(&LeaderboardView::HEADERS, &view.table_rows()));
    out
}

pub fn render_cards(cards: &[StatCard]) -> String {
    let width = cards
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);
    cards.iter().fold(String::new(), |mut out, card| {
        let _ = writeln!(out, "{:<width$}  {}", card.label, card.value);
        out
    })
}

pub fn render_chart(chart: &Chart) -> String {
    let mut out = format!("{}\n", chart.title);
    if chart.is_empty() {
        let _ = writeln!(out, "  {NO_DATA}");
        return out;
    }

    let label_width = chart
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    match chart.kind {
        ChartKind::Bar => {
            let max = chart.max_value();
            for point in &chart.points {
                let _ = write!(
                    out,
                    "  {:<label_width$} {:<BAR_WIDTH$} {}",
                    point.label,
                    bar(point.value, max),
                    format_value(point.value)
                );
                push_detail(&mut out, point.detail.as_deref());
            }
        }
        ChartKind::Pie => {
            let total = chart.total();
            for point in &chart.points {
                let share = if total > 0.0 {
                    point.value.max(0.0) / total * 100.0
                } else {
                    0.0
                };
                let _ = write!(
                    out,
                    "  {:<label_width$} {} ({share:.1}%)",
                    point.label,
                    format_value(point.value)
                );
                push_detail(&mut out, point.detail.as_deref());
            }
        }
        ChartKind::Line => {
            let max = chart.max_value();
            let sparkline: String = chart.points.iter().map(|p| spark(p.value, max)).collect();
            let _ = writeln!(out, "  {sparkline}");
            if let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) {
                let _ = writeln!(out, "  {} .. {}", first.label, last.label);
            }
            for point in &chart.points {
                let _ = writeln!(
                    out,
                    "  {:<label_width$} {}",
                    point.label,
                    format_value(point.value)
                );
            }
        }
    }
    out
}

/// Columns padded to their widest cell.
pub fn render_table<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.as_ref()), &widths);
    push_row(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().iter().map(String::as_str),
        &widths,
    );
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn push_detail(out: &mut String, detail: Option<&str>) {
    match detail {
        Some(detail) => {
            let _ = writeln!(out, "  {detail}");
        }
        None => out.push('\n'),
    }
}

fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.clamp(1, BAR_WIDTH))
}

fn spark(value: f64, max: f64) -> char {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return SPARK_LEVELS[0];
    }
    let level = ((value / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
    SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
}

/// Whole numbers without decimals, anything else with one.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
