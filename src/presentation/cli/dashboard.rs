use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::grids::load_shell;
use super::render::{
    render_global, render_grid, render_leaderboard, render_section, render_temporal,
};
use super::{GridArgs, print_json};
use crate::application::services::{Dashboard, load_dashboard};
use crate::application::shell::{DASHBOARD_LEADERBOARD_LIMIT, Shell, Tab};
use crate::application::view_state::ViewState;
use crate::domain::source::StatisticsSource;
use crate::domain::statistics::Grid;
use crate::application::views::{
    GlobalStatsView, GridStatsView, LeaderboardView, TemporalStatsView,
};

#[derive(Debug, Clone, Copy, Args)]
pub struct DashboardCommand {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Number of leaderboard entries
    #[arg(long, default_value_t = DASHBOARD_LEADERBOARD_LIMIT)]
    pub limit: u32,
}

#[derive(Debug, Serialize)]
struct DashboardOutput<'a> {
    grids: &'a [Grid],
    selected_grid: Option<&'a Grid>,
    global: &'a ViewState<GlobalStatsView>,
    grid: &'a ViewState<GridStatsView>,
    temporal: &'a ViewState<TemporalStatsView>,
    leaderboard: &'a ViewState<LeaderboardView>,
}

/// Shell plus every view, loaded for the selected grid.
pub async fn load(
    source: &dyn StatisticsSource,
    args: GridArgs,
    limit: u32,
) -> Result<(Shell, Dashboard)> {
    let shell = load_shell(source, args).await?.with_leaderboard_limit(limit);
    let dashboard = load_dashboard(source, &shell).await;
    Ok((shell, dashboard))
}

pub async fn run(source: &dyn StatisticsSource, command: DashboardCommand, json: bool) -> Result<()> {
    let (shell, dashboard) = load(source, command.grid, command.limit).await?;

    if json {
        return print_json(&DashboardOutput {
            grids: shell.grids(),
            selected_grid: shell.selected_grid(),
            global: dashboard.global.state(),
            grid: dashboard.grid.state(),
            temporal: dashboard.temporal.state(),
            leaderboard: dashboard.leaderboard.state(),
        });
    }

    if let Some(grid) = shell.selected_grid() {
        println!("{}\n", grid.label());
    }

    let sections = [
        render_section(Tab::Global.title(), dashboard.global.state(), render_global),
        render_section(Tab::Grid.title(), dashboard.grid.state(), render_grid),
        render_section(
            Tab::Temporal.title(),
            dashboard.temporal.state(),
            render_temporal,
        ),
        render_section(
            Tab::Leaderboard.title(),
            dashboard.leaderboard.state(),
            render_leaderboard,
        ),
    ];
    print!("{}", sections.join("\n"));
    Ok(())
}
