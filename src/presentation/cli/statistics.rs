use anyhow::Result;
use clap::Args;

use super::grids::{load_shell, print_no_grid};
use super::render::{render_global, render_view};
use super::{GridArgs, print_json};
use crate::application::services;
use crate::application::shell::{DASHBOARD_LEADERBOARD_LIMIT, Tab};
use crate::domain::source::StatisticsSource;

#[derive(Debug, Clone, Copy, Args)]
pub struct LeaderboardCommand {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Number of entries to show
    #[arg(long, default_value_t = DASHBOARD_LEADERBOARD_LIMIT)]
    pub limit: u32,
}

pub async fn show_global(source: &dyn StatisticsSource, json: bool) -> Result<()> {
    let view = services::load_global(source).await?;
    if json {
        return print_json(&view);
    }
    print!("{}", render_global(&view));
    Ok(())
}

pub async fn show_grid(source: &dyn StatisticsSource, args: GridArgs, json: bool) -> Result<()> {
    show_tab(source, Tab::Grid, args, DASHBOARD_LEADERBOARD_LIMIT, json).await
}

pub async fn show_temporal(
    source: &dyn StatisticsSource,
    args: GridArgs,
    json: bool,
) -> Result<()> {
    show_tab(source, Tab::Temporal, args, DASHBOARD_LEADERBOARD_LIMIT, json).await
}

pub async fn show_leaderboard(
    source: &dyn StatisticsSource,
    command: LeaderboardCommand,
    json: bool,
) -> Result<()> {
    show_tab(source, Tab::Leaderboard, command.grid, command.limit, json).await
}

async fn show_tab(
    source: &dyn StatisticsSource,
    tab: Tab,
    args: GridArgs,
    limit: u32,
    json: bool,
) -> Result<()> {
    let mut shell = load_shell(source, args).await?.with_leaderboard_limit(limit);
    shell.select_tab(tab);

    let Some(request) = shell.active_request() else {
        return print_no_grid(json);
    };

    let view = services::load_view(source, request).await?;
    if json {
        return print_json(&view);
    }
    print!("{}", render_view(&view));
    Ok(())
}
