//! Fetch-and-transform pipelines behind each dashboard view.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::application::shell::{Shell, Tab, ViewRequest};
use crate::application::view_state::{Ticket, ViewSlot};
use crate::domain::errors::StatisticsError;
use crate::domain::ids::GridId;
use crate::domain::source::StatisticsSource;
use crate::application::views::{
    GlobalStatsView, GridStatsView, LeaderboardView, TemporalStatsView,
};

/// A transformed view, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LoadedView {
    Global(GlobalStatsView),
    Grid(GridStatsView),
    Temporal(TemporalStatsView),
    Leaderboard(LeaderboardView),
}

pub async fn load_global(source: &dyn StatisticsSource) -> Result<GlobalStatsView, StatisticsError> {
    let stats = source.global_statistics().await?;
    Ok(GlobalStatsView::from_domain(&stats))
}

/// Grid statistics and both distributions, fetched concurrently.
pub async fn load_grid(
    source: &dyn StatisticsSource,
    grid: GridId,
) -> Result<GridStatsView, StatisticsError> {
    let (stats, scores, times) = tokio::try_join!(
        source.grid_statistics(grid),
        source.score_distribution(grid),
        source.completion_time_distribution(grid),
    )?;
    Ok(GridStatsView::from_domain(grid, &stats, &scores, &times))
}

pub async fn load_temporal(
    source: &dyn StatisticsSource,
    grid: GridId,
) -> Result<TemporalStatsView, StatisticsError> {
    let stats = source.temporal_statistics(grid).await?;
    Ok(TemporalStatsView::from_domain(grid, &stats))
}

pub async fn load_leaderboard(
    source: &dyn StatisticsSource,
    grid: GridId,
    grid_number: i64,
    limit: u32,
) -> Result<LeaderboardView, StatisticsError> {
    let entries = source.leaderboard(grid, limit).await?;
    Ok(LeaderboardView::from_domain(grid_number, &entries))
}

/// Fetch and transform the view behind `request`.
pub async fn load_view(
    source: &dyn StatisticsSource,
    request: ViewRequest,
) -> Result<LoadedView, StatisticsError> {
    let start = Instant::now();

    let result = match request {
        ViewRequest::Global => load_global(source).await.map(LoadedView::Global),
        ViewRequest::Grid(grid) => load_grid(source, grid).await.map(LoadedView::Grid),
        ViewRequest::Temporal(grid) => load_temporal(source, grid)
            .await
            .map(LoadedView::Temporal),
        ViewRequest::Leaderboard {
            grid,
            grid_number,
            limit,
        } => load_leaderboard(source, grid, grid_number, limit)
            .await
            .map(LoadedView::Leaderboard),
    };

    match &result {
        Ok(_) => info!(
            duration_ms = start.elapsed().as_millis(),
            ?request,
            "view loaded"
        ),
        Err(err) => warn!(error = %err, ?request, "view failed to load"),
    }
    result
}

/// Every dashboard view, each in its own state.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub global: ViewSlot<GlobalStatsView>,
    pub grid: ViewSlot<GridStatsView>,
    pub temporal: ViewSlot<TemporalStatsView>,
    pub leaderboard: ViewSlot<LeaderboardView>,
}

/// Load all four views concurrently. A failing view ends in its error state
/// without affecting the others; grid views stay idle when no grid is selected.
pub async fn load_dashboard(source: &dyn StatisticsSource, shell: &Shell) -> Dashboard {
    let start = Instant::now();
    let mut dashboard = Dashboard::default();

    let grid = match shell.request_for(Tab::Grid) {
        Some(ViewRequest::Grid(grid)) => Some(grid),
        _ => None,
    };
    let leaderboard = match shell.request_for(Tab::Leaderboard) {
        Some(ViewRequest::Leaderboard {
            grid,
            grid_number,
            limit,
        }) => Some((grid, grid_number, limit)),
        _ => None,
    };

    let global_ticket = dashboard.global.begin();
    let grid_ticket = grid.map(|_| dashboard.grid.begin());
    let temporal_ticket = grid.map(|_| dashboard.temporal.begin());
    let leaderboard_ticket = leaderboard.map(|_| dashboard.leaderboard.begin());

    let (global, grid_view, temporal, leaderboard_view) = tokio::join!(
        load_global(source),
        async {
            match grid {
                Some(grid) => Some(load_grid(source, grid).await),
                None => None,
            }
        },
        async {
            match grid {
                Some(grid) => Some(load_temporal(source, grid).await),
                None => None,
            }
        },
        async {
            match leaderboard {
                Some((grid, grid_number, limit)) => {
                    Some(load_leaderboard(source, grid, grid_number, limit).await)
                }
                None => None,
            }
        },
    );

    if let Err(err) = &global {
        warn!(error = %err, "global statistics failed to load");
    }
    dashboard.global.finish(global_ticket, global);
    settle(&mut dashboard.grid, grid_ticket, grid_view, "grid");
    settle(&mut dashboard.temporal, temporal_ticket, temporal, "temporal");
    settle(
        &mut dashboard.leaderboard,
        leaderboard_ticket,
        leaderboard_view,
        "leaderboard",
    );

    info!(
        duration_ms = start.elapsed().as_millis(),
        grid = ?grid,
        "dashboard loaded"
    );
    dashboard
}

fn settle<T>(
    slot: &mut ViewSlot<T>,
    ticket: Option<Ticket>,
    result: Option<Result<T, StatisticsError>>,
    view: &'static str,
) {
    let (Some(ticket), Some(result)) = (ticket, result) else {
        return;
    };
    if let Err(err) = &result {
        warn!(error = %err, view, "view failed to load");
    }
    slot.finish(ticket, result);
}
