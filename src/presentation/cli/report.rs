use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use tracing::{info, warn};

use super::GridArgs;
use crate::application::shell::DASHBOARD_LEADERBOARD_LIMIT;
use crate::domain::source::StatisticsSource;
use crate::presentation::report::render_report;

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Number of leaderboard entries
    #[arg(long, default_value_t = DASHBOARD_LEADERBOARD_LIMIT)]
    pub limit: u32,

    /// Where to write the page
    #[arg(long, default_value = "crosswords-dashboard.html")]
    pub output: PathBuf,

    /// Open the page in the default browser once written
    #[arg(long)]
    pub open: bool,
}

pub async fn run(source: &dyn StatisticsSource, command: ReportCommand) -> Result<()> {
    let (shell, dashboard) = super::dashboard::load(source, command.grid, command.limit).await?;

    let html = render_report(&shell, &dashboard, Utc::now())?;
    std::fs::write(&command.output, html)
        .with_context(|| format!("failed to write {}", command.output.display()))?;
    info!(path = %command.output.display(), "report written");
    println!("{}", command.output.display());

    if command.open
        && let Err(err) = open::that(&command.output)
    {
        warn!(error = %err, path = %command.output.display(), "failed to open report");
    }
    Ok(())
}
