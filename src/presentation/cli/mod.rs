pub mod dashboard;
pub mod grids;
pub mod login;
pub mod render;
pub mod report;
pub mod statistics;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use dashboard::DashboardCommand;
use login::LoginCommand;
use report::ReportCommand;
use statistics::LeaderboardCommand;

use crate::infrastructure::auth_store::DEFAULT_STATE_DIR;
use crate::infrastructure::client::DEFAULT_API_URL;

#[derive(Debug, Parser)]
#[command(author, version, about = "Crosswords statistics dashboard", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "CROSSWORDS_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Directory holding local state such as the login flag
    #[arg(
        long,
        global = true,
        env = "CROSSWORDS_STATE_DIR",
        default_value = DEFAULT_STATE_DIR
    )]
    pub state_dir: PathBuf,

    /// Password required before statistics can be viewed
    #[arg(long, env = "CROSSWORDS_APP_PASSWORD", hide = true, hide_env_values = true)]
    pub app_password: Option<String>,

    /// Print view-models as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Unlock the dashboard
    Login(LoginCommand),

    /// List grids
    Grids,

    /// Statistics across all grids
    Global,

    /// Statistics and distributions for one grid
    Grid(GridArgs),

    /// Submissions over time for one grid
    Temporal(GridArgs),

    /// Ranked submissions for one grid
    Leaderboard(LeaderboardCommand),

    /// Every view at once, each failing on its own
    Dashboard(DashboardCommand),

    /// Write the dashboard as a standalone HTML page
    Report(ReportCommand),
}

impl Commands {
    /// Commands that show statistics and sit behind the login gate.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Commands::Login(_))
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct GridArgs {
    /// Grid ID (defaults to the first grid)
    #[arg(long)]
    pub grid: Option<i64>,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
