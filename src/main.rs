use anyhow::Result;
use clap::Parser;
use crosswords_analytics::application::auth::AuthGate;
use crosswords_analytics::infrastructure::auth_store::AuthStore;
use crosswords_analytics::infrastructure::client::StatisticsClient;
use crosswords_analytics::presentation::cli::{
    Cli, Commands, dashboard, grids, login, report, statistics,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let gate = AuthGate::new(cli.app_password.clone(), AuthStore::new(&cli.state_dir));
    if cli.command.requires_login() {
        gate.require()?;
    }

    let json = cli.json;
    match cli.command {
        Commands::Login(cmd) => login::run(&gate, cmd),
        Commands::Grids => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            grids::list_grids(&client, json).await
        }
        Commands::Global => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            statistics::show_global(&client, json).await
        }
        Commands::Grid(args) => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            statistics::show_grid(&client, args, json).await
        }
        Commands::Temporal(args) => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            statistics::show_temporal(&client, args, json).await
        }
        Commands::Leaderboard(cmd) => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            statistics::show_leaderboard(&client, cmd, json).await
        }
        Commands::Dashboard(cmd) => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            dashboard::run(&client, cmd, json).await
        }
        Commands::Report(cmd) => {
            let client = StatisticsClient::from_base_url(&cli.api_url)?;
            report::run(&client, cmd).await
        }
    }
}

/// Logs go to stderr so stdout stays clean for text and JSON output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
