use anyhow::Result;

use super::GridArgs;
use super::print_json;
use super::render::render_grids;
use crate::application::shell::Shell;
use crate::domain::ids::GridId;
use crate::domain::source::StatisticsSource;

pub async fn list_grids(source: &dyn StatisticsSource, json: bool) -> Result<()> {
    let grids = source.list_grids().await?;
    if json {
        return print_json(&grids);
    }
    print!("{}", render_grids(&grids));
    Ok(())
}

/// Load the grid list and apply `--grid`. Without it the first grid stays selected.
pub async fn load_shell(source: &dyn StatisticsSource, args: GridArgs) -> Result<Shell> {
    let mut shell = Shell::new();
    shell.load(source).await;
    if let Some(id) = args.grid {
        shell.select_grid(GridId::new(id))?;
    }
    Ok(shell)
}

/// Printed when a grid command has no grid to show.
pub fn print_no_grid(json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::Value::Null);
    }
    println!("No grids available.");
    Ok(())
}
