use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::application::auth::AuthGate;

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Application password (prompted for when omitted)
    #[arg(long, env = "CROSSWORDS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub fn run(gate: &AuthGate, command: LoginCommand) -> Result<()> {
    if !gate.is_configured() {
        eprintln!("No application password configured; the dashboard is open.");
        return Ok(());
    }

    let password = match command.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    gate.login(&password)?;
    eprintln!("Dashboard unlocked.");
    Ok(())
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
