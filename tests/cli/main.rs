mod dashboard_cli;
mod grids_cli;
mod helpers;
mod login_cli;
mod statistics_cli;
