use serde_json::{Value, json};

use crate::helpers::{
    TestServer, distribution_body, global_body, grid_stats_body, grids_body, leaderboard_body,
    mount_grid_four, stderr, stdout,
};

#[test]
fn test_dashboard_views_fail_independently() {
    let server = TestServer::start();
    mount_grid_four(&server);
    server.mount_error("/global", 500, "boom");

    let output = server.run(&["dashboard"], &[]);

    assert!(output.status.success(), "dashboard failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Grid #1 - v1\n"));
    assert!(out.contains("Global statistics\n=================\nError: request failed (500): boom"));
    assert!(out.contains("Grid #1 statistics"));
    assert!(out.contains("Grid #1 temporal analysis"));
    assert!(out.contains("Grid #1 leaderboard"));
}

#[test]
fn test_dashboard_json_reports_each_state() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());
    server.mount_json("/global", global_body());
    server.mount_json("/grid/4", grid_stats_body(4, 1));
    server.mount_json("/grid/4/distribution", json!({}));
    server.mount_json("/grid/4/completion-time-distribution", distribution_body());
    server.mount_error("/grid/4/temporal", 404, "Grid not found");
    server.mount_json("/grid/4/leaderboard", leaderboard_body());

    let output = server.run(&["dashboard", "--json"], &[]);

    assert!(output.status.success());
    let dashboard: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(dashboard["selected_grid"]["id"], 4);
    assert_eq!(dashboard["global"]["state"], "ready");
    assert_eq!(dashboard["grid"]["state"], "ready");
    assert_eq!(dashboard["temporal"]["state"], "error");
    assert_eq!(
        dashboard["temporal"]["data"],
        "request failed (404): Grid not found"
    );
    assert_eq!(dashboard["leaderboard"]["data"]["rows"][0]["medal"], "🥇");
}

#[test]
fn test_dashboard_without_grids_only_loads_global() {
    let server = TestServer::start();
    server.mount_json("/grids", json!([]));
    server.mount_json("/global", global_body());
    server.forbid("/grid/4");

    let output = server.run(&["dashboard"], &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Total users"));
    assert!(out.contains("Grid statistics\n===============\nNo grid selected."));
    assert!(out.contains("Leaderboard\n===========\nNo grid selected."));
}

#[test]
fn test_report_writes_html_page() {
    let server = TestServer::start();
    mount_grid_four(&server);
    server.mount_json("/global", global_body());
    let report = server.state_dir.path().join("dashboard.html");
    let report_arg = report.to_string_lossy().into_owned();

    let output = server.run(&["report", "--output", &report_arg], &[]);

    assert!(output.status.success(), "report failed: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), report_arg);
    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Grid #1 - v1"));
    assert!(html.contains("Global statistics"));
    assert!(html.contains("Grid #1 leaderboard"));
}
