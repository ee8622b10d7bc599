use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    PREFIX, TestServer, global_body, grids_body, leaderboard_body, mount_grid_four, stderr,
    stdout,
};
use crate::test_macros::define_cli_no_grid_test;

define_cli_no_grid_test!(test_grid_without_grids_makes_no_request, &["grid"]);
define_cli_no_grid_test!(test_temporal_without_grids_makes_no_request, &["temporal"]);
define_cli_no_grid_test!(
    test_leaderboard_without_grids_makes_no_request,
    &["leaderboard"]
);

#[test]
fn test_global_renders_cards_and_grid_table() {
    let server = TestServer::start();
    server.mount_json("/global", global_body());

    let output = server.run(&["global"], &[]);

    assert!(output.status.success(), "global failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Total users"));
    assert!(out.contains("1\u{202f}200"));
    assert!(out.contains("Grid 4"));
    assert!(out.contains("12 min 34s"));
}

#[test]
fn test_global_json_joker_rates_follow_rounding() {
    let server = TestServer::start();
    server.mount_json("/global", global_body());

    let output = server.run(&["global", "--json"], &[]);

    assert!(output.status.success());
    let view: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(view["joker_rate"], 12.3);
    assert_eq!(view["joker_slices"][0]["value"], 12.3);
    assert_eq!(view["joker_slices"][1]["value"], 87.8);
}

#[test]
fn test_global_failure_shows_message() {
    let server = TestServer::start();
    server.mount_error("/global", 500, "boom");

    let output = server.run(&["global"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("request failed (500): boom"));
}

#[test]
fn test_grid_defaults_to_first_grid() {
    let server = TestServer::start();
    mount_grid_four(&server);

    let output = server.run(&["grid"], &[]);

    assert!(output.status.success(), "grid failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Grid #1 statistics"));
    assert!(out.contains("62.5%"));
    assert!(out.contains("1-3 min"));
    assert!(out.contains("0-10"));
}

#[test]
fn test_grid_with_unknown_id_fails() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());
    server.forbid("/grid/99");

    let output = server.run(&["grid", "--grid", "99"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown grid: 99"));
}

#[test]
fn test_temporal_uses_french_dates() {
    let server = TestServer::start();
    mount_grid_four(&server);

    let output = server.run(&["temporal", "--grid", "4"], &[]);

    assert!(output.status.success(), "temporal failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("First submission: 15 mars 2025 à 08:05"));
    assert!(out.contains("14h"));
    assert!(out.contains("15 mars"));
}

#[test]
fn test_leaderboard_defaults_to_fifty_entries() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());
    server.mount(
        Mock::given(method("GET"))
            .and(path(format!("{PREFIX}/grid/4/leaderboard")))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(leaderboard_body()))
            .expect(1),
    );

    let output = server.run(&["leaderboard"], &[]);

    assert!(output.status.success(), "leaderboard failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Grid #1 leaderboard"));
    assert!(out.contains("🥇 1"));
    assert!(out.contains("🥈 2"));
    assert!(out.contains("1h 2m 5s"));
    assert!(out.contains("16 mars 2025, 09:05"));
    assert!(out.contains("N/A"));
}

#[test]
fn test_leaderboard_limit_is_forwarded() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());
    server.mount(
        Mock::given(method("GET"))
            .and(path(format!("{PREFIX}/grid/9/leaderboard")))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1),
    );

    let output = server.run(&["leaderboard", "--grid", "9", "--limit", "5"], &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Grid #2 leaderboard\n===================\nNo data"));
}
