use serde_json::Value;

use crate::helpers::{TestServer, grids_body, stderr, stdout};

#[test]
fn test_grids_lists_grid_table() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());

    let output = server.run(&["grids"], &[]);

    assert!(output.status.success(), "grids failed: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "ID  Number  Version\n--  ------  -------\n4   1       v1\n9   2       v2\n"
    );
}

#[test]
fn test_grids_json_outputs_payload() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());

    let output = server.run(&["--json", "grids"], &[]);

    assert!(output.status.success());
    let grids: Value = serde_json::from_str(&stdout(&output))
        .unwrap_or_else(|_| panic!("Should output valid JSON, got: {}", stdout(&output)));
    assert_eq!(grids[0]["id"], 4);
    assert_eq!(grids[1]["version"], "v2");
}

#[test]
fn test_grids_with_empty_list_prints_notice() {
    let server = TestServer::start();
    server.mount_json("/grids", serde_json::json!([]));

    let output = server.run(&["grids"], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No grids available.\n");
}

#[test]
fn test_grids_reports_server_error_verbatim() {
    let server = TestServer::start();
    server.mount_error("/grids", 503, "maintenance");

    let output = server.run(&["grids"], &[]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("request failed (503): maintenance"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}
