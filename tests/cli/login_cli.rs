use crate::helpers::{TestServer, grids_body, stderr, stdout};
use crate::test_macros::define_cli_locked_test;

define_cli_locked_test!(test_grids_requires_login, &["grids"]);
define_cli_locked_test!(test_global_requires_login, &["global"]);
define_cli_locked_test!(test_dashboard_requires_login, &["dashboard"]);
define_cli_locked_test!(test_report_requires_login, &["report"]);

const PASSWORD: (&str, &str) = ("CROSSWORDS_APP_PASSWORD", "s3cret");

#[test]
fn test_login_unlocks_statistics_commands() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());

    let login = server.run(&["login", "--password", "s3cret"], &[PASSWORD]);
    assert!(login.status.success(), "login failed: {}", stderr(&login));
    assert!(stderr(&login).contains("Dashboard unlocked."));

    let output = server.run(&["grids"], &[PASSWORD]);
    assert!(output.status.success(), "grids failed: {}", stderr(&output));
    assert!(stdout(&output).contains("v1"));
}

#[test]
fn test_login_reads_password_from_env() {
    let server = TestServer::start();

    let login = server.run(&["login"], &[PASSWORD, ("CROSSWORDS_PASSWORD", "s3cret")]);

    assert!(login.status.success(), "login failed: {}", stderr(&login));
    assert!(server.state_dir.path().join("authenticated").exists());
}

#[test]
fn test_login_with_wrong_password_stays_locked() {
    let server = TestServer::start();
    server.forbid("/grids");

    let login = server.run(&["login", "--password", "guess"], &[PASSWORD]);
    assert!(!login.status.success());
    assert!(stderr(&login).contains("incorrect password"));

    let output = server.run(&["grids"], &[PASSWORD]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("dashboard is locked"));
}

#[test]
fn test_changing_password_requires_new_login() {
    let server = TestServer::start();
    server.forbid("/grids");

    let login = server.run(&["login", "--password", "s3cret"], &[PASSWORD]);
    assert!(login.status.success());

    let output = server.run(&["grids"], &[("CROSSWORDS_APP_PASSWORD", "rotated")]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("dashboard is locked"));
}

#[test]
fn test_without_password_everything_is_open() {
    let server = TestServer::start();
    server.mount_json("/grids", grids_body());

    let login = server.run(&["login"], &[]);
    assert!(login.status.success());
    assert!(stderr(&login).contains("No application password configured"));

    let output = server.run(&["grids"], &[]);
    assert!(output.status.success());
}
