//! Integration tests for the `unires` binary.
//!
//! Argument parsing, exit codes and failure reporting run without a
//! controller; end-to-end runs use a wiremock controller over plain HTTP.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const NO_CONFIG: &str = "/tmp/unires-cli-test-nonexistent/config.toml";

/// Build a command for the `unires` binary with env isolation.
///
/// Clears every variable unires reads and points the config file at a
/// nonexistent path so tests never touch the user's real setup.
fn unires_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unires");
    cmd.env("HOME", "/tmp/unires-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unires-cli-test-nonexistent")
        .env("UNIRES_CONFIG", NO_CONFIG)
        .env_remove("UNIFI_BASEURL")
        .env_remove("UNIFI_USERNAME")
        .env_remove("UNIFI_PASSWORD")
        .env_remove("UNIFI_SITE")
        .env_remove("UNIFI_PLATFORM")
        .env_remove("UNIFI_INSECURE")
        .env_remove("UNIFI_CA_CERT")
        .env_remove("UNIFI_TIMEOUT")
        .env_remove("FIXED_ONLY")
        .env_remove("LOG_LEVEL")
        .env_remove("RUST_LOG")
        .env_remove("UNIRES_OUTPUT");
    cmd
}

/// A command pointed at `base_url` with working credentials.
fn against(base_url: &str) -> assert_cmd::Command {
    let mut cmd = unires_cmd();
    cmd.env("UNIFI_BASEURL", base_url)
        .env("UNIFI_USERNAME", "admin")
        .env("UNIFI_PASSWORD", "hunter2")
        .env("UNIFI_TIMEOUT", "5");
    cmd
}

fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": data }))
}

async fn mount(server: &MockServer, http_method: &str, at: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method(http_method))
        .and(path(at))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

/// Classic controller with one reserved printer that is currently active
/// under a new alias and address.
async fn classic_controller(active_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/login", envelope(json!([])), 1).await;
    mount(
        &server,
        "GET",
        "/api/s/default/list/user",
        envelope(json!([
            { "mac": "aa:bb:cc:dd:ee:01", "name": "printer", "fixed_ip": "10.0.0.5" },
            { "mac": "aa:bb:cc:dd:ee:02", "name": "bad name!", "fixed_ip": "10.0.0.6" }
        ])),
        1,
    )
    .await;
    mount(
        &server,
        "GET",
        "/api/s/default/stat/sta",
        envelope(json!([
            { "mac": "AA:BB:CC:DD:EE:01", "name": "printer-new", "ip": "10.0.0.9" },
            { "mac": "aa:bb:cc:dd:ee:03", "hostname": "no-alias", "ip": "10.0.0.7" }
        ])),
        active_calls,
    )
    .await;
    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn help_flag() {
    unires_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("UniFi")
            .and(predicate::str::contains("reservations"))
            .and(predicate::str::contains("UNIFI_BASEURL")),
    );
}

#[test]
fn version_flag() {
    unires_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unires"));
}

#[test]
fn completions_bash() {
    unires_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn completions_reject_unknown_shell() {
    unires_cmd().args(["completions", "tcsh"]).assert().code(2);
}

#[test]
fn password_env_value_is_hidden_from_help() {
    unires_cmd()
        .env("UNIFI_PASSWORD", "hunter2")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}

// ── Usage errors ────────────────────────────────────────────────────

#[test]
fn missing_username_is_usage_error() {
    unires_cmd()
        .env("UNIFI_PASSWORD", "hunter2")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("username"));
}

#[test]
fn invalid_base_url_is_usage_error() {
    against("not a url")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn unknown_log_level_is_usage_error() {
    against("https://unifi:8443")
        .env("LOG_LEVEL", "chatty")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("log_level"));
}

#[test]
fn malformed_config_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(&file, "timeout = \"soon\"\n").unwrap();

    unires_cmd()
        .env("UNIRES_CONFIG", &file)
        .assert()
        .code(2);
}

// ── Connection failures ─────────────────────────────────────────────

#[test]
fn unreachable_controller_exits_1_with_message() {
    let base = format!("http://127.0.0.1:{}", closed_port());

    against(&base)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "Could not connect to UniFi controller at {base}"
        )));
}

#[test]
fn unreachable_https_controller_suggests_tls_options() {
    let base = format!("https://127.0.0.1:{}", closed_port());

    against(&base)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains(format!("Could not connect to UniFi controller at {base}"))
                .and(predicate::str::contains("--insecure"))
                .and(predicate::str::contains("--ca-cert")),
        );
}

#[test]
fn unreachable_plaintext_controller_has_no_tls_hint() {
    let base = format!("http://127.0.0.1:{}", closed_port());

    against(&base)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--ca-cert").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_over_plaintext_hints_https() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/login", ResponseTemplate::new(400), 1).await;
    mount(&server, "GET", "/api/s/default/list/user", envelope(json!([])), 0).await;

    against(&server.uri())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "You should probably connect using HTTPS instead of HTTP",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_envelope_exits_1() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/login", envelope(json!([])), 1).await;
    mount(
        &server,
        "GET",
        "/api/s/nowhere/list/user",
        ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.NoSiteContext" },
            "data": []
        })),
        1,
    )
    .await;

    against(&server.uri())
        .env("UNIFI_SITE", "nowhere")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("api.err.NoSiteContext"));
}

// ── End to end ──────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn prints_reconciled_reservations() {
    let server = classic_controller(1).await;

    against(&server.uri())
        .assert()
        .success()
        .stdout("10.0.0.9 printer-new\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_alias_and_debug_logging_keep_stdout_clean() {
    let server = classic_controller(1).await;

    against(&server.uri())
        .env("LOG_LEVEL", "DEBUG")
        .arg("list")
        .assert()
        .success()
        .stdout("10.0.0.9 printer-new\n")
        .stderr(predicate::str::contains("skipped due to invalid characters"));
}

#[tokio::test(flavor = "multi_thread")]
async fn fixed_only_skips_active_clients() {
    let server = classic_controller(0).await;

    against(&server.uri())
        .env("FIXED_ONLY", "1")
        .assert()
        .success()
        .stdout("10.0.0.5 printer\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn fixed_only_falsey_value_keeps_active_clients() {
    let server = classic_controller(1).await;

    against(&server.uri())
        .env("FIXED_ONLY", "false")
        .assert()
        .success()
        .stdout("10.0.0.9 printer-new\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn unifi_os_uses_proxy_paths() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/auth/login", envelope(json!([])), 1).await;
    mount(
        &server,
        "GET",
        "/proxy/network/api/s/home/list/user",
        envelope(json!([{ "mac": "01", "name": "nas", "fixed_ip": "192.168.1.2" }])),
        1,
    )
    .await;
    mount(
        &server,
        "GET",
        "/proxy/network/api/s/home/stat/sta",
        envelope(json!([{ "mac": "02", "name": "laptop", "ip": "192.168.1.50" }])),
        1,
    )
    .await;

    against(&server.uri())
        .args(["--platform", "unifi-os", "--site", "home"])
        .assert()
        .success()
        .stdout("192.168.1.50 laptop\n192.168.1.2 nas\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn json_output() {
    let server = classic_controller(1).await;

    let output = against(&server.uri())
        .args(["--output", "json-compact"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!([{ "name": "printer-new", "ip": "10.0.0.9" }]));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_inventory_prints_nothing() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/api/login", envelope(json!([])), 1).await;
    mount(&server, "GET", "/api/s/default/list/user", envelope(json!([])), 1).await;
    mount(&server, "GET", "/api/s/default/stat/sta", envelope(json!([])), 1).await;

    against(&server.uri())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn config_file_supplies_settings() {
    let server = classic_controller(0).await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(
        &file,
        format!(
            "base_url = \"{}\"\nusername = \"admin\"\npassword = \"hunter2\"\nfixed_only = true\n",
            server.uri()
        ),
    )
    .unwrap();

    unires_cmd()
        .env("UNIRES_CONFIG", &file)
        .assert()
        .success()
        .stdout("10.0.0.5 printer\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn env_false_overrides_fixed_only_in_config_file() {
    let server = classic_controller(1).await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(
        &file,
        format!(
            "base_url = \"{}\"\nusername = \"admin\"\npassword = \"hunter2\"\nfixed_only = true\n",
            server.uri()
        ),
    )
    .unwrap();

    unires_cmd()
        .env("UNIRES_CONFIG", &file)
        .env("FIXED_ONLY", "false")
        .assert()
        .success()
        .stdout("10.0.0.9 printer-new\n");
}

// ── Config subcommands ──────────────────────────────────────────────

#[test]
fn config_path_prints_selected_file() {
    unires_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{NO_CONFIG}\n"));
}

#[test]
fn config_show_masks_password() {
    unires_cmd()
        .env("UNIFI_USERNAME", "admin")
        .env("UNIFI_PASSWORD", "hunter2")
        .env("UNIFI_SITE", "lab")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("username = \"admin\"")
                .and(predicate::str::contains("site = \"lab\""))
                .and(predicate::str::contains("password = \"****\""))
                .and(predicate::str::contains("hunter2").not()),
        );
}

#[test]
fn set_password_requires_username() {
    unires_cmd()
        .args(["config", "set-password"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("username"));
}
