use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("lsm-verse").unwrap();
    cmd.env_remove("LSM_VERSE_CONFIG")
        .env_remove("LSM_VERSE_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_args_prints_response() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/recver.php")
            .query_param("String", "John 3:16")
            .query_param("Out", "json");
        then.status(200).body("OK");
    });

    cmd()
        .env("LSM_VERSE_BASE_URL", server.url("/recver.php"))
        .assert()
        .success()
        .stdout("OK\n");

    api_mock.assert();
}

#[test]
fn test_debug_logs_go_to_stderr_only() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recver.php");
        then.status(200).body("OK");
    });

    cmd()
        .env("LSM_VERSE_BASE_URL", server.url("/recver.php"))
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("OK\n")
        .stderr(contains("Verse API response status"));
}

#[test]
fn test_any_argument_is_a_silent_no_op() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/recver.php");
        then.status(200).body("OK");
    });

    cmd()
        .env("LSM_VERSE_BASE_URL", server.url("/recver.php"))
        .arg("--help")
        .assert()
        .success()
        .stdout("")
        .stderr("");

    cmd()
        .env("LSM_VERSE_BASE_URL", server.url("/recver.php"))
        .args(["Rom.", "8:2"])
        .assert()
        .success()
        .stdout("");

    api_mock.assert_hits(0);
}

#[test]
fn test_arguments_skip_configuration_entirely() {
    // 設定無效也不應該被讀取
    cmd()
        .env("LSM_VERSE_BASE_URL", "not a url")
        .arg("anything")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_bad_status_exits_with_two() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recver.php");
        then.status(404);
    });

    cmd()
        .env("LSM_VERSE_BASE_URL", server.url("/recver.php"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("404"));
}

#[test]
fn test_connection_refused_exits_with_three() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    cmd()
        .env("LSM_VERSE_BASE_URL", format!("http://{}/recver.php", addr))
        .assert()
        .code(3)
        .stdout("")
        .stderr(contains("Connection error"));
}

#[test]
fn test_invalid_base_url_exits_with_one() {
    cmd()
        .env("LSM_VERSE_BASE_URL", "ftp://api.lsm.org/recver.php")
        .assert()
        .code(1)
        .stderr(contains("api.base_url"));
}

#[test]
fn test_config_file_selects_endpoint() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/lsm/recver.php");
        then.status(200).body(r#"{"verses":[]}"#);
    });

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[api]\nbase_url = \"{}\"\ntimeout_seconds = 5\n\n[logging]\nformat = \"json\"\n",
        server.url("/lsm/recver.php")
    )
    .unwrap();

    cmd()
        .env("LSM_VERSE_CONFIG", config_file.path())
        .assert()
        .success()
        .stdout("{\"verses\":[]}\n");

    api_mock.assert();
}
