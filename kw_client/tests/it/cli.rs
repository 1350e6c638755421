use super::*;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_exports_keywords() {
    let mut server = mockito::Server::new();
    let _first = server
        .mock("POST", "/completions")
        .match_body(Matcher::Regex("prompt: Graphs in Rust".to_string()))
        .with_status(200)
        .with_body(completion_body("\nanswers: Rust, Neo4j"))
        .create();
    let _second = server
        .mock("POST", "/completions")
        .match_body(Matcher::Regex("prompt: Cooking for engineers".to_string()))
        .with_status(200)
        .with_body(completion_body("No technology here."))
        .create();
    let _third = server
        .mock("POST", "/completions")
        .match_body(Matcher::Regex("prompt: Python tooling".to_string()))
        .with_status(200)
        .with_body(completion_body("\nanswers: Python"))
        .create();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("sessions.csv"),
        "Title,Speaker\nGraphs in Rust,Ana\nCooking for engineers,Bo\nPython tooling,Cy\n",
    )
    .unwrap();

    Command::cargo_bin("kw_export")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("OPENAI_API_KEY")
        .args(["-f", "sessions.csv", "-l", "Title", "-k", "Speaker", "-o", "out.csv"])
        .args(["--api-key", "sk-test", "--api-host", &server.url(), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 keyword records"));

    let rows = load_table(dir.path().join("exports").join("out.csv")).unwrap();
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.get("keyword").unwrap(), r.get("Speaker").unwrap()))
        .collect();
    assert_eq!(pairs, vec![("Rust", "Ana"), ("Neo4j", "Ana"), ("Python", "Cy")]);

    let log = std::fs::read_to_string(dir.path().join("logs.log")).unwrap();
    assert!(log.contains("produced no keywords"));
}

#[test]
fn test_cli_halt_on_empty_keeps_earlier_rows() {
    let mut server = mockito::Server::new();
    let _first = server
        .mock("POST", "/completions")
        .match_body(Matcher::Regex("prompt: Graphs in Rust".to_string()))
        .with_status(200)
        .with_body(completion_body("\nanswers: Rust"))
        .create();
    let _second = server
        .mock("POST", "/completions")
        .match_body(Matcher::Regex("prompt: Cooking for engineers".to_string()))
        .with_status(200)
        .with_body(completion_body("No technology here."))
        .create();
    let third = server
        .mock("POST", "/completions")
        .match_body(Matcher::Regex("prompt: Python tooling".to_string()))
        .with_status(200)
        .with_body(completion_body("\nanswers: Python"))
        .expect(0)
        .create();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("sessions.csv"),
        "Title\nGraphs in Rust\nCooking for engineers\nPython tooling\n",
    )
    .unwrap();

    Command::cargo_bin("kw_export")
        .unwrap()
        .current_dir(dir.path())
        .args(["-f", "sessions.csv", "-l", "Title", "--halt-on-empty"])
        .args(["--api-key", "sk-test", "--api-host", &server.url(), "--quiet"])
        .assert()
        .success();

    third.assert();
    let contents = std::fs::read_to_string(dir.path().join("exports").join("keywords.csv")).unwrap();
    assert_eq!(contents, "keyword\nRust\n");
}

#[test]
fn test_cli_port_and_log_level_flags() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/completions")
        .with_status(200)
        .with_body(completion_body("\nanswers: Rust"))
        .expect(1)
        .create();
    let port = server.socket_address().port().to_string();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sessions.csv"), "Title\nGraphs in Rust\n").unwrap();

    Command::cargo_bin("kw_export")
        .unwrap()
        .current_dir(dir.path())
        .args(["-f", "sessions.csv", "-l", "Title", "--log-level", "info", "--quiet"])
        .args(["--api-key", "sk-test", "--api-host", "http://127.0.0.1", "--api-port", &port])
        .assert()
        .success();

    mock.assert();
    let log = std::fs::read_to_string(dir.path().join("logs.log")).unwrap();
    assert!(log.contains("INFO"));
    assert!(!log.contains("DEBUG"));
}

#[test]
fn test_cli_requires_headers_list() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("kw_export")
        .unwrap()
        .current_dir(dir.path())
        .args(["-f", "sessions.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--headers-list"));
}

#[test]
fn test_cli_fails_without_api_key() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sessions.csv"), "Title\nRust\n").unwrap();
    Command::cargo_bin("kw_export")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("OPENAI_API_KEY")
        .args(["-f", "sessions.csv", "-l", "Title", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
