//! End-to-end tests for the chat-labels pipeline

use std::io::Write;

use campus_app::{execute, read_snapshot, run, Cli};
use campus_common::{Config, OutputFormat};
use clap::Parser;

mod support;

use support::{fixture_path, load_fixture};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["chat-labels"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn empty_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

#[test]
fn test_text_output_for_fixture_file() {
    let path = fixture_path("supabase_chats.json");
    let path = path.to_str().unwrap();
    let cli = parse(&["--viewer", "u-ada", path]);

    let snapshot = read_snapshot(cli.snapshot.as_deref(), std::io::empty()).unwrap();
    let out = run(&cli, &empty_config(), &snapshot).unwrap();

    assert_eq!(
        out,
        "b71e-course\tCS101\n\
         8f0c6a52-direct\tGrace Hopper\n\
         e9a1-lonely\tDirect Message\n\
         c3d2-group\tGroup Chat\n\
         f004-broadcast\tConversation\n"
    );
}

#[test]
fn test_json_output_from_stdin() {
    let cli = parse(&["--viewer", "u2", "--format", "json", "-"]);
    let stdin = load_fixture("client_conversations.json");

    let snapshot = read_snapshot(cli.snapshot.as_deref(), stdin.as_bytes()).unwrap();
    let out = run(&cli, &empty_config(), &snapshot).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(rows[0]["id"], "dm-1");
    assert_eq!(rows[0]["displayName"], "Ada");
    assert_eq!(rows[0]["avatarUrl"], "ada.png");
    assert_eq!(rows[2]["courseReference"], "course-cs101");
}

#[test]
fn test_viewer_and_format_from_config() {
    let config = Config::from_lookup(|key| match key {
        "CAMPUS_VIEWER_ID" => Some("u1".to_string()),
        "CAMPUS_OUTPUT_FORMAT" => Some("json".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.output_format().unwrap(), OutputFormat::Json);

    let out = run(&parse(&[]), &config, &load_fixture("client_conversations.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows[0]["displayName"], "Grace");
}

#[test]
fn test_snapshot_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"data": [{"id": "g", "type": "group", "name": "Lab"}]}"#)
        .unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let cli = parse(&["--viewer", "u1", &path]);

    let snapshot = read_snapshot(cli.snapshot.as_deref(), std::io::empty()).unwrap();
    assert_eq!(run(&cli, &empty_config(), &snapshot).unwrap(), "g\tLab\n");
}

#[test]
fn test_invalid_snapshot_shape_is_reported() {
    let cli = parse(&["--viewer", "u1"]);
    let err = run(&cli, &empty_config(), r#"{"rows": []}"#).unwrap_err();

    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to decode snapshot"));
    assert!(chain.contains("no 'data' or 'conversations' array"));
}

#[test]
fn test_format_flag_wins_over_invalid_environment_format() {
    let config = Config::from_lookup(|key| match key {
        "CAMPUS_OUTPUT_FORMAT" => Some("yaml".to_string()),
        _ => None,
    })
    .unwrap();
    let path = fixture_path("client_conversations.json");
    let cli = parse(&["--viewer", "u1", "--format", "text", path.to_str().unwrap()]);

    let out = execute(&cli, &config, std::io::empty()).unwrap();
    assert_eq!(out, "dm-1\tGrace\ngroup-1\tGroup Chat\ncourse-1\tCS101\n");
}

#[test]
fn test_multiline_label_stays_on_one_text_line() {
    let cli = parse(&["--viewer", "u1", "-"]);
    let stdin = r#"[{"id": "g", "kind": "group", "label": "Lab\nSection 2"}]"#;

    let out = execute(&cli, &empty_config(), stdin.as_bytes()).unwrap();
    assert_eq!(out, "g\tLab\\nSection 2\n");
}
