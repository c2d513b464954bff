// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! File logging; one subscriber per test binary, so a single test lives here

use dare_logging::{init_to_file, Level, LogFormat};

#[test]
fn file_logging_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("nested").join("logs").join("dare-cards.log");

    init_to_file("dare-cards", Level::INFO, LogFormat::Json, &log_path).expect("init logging");
    tracing::info!(dare_id = "dare-1", "card removed");

    assert!(log_path.is_file());
    if std::env::var_os("RUST_LOG").is_none() {
        let contents = std::fs::read_to_string(&log_path).expect("read log");
        let line = contents.lines().find(|line| line.contains("card removed")).expect("log line");
        let record: serde_json::Value = serde_json::from_str(line).expect("json record");
        assert_eq!(record["level"], "INFO");
        assert_eq!(record["fields"]["dare_id"], "dare-1");
    }

    // a second subscriber cannot be installed
    assert!(init_to_file("dare-cards", Level::INFO, LogFormat::Json, &log_path).is_err());
}
