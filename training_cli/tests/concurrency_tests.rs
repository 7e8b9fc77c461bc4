//! Concurrency tests for the fitreps binary.
//!
//! These tests verify that multiple processes can safely:
//! - Create programs in the same store (file locking, no lost updates)
//! - Start the same scheduled day without double-linking it

use assert_cmd::Command;
use std::path::Path;
use std::thread;
use tempfile::TempDir;

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitreps"));
    cmd.env("XDG_CONFIG_HOME", dir.join("config"))
        .arg("--data-dir")
        .arg(dir.join("data"))
        .arg("--user")
        .arg("athlete");
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn load_store(dir: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(dir.join("data").join("store.json"))
        .expect("Failed to read store");
    serde_json::from_str(&contents).expect("Store is not valid JSON")
}

#[test]
fn test_concurrent_program_creation() {
    let temp_dir = setup_test_dir();
    let dir = temp_dir.path().to_path_buf();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dir = dir.clone();
            thread::spawn(move || {
                cli(&dir)
                    .args(["create", "split", "upper_lower", "--days", "7"])
                    .arg("--start")
                    .arg(format!("2024-02-0{}", i + 1))
                    .assert()
                    .success();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let store = load_store(&dir);
    assert_eq!(store["programs"].as_array().unwrap().len(), 4);
    assert_eq!(store["schedule"].as_array().unwrap().len(), 28);
}

#[test]
fn test_concurrent_start_links_once() {
    let temp_dir = setup_test_dir();
    let dir = temp_dir.path().to_path_buf();

    cli(&dir)
        .args(["create", "split", "ppl", "--days", "7", "--start", "2024-01-01"])
        .assert()
        .success();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let dir = dir.clone();
            thread::spawn(move || {
                cli(&dir)
                    .args(["today", "--date", "2024-01-01"])
                    .assert()
                    .success();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let store = load_store(&dir);
    let schedule = store["schedule"].as_array().unwrap();
    let linked: Vec<_> = schedule
        .iter()
        .filter(|e| !e["workout_id"].is_null())
        .collect();
    assert_eq!(linked.len(), 1, "Expected exactly one linked day");

    let workout_id = linked[0]["workout_id"].as_str().unwrap();
    let workouts = store["workouts"].as_array().unwrap();
    assert!(workouts.iter().any(|w| w["id"] == workout_id));
}
