//! Test utilities for CLI crate integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Run the given future with a timeout, failing the test if it elapses.
///
/// # Panics
///
/// Panics if the timeout elapses before the future completes.
pub async fn run_with_timeout<F, T>(duration: Duration, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(duration, fut)
        .await
        .expect("test timed out")
}

/// Write a harness config into a fresh temp dir, returning both
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lookout.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
