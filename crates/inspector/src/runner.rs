//! Executes a built fixture and reports how it exited.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Runs the fixture at `path` to completion and returns its exit status.
///
/// The fixture reads nothing and writes nothing; the status code is its
/// entire observable output.
pub fn run_fixture(path: &Path) -> Result<i32> {
    let status = Command::new(path)
        .status()
        .with_context(|| format!("failed to execute fixture: {}", path.display()))?;

    status.code().context("fixture was terminated by a signal")
}
