// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// Temporary directories used for testing, removed when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory for database files.
    pub state_dir: PathBuf,
    _base: TempDir,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let state_dir = base.path().join("state");
        fs::create_dir_all(&state_dir).await?;

        Ok(Self {
            state_dir,
            _base: base,
        })
    }
}

/// Sets up temporary directories for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}
