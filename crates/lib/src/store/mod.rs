//! State persistence.
//!
//! The entire aggregate is stored as one pretty-printed JSON document.
//!
//! # Storage Layout
//!
//! ```text
//! {data_dir}/
//! └── state.json          # The complete AppState aggregate
//! ```
//!
//! Loading never fails: a missing or corrupt document degrades to the
//! default aggregate, and the problem is only visible in the diagnostic
//! log. Saving overwrites the previous document wholesale; the store is
//! called after every mutation, so durability lag is bounded by one user
//! action.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use crate::consts::{EXPORT_PREFIX, STATE_FILENAME};
use crate::model::AppState;
use crate::paths::data_dir;

/// Error during state persistence or import/export.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("failed to create data directory: {0}")]
  CreateDir(#[source] io::Error),
  #[error("failed to write state: {0}")]
  Write(#[source] io::Error),
  #[error("failed to serialize state: {0}")]
  Serialize(#[source] serde_json::Error),
  /// The selected import file is unreadable or not valid JSON.
  #[error("invalid file: {0}")]
  InvalidFile(String),
}

/// Reads and writes the persisted aggregate.
#[derive(Debug, Clone)]
pub struct StateStore {
  /// Directory holding the state document.
  base_path: PathBuf,
}

impl StateStore {
  /// Create a store rooted at the given directory.
  pub fn new(base_path: PathBuf) -> Self {
    Self { base_path }
  }

  /// Create a store at the default platform location.
  ///
  /// See [`crate::paths::data_dir`] for the resolution rules.
  pub fn default_store() -> Self {
    Self::new(data_dir())
  }

  pub fn base_path(&self) -> &Path {
    &self.base_path
  }

  /// Path of the state document.
  pub fn state_path(&self) -> PathBuf {
    self.base_path.join(STATE_FILENAME)
  }

  fn ensure_dir(&self) -> Result<(), StoreError> {
    fs::create_dir_all(&self.base_path).map_err(StoreError::CreateDir)
  }

  /// Load the aggregate, falling back to defaults.
  ///
  /// Absence is normal on first run. A document that cannot be read or
  /// parsed degrades to the default aggregate; the failure is logged, never
  /// surfaced. Fields missing from a parseable document default
  /// independently (see [`AppState`]).
  pub fn load(&self) -> AppState {
    let path = self.state_path();

    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %path.display(), "no state document, starting from defaults");
        return AppState::default();
      }
      Err(e) => {
        warn!(path = %path.display(), error = %e, "failed to read state document, using defaults");
        return AppState::default();
      }
    };

    match serde_json::from_str(&content) {
      Ok(state) => state,
      Err(e) => {
        warn!(path = %path.display(), error = %e, "state document is corrupt, using defaults");
        AppState::default()
      }
    }
  }

  /// Persist the aggregate, overwriting the previous document.
  ///
  /// Uses write-to-temp-then-rename so a crash cannot leave a half-written
  /// document behind. Last writer wins.
  pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
    self.ensure_dir()?;

    let path = self.state_path();
    let temp_path = self.base_path.join(format!("{STATE_FILENAME}.tmp"));

    let content = serde_json::to_string_pretty(state).map_err(StoreError::Serialize)?;
    fs::write(&temp_path, &content).map_err(StoreError::Write)?;
    fs::rename(&temp_path, &path).map_err(StoreError::Write)?;

    debug!(path = %path.display(), "state saved");
    Ok(())
  }

  /// Write a dated export of the aggregate into `dir`.
  ///
  /// The file is named `culinary-companion-export-<date>.json` and contains
  /// the pretty-printed aggregate with no wrapping metadata. Returns the
  /// path written.
  pub fn export_to_file(&self, state: &AppState, dir: &Path) -> Result<PathBuf, StoreError> {
    let filename = format!("{}{}.json", EXPORT_PREFIX, Local::now().format("%Y-%m-%d"));
    let path = dir.join(filename);

    let content = serde_json::to_string_pretty(state).map_err(StoreError::Serialize)?;
    fs::write(&path, &content).map_err(StoreError::Write)?;

    Ok(path)
  }

  /// Parse a previously exported document.
  ///
  /// The parsed aggregate is meant to replace the in-memory state wholesale;
  /// callers keep the current state when this fails.
  pub fn import_from_file(path: &Path) -> Result<AppState, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::InvalidFile(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| StoreError::InvalidFile(e.to_string()))
  }
}
