//! Filesystem locations for persisted state.

use std::path::PathBuf;

use crate::consts::{APP_NAME, DATA_DIR_ENV};

/// Returns the user's home directory
#[cfg(not(windows))]
fn home_dir() -> PathBuf {
  let home = std::env::var("HOME").expect("HOME not set");
  PathBuf::from(home)
}

/// Returns the directory holding the persisted state document.
///
/// The `CULINARY_DATA_DIR` environment variable overrides the platform
/// default, which follows the XDG convention on Unix and `%APPDATA%` on
/// Windows.
pub fn data_dir() -> PathBuf {
  if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
    return PathBuf::from(dir);
  }
  platform_data_dir()
}

#[cfg(windows)]
fn platform_data_dir() -> PathBuf {
  let appdata = std::env::var("APPDATA").expect("APPDATA not set");
  PathBuf::from(appdata).join(APP_NAME)
}

#[cfg(not(windows))]
fn platform_data_dir() -> PathBuf {
  let data_home = std::env::var("XDG_DATA_HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join(".local").join("share"));
  data_home.join(APP_NAME)
}
