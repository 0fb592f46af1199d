//! Configuration loading and resolution for gapscan.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use gapscan::config::{load_config, ScanSettings, SettingsOverrides};
//! use gapscan::scan::SentinelMode;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".gapscan.yml"), "sentinel: explicit").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let settings = ScanSettings::resolve(temp.path(), &config, &SettingsOverrides::default());
//! assert_eq!(settings.sentinel, SentinelMode::Explicit);
//! ```
//!
//! # Precedence
//!
//! Later layers win:
//! 1. Built-in defaults
//! 2. Project config (`.gapscan.yml`) or the `--config` file
//! 3. `GAPSCAN_*` environment variables
//! 4. Command-line flags

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{GapscanConfig, ScanSettings, SettingsOverrides, DEFAULT_INPUT};
