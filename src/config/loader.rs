//! Configuration file discovery and loading.

use crate::config::schema::GapscanConfig;
use crate::error::{GapscanError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = ".gapscan.yml";

/// Find the project config at `<project_root>/.gapscan.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into GapscanConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GapscanConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GapscanError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GapscanError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into GapscanConfig.
///
/// An empty document yields the default config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<GapscanConfig> {
    if content.trim().is_empty() {
        return Ok(GapscanConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GapscanError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project config is used when present, and defaults when it is not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<GapscanConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from override {}", path.display());
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, project_root.display());
            Ok(GapscanConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use crate::scan::SentinelMode;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), config).unwrap();
        temp
    }

    #[test]
    fn finds_project_config() {
        let temp = setup_project("sentinel: zero");
        assert_eq!(
            find_project_config(temp.path()),
            Some(temp.path().join(".gapscan.yml"))
        );
    }

    #[test]
    fn missing_project_config_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(find_project_config(temp.path()).is_none());
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_config(
            "input: seq.txt\nsentinel: explicit\nformat: json\nfail_on_gap: true\n",
            Path::new(".gapscan.yml"),
        )
        .unwrap();
        assert_eq!(config.input, Some(PathBuf::from("seq.txt")));
        assert_eq!(config.sentinel, Some(SentinelMode::Explicit));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.fail_on_gap, Some(true));
    }

    #[test]
    fn empty_config_is_default() {
        let config = parse_config("  \n", Path::new(".gapscan.yml")).unwrap();
        assert_eq!(config, GapscanConfig::default());
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let result = parse_config("sentinal: zero\n", Path::new(".gapscan.yml"));
        assert!(matches!(
            result,
            Err(GapscanError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn invalid_sentinel_is_parse_error() {
        let result = parse_config("sentinel: maybe\n", Path::new(".gapscan.yml"));
        assert!(matches!(
            result,
            Err(GapscanError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn load_config_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, GapscanConfig::default());
    }

    #[test]
    fn load_config_reads_project_file() {
        let temp = setup_project("format: json\n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn load_config_override_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("other.yml");
        let result = load_config(temp.path(), Some(&missing));
        assert!(matches!(result, Err(GapscanError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_override_ignores_project_file() {
        let temp = setup_project("format: json\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "sentinel: explicit\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.format, None);
        assert_eq!(config.sentinel, Some(SentinelMode::Explicit));
    }
}
