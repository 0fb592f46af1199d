//! Configuration schema.
//!
//! [`GapscanConfig`] mirrors `.gapscan.yml`; every key is optional.
//! [`ScanSettings`] is the fully resolved result after layering defaults,
//! the file and command-line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;
use crate::scan::SentinelMode;

/// Input path used when neither the config nor the command line names one.
pub const DEFAULT_INPUT: &str = "test.txt";

/// Contents of a `.gapscan.yml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GapscanConfig {
    /// File to scan (relative to the project root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Sentinel handling: zero or explicit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<SentinelMode>,

    /// Output format: human or json
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Exit non-zero when any gap is found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_gap: Option<bool>,
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub input: Option<PathBuf>,
    pub sentinel: Option<SentinelMode>,
    pub format: Option<OutputFormat>,
    pub fail_on_gap: bool,
}

/// Resolved settings for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Input path, or `-` for stdin.
    pub input: PathBuf,
    pub sentinel: SentinelMode,
    pub format: OutputFormat,
    pub fail_on_gap: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sentinel: SentinelMode::default(),
            format: OutputFormat::default(),
            fail_on_gap: false,
        }
    }
}

impl ScanSettings {
    /// Layer defaults, then `config`, then `overrides`.
    ///
    /// A relative input from the config file or the default is resolved
    /// against `project_root`. An input given on the command line is kept
    /// as-is, so it stays relative to the working directory.
    pub fn resolve(
        project_root: &Path,
        config: &GapscanConfig,
        overrides: &SettingsOverrides,
    ) -> Self {
        let defaults = Self::default();

        let input = match &overrides.input {
            Some(input) => input.clone(),
            None => Self::anchor(
                project_root,
                config.input.clone().unwrap_or(defaults.input),
            ),
        };

        Self {
            input,
            sentinel: overrides
                .sentinel
                .or(config.sentinel)
                .unwrap_or(defaults.sentinel),
            format: overrides.format.or(config.format).unwrap_or(defaults.format),
            fail_on_gap: overrides.fail_on_gap || config.fail_on_gap.unwrap_or(false),
        }
    }

    /// Whether the input is standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    fn anchor(project_root: &Path, input: PathBuf) -> PathBuf {
        if input.as_os_str() == "-" || input.is_absolute() {
            input
        } else {
            project_root.join(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_tool() {
        let settings = ScanSettings::default();
        assert_eq!(settings.input, PathBuf::from("test.txt"));
        assert_eq!(settings.sentinel, SentinelMode::Zero);
        assert_eq!(settings.format, OutputFormat::Human);
        assert!(!settings.fail_on_gap);
    }

    #[test]
    fn resolve_uses_defaults_without_config() {
        let settings = ScanSettings::resolve(
            Path::new("/project"),
            &GapscanConfig::default(),
            &SettingsOverrides::default(),
        );
        assert_eq!(settings.input, PathBuf::from("/project/test.txt"));
        assert_eq!(settings.sentinel, SentinelMode::Zero);
    }

    #[test]
    fn config_overrides_defaults() {
        let config = GapscanConfig {
            input: Some(PathBuf::from("logs/seq.txt")),
            sentinel: Some(SentinelMode::Explicit),
            format: Some(OutputFormat::Json),
            fail_on_gap: Some(true),
        };
        let settings =
            ScanSettings::resolve(Path::new("/project"), &config, &SettingsOverrides::default());
        assert_eq!(settings.input, PathBuf::from("/project/logs/seq.txt"));
        assert_eq!(settings.sentinel, SentinelMode::Explicit);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.fail_on_gap);
    }

    #[test]
    fn overrides_win_over_config() {
        let config = GapscanConfig {
            input: Some(PathBuf::from("a.txt")),
            sentinel: Some(SentinelMode::Explicit),
            format: Some(OutputFormat::Json),
            fail_on_gap: None,
        };
        let overrides = SettingsOverrides {
            input: Some(PathBuf::from("/abs/b.txt")),
            sentinel: Some(SentinelMode::Zero),
            format: Some(OutputFormat::Human),
            fail_on_gap: true,
        };
        let settings = ScanSettings::resolve(Path::new("/project"), &config, &overrides);
        assert_eq!(settings.input, PathBuf::from("/abs/b.txt"));
        assert_eq!(settings.sentinel, SentinelMode::Zero);
        assert_eq!(settings.format, OutputFormat::Human);
        assert!(settings.fail_on_gap);
    }

    #[test]
    fn command_line_input_is_not_anchored() {
        let config = GapscanConfig {
            input: Some(PathBuf::from("a.txt")),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            input: Some(PathBuf::from("x.txt")),
            ..Default::default()
        };
        let settings = ScanSettings::resolve(Path::new("/project"), &config, &overrides);
        assert_eq!(settings.input, PathBuf::from("x.txt"));
    }

    #[test]
    fn absolute_config_input_is_kept() {
        let config = GapscanConfig {
            input: Some(PathBuf::from("/var/log/seq.txt")),
            ..Default::default()
        };
        let settings =
            ScanSettings::resolve(Path::new("/project"), &config, &SettingsOverrides::default());
        assert_eq!(settings.input, PathBuf::from("/var/log/seq.txt"));
    }

    #[test]
    fn stdin_is_not_anchored() {
        let overrides = SettingsOverrides {
            input: Some(PathBuf::from("-")),
            ..Default::default()
        };
        let settings =
            ScanSettings::resolve(Path::new("/project"), &GapscanConfig::default(), &overrides);
        assert!(settings.reads_stdin());
        assert_eq!(settings.input, PathBuf::from("-"));
    }
}
