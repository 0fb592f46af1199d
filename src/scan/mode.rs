//! Sentinel handling for the running expectation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a running sum of zero is interpreted.
///
/// The first record is never checked in either mode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SentinelMode {
    /// A running sum of zero means "no expectation": the record after it is
    /// neither checked nor used to update the sum, so the scan stays idle
    /// from then on.
    #[default]
    Zero,
    /// Only "no record seen yet" disables the check; zero is an ordinary
    /// expected value.
    Explicit,
}

impl SentinelMode {
    /// Name used in config files, env vars and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for SentinelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentinelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "explicit" => Ok(Self::Explicit),
            _ => Err(format!("unknown sentinel mode: {}", s)),
        }
    }
}
