// Mon Jan 19 2026 - Alex

use crate::bounds::error::BoundsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How violations are handled. The integer encoding matches the operator
/// argument callers already pass: 0 = fatal, 1 = warning, 2 = ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoundsCheckMode {
    Fatal,
    Warning,
    Ignore,
}

impl BoundsCheckMode {
    pub fn as_i64(self) -> i64 {
        match self {
            BoundsCheckMode::Fatal => 0,
            BoundsCheckMode::Warning => 1,
            BoundsCheckMode::Ignore => 2,
        }
    }

    pub fn repairs(self) -> bool {
        !matches!(self, BoundsCheckMode::Fatal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoundsCheckMode::Fatal => "FATAL",
            BoundsCheckMode::Warning => "WARNING",
            BoundsCheckMode::Ignore => "IGNORE",
        }
    }
}

impl Default for BoundsCheckMode {
    fn default() -> Self {
        BoundsCheckMode::Warning
    }
}

impl TryFrom<i64> for BoundsCheckMode {
    type Error = BoundsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BoundsCheckMode::Fatal),
            1 => Ok(BoundsCheckMode::Warning),
            2 => Ok(BoundsCheckMode::Ignore),
            other => Err(BoundsError::InvalidMode(other)),
        }
    }
}

impl FromStr for BoundsCheckMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" => Ok(BoundsCheckMode::Fatal),
            "warning" | "warn" => Ok(BoundsCheckMode::Warning),
            "ignore" => Ok(BoundsCheckMode::Ignore),
            _ => Err(format!("Unknown bounds check mode: {}", s)),
        }
    }
}

impl fmt::Display for BoundsCheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
