// Mon Jan 19 2026 - Alex

use crate::bounds::BoundsCheckMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: BoundsCheckMode,
    pub parallel: bool,
    pub threads: Option<usize>,
    pub parallel_min_indices: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: BoundsCheckMode::Warning,
            parallel: true,
            threads: None,
            parallel_min_indices: 1 << 16,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config {:?}: {}", path.as_ref(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config {:?}: {}", path.as_ref(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_mode(mut self, mode: BoundsCheckMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_parallel_min_indices(mut self, min: usize) -> Self {
        self.parallel_min_indices = min;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// Worker count the parallel path will use.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("threads must be greater than 0".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join("/"),
                self.log_level
            ));
        }
        Ok(())
    }
}
