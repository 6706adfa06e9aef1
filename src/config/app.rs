//! Main application configuration
//!
//! Values come from a TOML file or from environment variables, falling back
//! to defaults, and are validated before use.

use crate::filter::RankRange;
use crate::rank::Rank;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub output: OutputSettings,
    pub filter: FilterSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Print the tier's presentation token next to text output
    pub show_color_class: bool,
}

/// Defaults applied when a filter command gives no bound
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub default_min_rank: Option<Rank>,
    pub default_max_rank: Option<Rank>,
}

impl FilterSettings {
    /// Range built from the configured defaults
    pub fn default_range(&self) -> Result<RankRange> {
        Ok(RankRange::new(self.default_min_rank, self.default_max_rank)?)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "scrim-rank".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_color_class: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a key lookup, e.g. a snapshot of the environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Some(name) = lookup("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Output settings
        if let Some(format) = lookup("OUTPUT_FORMAT") {
            config.output.format = format.parse()?;
        }
        if let Some(show) = lookup("SHOW_COLOR_CLASS") {
            config.output.show_color_class = show
                .parse()
                .map_err(|_| anyhow!("Invalid SHOW_COLOR_CLASS value: {}", show))?;
        }

        // Filter settings
        if let Some(min) = lookup("DEFAULT_MIN_RANK") {
            config.filter.default_min_rank = Some(
                min.parse::<Rank>()
                    .with_context(|| format!("Invalid DEFAULT_MIN_RANK value: {}", min))?,
            );
        }
        if let Some(max) = lookup("DEFAULT_MAX_RANK") {
            config.filter.default_max_rank = Some(
                max.parse::<Rank>()
                    .with_context(|| format!("Invalid DEFAULT_MAX_RANK value: {}", max))?,
            );
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate default filter range
    config.filter.default_range()?;

    Ok(())
}
