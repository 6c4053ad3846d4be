//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! team-balancer CLI, including environment variable and file loading and
//! validation.

use crate::balance::TieBreak;
use crate::intake::DEFAULT_JOIN_SUFFIXES;
use crate::types::Strength;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub balancer: BalancerSettings,
    pub intake: IntakeSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Team balancing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerSettings {
    /// Which equally balanced split wins
    pub tie_break: TieBreak,
    /// Strength gap above which a result is reported as lopsided
    pub max_acceptable_difference: Strength,
}

/// Chat log intake settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeSettings {
    /// Join-message suffixes stripped from chat lines
    pub join_suffixes: Vec<String>,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "team-balancer".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for BalancerSettings {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::FirstFound,
            max_acceptable_difference: 400, // one full tier
        }
    }
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            join_suffixes: DEFAULT_JOIN_SUFFIXES
                .iter()
                .map(|suffix| suffix.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still override it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML; missing sections fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Invalid configuration TOML")?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        if let Ok(tie_break) = env::var("TIE_BREAK") {
            self.balancer.tie_break = tie_break
                .parse()
                .map_err(|_| anyhow!("Invalid TIE_BREAK value: {}", tie_break))?;
        }
        if let Ok(max_diff) = env::var("MAX_ACCEPTABLE_DIFFERENCE") {
            self.balancer.max_acceptable_difference = max_diff
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_ACCEPTABLE_DIFFERENCE value: {}", max_diff))?;
        }

        if let Ok(suffixes) = env::var("JOIN_SUFFIXES") {
            self.intake.join_suffixes = suffixes
                .split(',')
                .filter(|suffix| !suffix.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(format) = env::var("OUTPUT_FORMAT") {
            self.output.format = match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => return Err(anyhow!("Invalid OUTPUT_FORMAT value: {}", format)),
            };
        }

        Ok(())
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

    if config
        .intake
        .join_suffixes
        .iter()
        .any(|suffix| suffix.contains('#'))
    {
        return Err(anyhow!("Join suffixes cannot contain '#'"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.balancer.tie_break, TieBreak::FirstFound);
        assert_eq!(config.balancer.max_acceptable_difference, 400);
        assert_eq!(config.intake.join_suffixes.len(), DEFAULT_JOIN_SUFFIXES.len());
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [balancer]
            tie_break = "last_found"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.balancer.tie_break, TieBreak::LastFound);
        assert_eq!(config.balancer.max_acceptable_difference, 400);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.service.name, "team-balancer");
    }

    #[test]
    fn test_tie_break_short_names_in_toml() {
        for (name, expected) in [
            ("first", TieBreak::FirstFound),
            ("first-found", TieBreak::FirstFound),
            ("last", TieBreak::LastFound),
            ("last-found", TieBreak::LastFound),
        ] {
            let config =
                AppConfig::from_toml_str(&format!("[balancer]\ntie_break = \"{}\"", name)).unwrap();
            assert_eq!(config.balancer.tie_break, expected);
            // The TIE_BREAK env path parses the same names
            assert_eq!(name.parse::<TieBreak>().unwrap(), expected);
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_toml_str("[service]\nlog_level = \"loud\"").is_err());
        assert!(AppConfig::from_toml_str("[balancer]\ntie_break = \"random\"").is_err());
        assert!(AppConfig::from_toml_str("[intake]\njoin_suffixes = [\"#joined\"]").is_err());
    }
}
