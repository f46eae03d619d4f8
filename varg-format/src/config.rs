// Configuration for the directive interpreter

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file searched for by [`Config::from_dir`]
pub const CONFIG_FILE: &str = "varg.json";

/// Interpreter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// What to do with `%` followed by an unknown letter or by nothing
    #[serde(default)]
    pub malformed_directive: MalformedPolicy,

    /// How doubles are rendered by the built-in sinks
    #[serde(default)]
    pub float_style: FloatNotation,

    /// Digits after the decimal point for `fixed` notation
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,
}

/// Handling of malformed directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Consume the directive silently: no extraction, no output
    Drop,
    /// Stop rendering with a `MalformedDirective` error
    Report,
}

/// Float notation as written in the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatNotation {
    /// Shortest representation that round-trips: `2.5`
    Shortest,
    /// Fixed number of decimals, like C's `%f`: `2.500000`
    Fixed,
}

/// Float rendering used by sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle {
    Shortest,
    Fixed { precision: usize },
}

fn default_float_precision() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            malformed_directive: MalformedPolicy::Drop,
            float_style: FloatNotation::Shortest,
            float_precision: default_float_precision(),
        }
    }
}

impl Default for MalformedPolicy {
    fn default() -> Self {
        MalformedPolicy::Drop
    }
}

impl Default for FloatNotation {
    fn default() -> Self {
        FloatNotation::Shortest
    }
}

impl Default for FloatStyle {
    fn default() -> Self {
        FloatStyle::Shortest
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from directory (searches for varg.json upwards)
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut current = Some(dir.as_ref());
        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                log::debug!("Using configuration {}", config_path.display());
                return Self::from_file(config_path);
            }
            current = dir.parent();
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Example configuration file contents
    pub fn example() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::default())?)
    }

    /// Float rendering for sinks built from this configuration
    pub fn float_style(&self) -> FloatStyle {
        match self.float_style {
            FloatNotation::Shortest => FloatStyle::Shortest,
            FloatNotation::Fixed => FloatStyle::Fixed {
                precision: self.float_precision,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.malformed_directive, MalformedPolicy::Drop);
        assert_eq!(config.float_style(), FloatStyle::Shortest);
        assert_eq!(config.float_precision, 6);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "float_style": "fixed" }"#).unwrap();
        assert_eq!(config.malformed_directive, MalformedPolicy::Drop);
        assert_eq!(config.float_style(), FloatStyle::Fixed { precision: 6 });
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            malformed_directive: MalformedPolicy::Report,
            float_style: FloatNotation::Fixed,
            float_precision: 2,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"report\""));
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_example_config() {
        let example = Config::example().unwrap();
        assert!(example.contains("malformed_directive"));
        assert!(example.contains("float_style"));
        assert!(example.contains("float_precision"));
    }
}
