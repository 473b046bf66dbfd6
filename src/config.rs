/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::config
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Load operator configuration for Syn-OTA-Core from TOML,
    falling back to documented defaults.

  Security / Safety Notes:
    Reads a single operator-owned file; no secrets expected.

  Dependencies:
    serde + toml for parsing, dirs for platform directories,
    regex for validating the model-check pattern.

  Operational Scope:
    Read once at start-up by the CLI entry point.

  Revision History:
    2026-10-18 COD  Authored configuration loader.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit defaults for every setting
    - Configuration errors surface with the offending path
============================================================*/

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::device::DEFAULT_MODEL_CHECK_PATTERN;
use crate::error::{Result, SynotaError};

const APP_DIR: &str = "syn-ota";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynotaConfig {
    pub general: GeneralConfig,
    pub filter: FilterConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Directory for session logs.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub include_betas: bool,
    /// Devices matching this pattern have model filtering enabled.
    pub model_check_pattern: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_betas: false,
            model_check_pattern: DEFAULT_MODEL_CHECK_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub full_table: bool,
}

impl SynotaConfig {
    /// Load from `path` when given (it must exist), otherwise from the
    /// per-user config file if present, otherwise defaults.
    pub fn load_from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::load(explicit),
            None => match default_config_path() {
                Some(candidate) if candidate.is_file() => Self::load(&candidate),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            SynotaError::Config(format!("Failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml(&raw)
            .map_err(|err| SynotaError::Config(format!("{}: {err}", path.display())))
    }

    /// Parse configuration text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|err| SynotaError::Config(err.to_string()))?;
        config.model_check_regex()?;
        Ok(config)
    }

    /// Directory receiving session logs.
    pub fn log_dir(&self) -> PathBuf {
        self.general.log_dir.clone().unwrap_or_else(|| {
            dirs::state_dir()
                .or_else(dirs::cache_dir)
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }

    /// Compiled model-check pattern.
    pub fn model_check_regex(&self) -> Result<Regex> {
        Regex::new(&self.filter.model_check_pattern).map_err(|err| {
            SynotaError::Config(format!(
                "Invalid filter.model_check_pattern `{}`: {err}",
                self.filter.model_check_pattern
            ))
        })
    }

    /// Whether `device` needs its entries checked against a model.
    pub fn device_needs_model_check(&self, device: &str) -> Result<bool> {
        Ok(self.model_check_regex()?.is_match(device))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
