/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::error
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Centralise Syn-OTA-Core error types to provide consistent
    diagnostics and exit semantics.

  Security / Safety Notes:
    Error contexts expose only catalog keys and operator paths;
    catalog contents are never echoed wholesale.

  Dependencies:
    thiserror for ergonomic error definitions.

  Operational Scope:
    Used across modules to propagate recoverable failures and
    consolidate exit codes for the binary entry point.

  Revision History:
    2026-10-18 COD  Established shared error definitions.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit error taxonomy with actionable context
    - No silent failure paths
    - Stable exit codes for operational tooling
============================================================*/

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Result alias for Syn-OTA-Core operations.
pub type Result<T> = std::result::Result<T, SynotaError>;

/// Enumerates high-level error domains surfaced by Syn-OTA-Core.
#[derive(Debug, Error)]
pub enum SynotaError {
    #[error("You need to set a device with the \"-d\" argument, e.g. iPhone3,1 or iPad2,7 (got `{0}`)")]
    InvalidDevice(String),
    #[error("You need to supply a file name with the \"-f\" argument")]
    MissingFile,
    #[error("The file \"{0}\" can't be found")]
    FileNotFound(String),
    #[error("You need to specify a model with the \"-m\" argument, e.g. N71AP (got `{0}`)")]
    InvalidModel(String),
    #[error("You need to specify a version if you are using the \"-max\" argument, e.g. 4.3 or 8.0.1 (got `{0}`)")]
    InvalidMaxVersion(String),
    #[error("You need to specify a version if you are using the \"-min\" argument, e.g. 4.3 or 8.0.1 (got `{0}`)")]
    InvalidMinVersion(String),
    #[error("This isn't an Apple property list: {0}")]
    NotPropertyList(String),
    #[error("This file doesn't have proper property list syntax: {0}")]
    MalformedPropertyList(String),
    #[error("Catalog: {0}")]
    Catalog(String),
    #[error("{0}")]
    Usage(String),
    #[error("Configuration: {0}")]
    Config(String),
    #[error("Filesystem: {0}")]
    Filesystem(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SynotaError {
    /// Numeric exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            SynotaError::InvalidDevice(_) => 1,
            SynotaError::MissingFile | SynotaError::FileNotFound(_) => 2,
            SynotaError::InvalidModel(_) => 3,
            SynotaError::InvalidMaxVersion(_) => 4,
            SynotaError::InvalidMinVersion(_) => 5,
            SynotaError::NotPropertyList(_) => 6,
            SynotaError::MalformedPropertyList(_) => 7,
            SynotaError::Catalog(_) => 8,
            SynotaError::Usage(_) => 10,
            SynotaError::Config(_) => 20,
            SynotaError::Filesystem(_) => 40,
            SynotaError::Io(_) => 41,
        }
    }

    /// Map error category to a deterministic exit code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Shorthand for a missing or mistyped key inside a catalog entry.
    pub(crate) fn missing_key(key: &str) -> Self {
        SynotaError::Catalog(format!("asset is missing required key `{key}`"))
    }
}
