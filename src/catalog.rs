/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::catalog
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Load an OTA update catalog from disk into a generic
    property-list tree and expose its `Assets` sequence.

  Security / Safety Notes:
    Reads a single operator-supplied local file; no network
    access is attempted.

  Dependencies:
    plist for XML/binary property list decoding.

  Operational Scope:
    First stage of every run; feeds EntryFilter.

  Revision History:
    2026-10-18 COD  Authored catalog loader.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Distinct failure modes for missing, foreign and broken files
============================================================*/

use std::io::{Cursor, ErrorKind};
use std::path::Path;

use plist::{Dictionary, Value};

use crate::error::{Result, SynotaError};

const BINARY_MAGIC: &[u8] = b"bplist";

/// A decoded catalog document.
#[derive(Debug, Clone)]
pub struct CatalogDocument {
    root: Dictionary,
}

impl CatalogDocument {
    /// Read and decode the catalog at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                SynotaError::FileNotFound(path.display().to_string())
            }
            _ => SynotaError::Io(err),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Decode a catalog from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value = Value::from_reader(Cursor::new(bytes)).map_err(|err| {
            if declares_property_list(bytes) {
                SynotaError::MalformedPropertyList(err.to_string())
            } else {
                SynotaError::NotPropertyList(err.to_string())
            }
        })?;

        let root = value.into_dictionary().ok_or_else(|| {
            SynotaError::NotPropertyList("top-level object is not a dictionary".into())
        })?;
        Ok(Self { root })
    }

    /// Wrap an already decoded root dictionary.
    #[cfg(test)]
    pub(crate) fn from_root(root: Dictionary) -> Self {
        Self { root }
    }

    /// The entries listed under `Assets`.
    pub fn assets(&self) -> Result<&[Value]> {
        self.root
            .get("Assets")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| SynotaError::missing_key("Assets"))
    }
}

/// True when the bytes announce themselves as a property list, so a decode
/// failure means broken syntax rather than a foreign document.
fn declares_property_list(bytes: &[u8]) -> bool {
    if bytes.starts_with(BINARY_MAGIC) {
        return true;
    }
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    trimmed.starts_with('<') && trimmed.contains("<plist")
}
