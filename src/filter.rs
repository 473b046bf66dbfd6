/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::filter
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Walk the catalog's assets, build PackageRecords and keep
    only those matching the requested device, model, version
    range and beta preference.

  Security / Safety Notes:
    Pure in-memory selection; no I/O beyond diagnostics.

  Dependencies:
    None beyond crate modules.

  Operational Scope:
    Sits between catalog loading and sorting.

  Revision History:
    2026-10-18 COD  Authored entry filter.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Insertion order preserved for downstream stable sorts
    - Non-fatal anomalies reported, never swallowed
============================================================*/

use plist::Value;

use crate::error::Result;
use crate::logger::Logger;
use crate::package_record::PackageRecord;

/// Selection criteria for catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub device: String,
    pub model: Option<String>,
    /// Require `model` to appear in `SupportedDeviceModels`.
    pub check_model: bool,
    /// Lowest marketing version kept, compared lexically.
    pub min_version: Option<String>,
    /// Highest marketing version kept, compared lexically.
    pub max_version: Option<String>,
    pub include_betas: bool,
}

impl FilterCriteria {
    pub fn for_device(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Self::default()
        }
    }

    /// Decide whether an already-built record survives the criteria.
    pub fn matches(&self, record: &PackageRecord) -> bool {
        if !self.include_betas && record.is_beta() {
            return false;
        }

        if !record.supported_devices().contains(&self.device) {
            return false;
        }

        if self.check_model {
            let listed = match (record.supported_device_models(), self.model.as_ref()) {
                (Some(models), Some(model)) => models.contains(model),
                _ => false,
            };
            if !listed {
                return false;
            }
        }

        // Lexical on purpose: "10.0" sorts below "9.0" here.
        let version = record.marketing_version();
        if let Some(max) = &self.max_version {
            if max.as_str() < version {
                return false;
            }
        }
        if let Some(min) = &self.min_version {
            if min.as_str() > version {
                return false;
            }
        }

        true
    }
}

/// Builds and filters PackageRecords from raw catalog assets.
pub struct EntryFilter<'a> {
    criteria: &'a FilterCriteria,
    logger: &'a Logger,
}

impl<'a> EntryFilter<'a> {
    pub fn new(criteria: &'a FilterCriteria, logger: &'a Logger) -> Self {
        Self { criteria, logger }
    }

    /// Records matching the criteria, in catalog order.
    ///
    /// Every asset is parsed, so a malformed entry aborts the run even when it
    /// targets another device.
    pub fn apply(&self, assets: &[Value]) -> Result<Vec<PackageRecord>> {
        let mut kept = Vec::new();
        for asset in assets {
            let record = PackageRecord::from_asset(asset)?;

            if let Some(tag) = record.unrecognized_release_type() {
                self.logger.warn(
                    "RELTYPE",
                    format!(
                        "Unknown ReleaseType: {tag} (build {})",
                        record.declared_build()
                    ),
                );
            }

            if self.criteria.matches(&record) {
                self.logger.debug(
                    "FILTER",
                    format!(
                        "kept {} ({}) from {}",
                        record.marketing_version(),
                        record.actual_build(),
                        record.prerequisite_build()
                    ),
                );
                kept.push(record);
            }
        }
        Ok(kept)
    }
}
