/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Library surface of Syn-OTA-Core: load an Apple OTA update
    catalog, classify and select entries for one device, order
    them, and render a report or wiki table.

  Security / Safety Notes:
    Operates on local files only; no network access.

  Dependencies:
    plist for catalog decoding, regex for identifier shapes.

  Operational Scope:
    Consumed by the `syn-ota-core` binary and its tests.

  Revision History:
    2026-10-18 COD  Split library surface from the binary.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Explicit state passed between pipeline stages
============================================================*/

pub mod catalog;
pub mod config;
pub mod device;
pub mod error;
pub mod filter;
pub mod logger;
pub mod package_record;
pub mod report;
pub mod rowspan;
pub mod sorter;
pub mod wiki;

#[cfg(test)]
mod test_support;

pub use catalog::CatalogDocument;
pub use config::SynotaConfig;
pub use device::DeviceFamily;
pub use error::{Result, SynotaError};
pub use filter::{EntryFilter, FilterCriteria};
pub use logger::Logger;
pub use package_record::{BetaType, PackageRecord};
pub use report::render_report;
pub use rowspan::{Cell, GroupColumn, RowspanGrouper};
pub use sorter::sort_records;
pub use wiki::{render_wiki, WikiOptions};
