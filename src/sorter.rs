/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::sorter
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Put filtered PackageRecords into canonical display order.

  Security / Safety Notes:
    Pure in-memory ordering.

  Dependencies:
    None beyond std.

  Operational Scope:
    Runs once per invocation, before grouping and rendering.

  Revision History:
    2026-10-18 COD  Authored record ordering.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Deterministic ordering for reproducible output
============================================================*/

use crate::package_record::PackageRecord;

/// Order records by marketing version, then build, then prerequisite build.
///
/// Three chained stable sorts, least significant key first. Ties left by a
/// later pass keep the order established by the earlier ones.
pub fn sort_records(records: &mut [PackageRecord]) {
    records.sort_by_cached_key(PackageRecord::sorting_prerequisite_build);
    records.sort_by_cached_key(PackageRecord::sorting_build);
    records.sort_by(|a, b| a.marketing_version().cmp(b.marketing_version()));
}
