/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::report
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Render sorted PackageRecords as a human-readable report.

  Security / Safety Notes:
    Produces text only; the caller decides where it goes.

  Dependencies:
    None beyond crate modules.

  Operational Scope:
    Default output of the CLI when `-w` is not given.

  Revision History:
    2026-10-18 COD  Authored plain-text report renderer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Deterministic formatting for reproducible output
============================================================*/

use crate::device::DeviceFamily;
use crate::package_record::{PackageRecord, DATE_NOT_AVAILABLE, NOT_APPLICABLE};

/// Render one block per record, each followed by a blank line.
pub fn render_report(records: &[PackageRecord], family: DeviceFamily) -> String {
    let mut out = String::new();
    for record in records {
        render_entry(&mut out, record, family.os_name());
    }
    out
}

fn render_entry(out: &mut String, record: &PackageRecord, os_name: &str) {
    out.push_str(&format!("{os_name} {}", record.marketing_version()));
    if let Some(label) = record.beta_type().report_label() {
        out.push(' ');
        out.push_str(label);
        if record.beta_number() > 1 {
            out.push_str(&format!(" {}", record.beta_number()));
        }
    }
    out.push_str(&format!(" (Build {})", record.actual_build()));
    if record.actual_build() != record.declared_build() {
        out.push_str(&format!(" (listed as {})", record.declared_build()));
    }
    out.push('\n');

    if record.is_beta() {
        out.push_str("This is a beta release.\n");
    } else if record.is_mislabeled_beta() {
        out.push_str("This is marked as a beta release (but is not one).\n");
    }

    if record.is_universal() {
        out.push_str("Requires: Not specified\n");
    } else {
        let version = match record.prerequisite_version() {
            NOT_APPLICABLE => "Version not specified".to_string(),
            version => format!("{os_name} {version}"),
        };
        out.push_str(&format!(
            "Requires: {version} (Build {})\n",
            record.prerequisite_build()
        ));
    }

    match record.date_parts() {
        Some((year, month, day)) => {
            out.push_str(&format!("Timestamp: {year}/{month}/{day}\n"));
        }
        None => out.push_str(&format!("Timestamp: {DATE_NOT_AVAILABLE}\n")),
    }

    out.push_str(&format!("URL: {}\n", record.url()));
    out.push_str(&format!("File size: {}\n\n", record.size()));
}
