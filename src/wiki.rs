/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::wiki
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Render sorted PackageRecords as MediaWiki table rows,
    merging repeated cells through a RowspanGrouper.

  Security / Safety Notes:
    Produces text only; URLs are emitted verbatim.

  Dependencies:
    regex for download file-name extraction.

  Operational Scope:
    Output of the CLI when `-w` is given.

  Revision History:
    2026-10-18 COD  Authored wiki markup renderer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Grouping state passed in explicitly, never global
    - Device-family columns declared in one place
============================================================*/

use std::sync::OnceLock;

use regex::Regex;

use crate::device::DeviceFamily;
use crate::package_record::{PackageRecord, DATE_NOT_AVAILABLE};
use crate::rowspan::{Cell, GroupColumn, RowspanGrouper};

/// Download archives are named by a 40-digit hex digest.
pub const FILE_NAME_PATTERN: &str = r"[0-9a-f]{40}\.zip";

const TABLE_OPEN: &str = "{| class=\"wikitable\" style=\"font-size: smaller; text-align: center;\"";
const MARKETING_PLACEHOLDER: &str = "[MARKETING VERSION]";
const INFLATED_BUILD_REF: &str = "<ref name=\"fakefive\" />";

/// Rendering switches for wiki output.
#[derive(Debug, Clone, Copy)]
pub struct WikiOptions {
    pub family: DeviceFamily,
    /// Wrap rows in a complete table with a header row.
    pub full_table: bool,
}

/// Render the sorted records, consuming the grouper built from them.
pub fn render_wiki(
    records: &[PackageRecord],
    mut grouper: RowspanGrouper,
    options: WikiOptions,
) -> String {
    let mut out = String::new();
    if options.full_table {
        render_header(&mut out, options.family);
    }
    for record in records {
        render_row(&mut out, record, &mut grouper, options.family);
    }
    if options.full_table {
        out.push_str("|}\n");
    }
    out
}

fn render_header(out: &mut String, family: DeviceFamily) {
    out.push_str(TABLE_OPEN);
    out.push_str("\n|-\n");
    if family.is_watch() {
        out.push_str("! Marketing Version\n");
    }
    out.push_str("! Version\n");
    if family.needs_marketing_placeholder() {
        out.push_str("! Marketing Version\n");
    }
    for title in [
        "Build",
        "Prerequisite Version",
        "Prerequisite Build",
        "Release Date",
        "OTA Download URL",
        "File Size",
    ] {
        out.push_str(&format!("! {title}\n"));
    }
}

fn render_row(
    out: &mut String,
    record: &PackageRecord,
    grouper: &mut RowspanGrouper,
    family: DeviceFamily,
) {
    let beta_suffix = if record.is_beta() { " beta #" } else { "" };

    out.push_str("|-\n");

    if family.is_watch() {
        let cell = grouper.take(GroupColumn::MarketingVersion, record);
        push_cell(out, cell, &format!("{}{beta_suffix}", record.marketing_version()));
    }

    let version_cell = grouper.take(GroupColumn::ActualVersion, record);
    push_cell(out, version_cell, &format!("{}{beta_suffix}", record.actual_version()));
    if family.needs_marketing_placeholder() {
        push_cell(out, version_cell, MARKETING_PLACEHOLDER);
    }

    let build_cell = grouper.take(GroupColumn::Build, record);
    let marker = if record.is_mislabeled_beta() { INFLATED_BUILD_REF } else { "" };
    push_cell(out, build_cell, &format!("{}{marker}", record.actual_build()));

    if record.is_universal() {
        let beta = if record.is_mislabeled_beta() { "|Beta" } else { "" };
        out.push_str(&format!("| colspan=\"2\" {{{{n/a{beta}}}}}\n"));
    } else {
        let cell = grouper.take_prerequisite_version(record);
        push_cell(out, cell, record.prerequisite_version());
        out.push_str(&format!("| {}\n", record.prerequisite_build()));
    }

    let date_cell = grouper.take(GroupColumn::Date, record);
    let date = match record.date_parts() {
        Some((year, month, day)) => format!("{{{{date|{year}|{month}|{day}}}}}"),
        None => DATE_NOT_AVAILABLE.to_string(),
    };
    push_cell(out, date_cell, &date);

    let url_cell = grouper.take(GroupColumn::Url, record);
    push_cell(
        out,
        url_cell,
        &format!("[{} {}]", record.url(), file_name(record.url())),
    );
    push_cell(out, url_cell, &record.size());
}

fn push_cell(out: &mut String, cell: Cell, text: &str) {
    if cell.is_covered() {
        return;
    }
    out.push_str(&format!("| {}{text}\n", cell.attribute()));
}

fn file_name(url: &str) -> &str {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(FILE_NAME_PATTERN).expect("file name pattern compiles"))
        .find(url)
        .map(|found| found.as_str())
        .unwrap_or("")
}
