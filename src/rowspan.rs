/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::rowspan
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Count runs of repeated column values across the sorted
    record list and hand them out once, so wiki tables can
    merge identical consecutive cells with `rowspan`.

  Security / Safety Notes:
    Pure in-memory bookkeeping; state is owned per render.

  Dependencies:
    None beyond std.

  Operational Scope:
    Built by the wiki renderer from the sorted list and drained
    row by row while the table is written.

  Revision History:
    2026-10-18 COD  Authored rowspan grouping.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit state instead of process-wide counters
    - Consume-once semantics keep spans from repeating
============================================================*/

use std::collections::HashMap;

use crate::package_record::PackageRecord;

/// Grouped columns keyed by a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupColumn {
    /// Extra watch column, keyed by marketing version.
    MarketingVersion,
    /// Main version column, keyed by the listed OS version.
    ActualVersion,
    /// Build column, keyed by declared build.
    Build,
    /// Release date column. Keyed by actual build because two different
    /// builds can share a timestamp.
    Date,
    /// Download URL and file size columns.
    Url,
}

impl GroupColumn {
    pub const ALL: [GroupColumn; 5] = [
        GroupColumn::MarketingVersion,
        GroupColumn::ActualVersion,
        GroupColumn::Build,
        GroupColumn::Date,
        GroupColumn::Url,
    ];

    fn key(self, record: &PackageRecord) -> &str {
        match self {
            GroupColumn::MarketingVersion => record.marketing_version(),
            GroupColumn::ActualVersion => record.actual_version(),
            GroupColumn::Build => record.declared_build(),
            GroupColumn::Date => record.actual_build(),
            GroupColumn::Url => record.url(),
        }
    }
}

/// What a row should emit for a grouped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// First row of a run of `n > 1` identical values.
    Spanning(u32),
    /// A value that occurs once.
    Plain,
    /// Already covered by an earlier spanning cell; emit nothing.
    Covered,
}

impl Cell {
    fn from_count(count: Option<u32>) -> Self {
        match count {
            Some(n) if n > 1 => Cell::Spanning(n),
            Some(_) => Cell::Plain,
            None => Cell::Covered,
        }
    }

    /// Rows this cell occupies in the rendered table.
    #[cfg(test)]
    pub(crate) fn rows(self) -> u32 {
        match self {
            Cell::Spanning(n) => n,
            Cell::Plain => 1,
            Cell::Covered => 0,
        }
    }

    /// `rowspan="n" | ` for spanning cells, empty otherwise.
    pub fn attribute(self) -> String {
        match self {
            Cell::Spanning(n) => format!("rowspan=\"{n}\" | "),
            Cell::Plain | Cell::Covered => String::new(),
        }
    }

    pub fn is_covered(self) -> bool {
        self == Cell::Covered
    }
}

/// Run-length counts for the grouped wiki columns.
#[derive(Debug, Default, Clone)]
pub struct RowspanGrouper {
    columns: HashMap<GroupColumn, HashMap<String, u32>>,
    /// Declared build -> prerequisite version -> count.
    prerequisites: HashMap<String, HashMap<String, u32>>,
}

impl RowspanGrouper {
    /// Tally every grouped value over the sorted records.
    pub fn count(records: &[PackageRecord]) -> Self {
        let mut grouper = Self::default();
        for record in records {
            for column in GroupColumn::ALL {
                *grouper
                    .columns
                    .entry(column)
                    .or_default()
                    .entry(column.key(record).to_string())
                    .or_insert(0) += 1;
            }
            // Universal rows render a colspan and never claim this cell.
            if record.is_universal() {
                continue;
            }
            *grouper
                .prerequisites
                .entry(record.declared_build().to_string())
                .or_default()
                .entry(record.prerequisite_version().to_string())
                .or_insert(0) += 1;
        }
        grouper
    }

    /// Count still pending for `record` in `column`, without consuming it.
    #[cfg(test)]
    pub(crate) fn pending(&self, column: GroupColumn, record: &PackageRecord) -> Option<u32> {
        self.columns
            .get(&column)
            .and_then(|counts| counts.get(column.key(record)))
            .copied()
    }

    /// Claim the cell for `record` in `column`. The first claim of a value
    /// receives its whole count; later claims are covered.
    pub fn take(&mut self, column: GroupColumn, record: &PackageRecord) -> Cell {
        let count = self
            .columns
            .get_mut(&column)
            .and_then(|counts| counts.remove(column.key(record)));
        Cell::from_count(count)
    }

    /// Claim the prerequisite-version cell, grouped within the declared build.
    pub fn take_prerequisite_version(&mut self, record: &PackageRecord) -> Cell {
        let count = self
            .prerequisites
            .get_mut(record.declared_build())
            .and_then(|versions| versions.remove(record.prerequisite_version()));
        Cell::from_count(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::sort_records;
    use crate::test_support::AssetBuilder;

    const SHARED_URL: &str = "http://appldnld.apple.com/ios/031-73139-20160825-X/shared.zip";

    #[test]
    fn identical_urls_span_once() {
        let records = vec![
            AssetBuilder::new("13G36", "9.3.5").url(SHARED_URL).record(),
            AssetBuilder::new("13G36", "9.3.5")
                .url(SHARED_URL)
                .prerequisite("9.3.4", "13G35")
                .record(),
        ];
        let mut grouper = RowspanGrouper::count(&records);
        assert_eq!(grouper.take(GroupColumn::Url, &records[0]), Cell::Spanning(2));
        assert_eq!(grouper.take(GroupColumn::Url, &records[1]), Cell::Covered);
    }

    #[test]
    fn single_values_are_plain() {
        let records = vec![
            AssetBuilder::new("13G35", "9.3.4").record(),
            AssetBuilder::new("13G36", "9.3.5").record(),
        ];
        let mut grouper = RowspanGrouper::count(&records);
        assert_eq!(grouper.take(GroupColumn::Build, &records[0]), Cell::Plain);
        assert_eq!(grouper.take(GroupColumn::Build, &records[1]), Cell::Plain);
    }

    #[test]
    fn date_groups_by_actual_build() {
        let records = vec![
            AssetBuilder::new("13G5034", "9.3.5")
                .release_type("Beta")
                .doc_id("iOS935")
                .record(),
            AssetBuilder::new("13G34", "9.3.5").record(),
        ];
        let mut grouper = RowspanGrouper::count(&records);
        assert_eq!(grouper.take(GroupColumn::Build, &records[0]), Cell::Plain);
        assert_eq!(grouper.take(GroupColumn::Date, &records[0]), Cell::Spanning(2));
        assert_eq!(grouper.take(GroupColumn::Date, &records[1]), Cell::Covered);
    }

    #[test]
    fn prerequisite_versions_group_within_build() {
        let records = vec![
            AssetBuilder::new("13G36", "9.3.5").prerequisite("9.3.4", "13G35").record(),
            AssetBuilder::new("13G36", "9.3.5").prerequisite("9.3.4", "13G34").record(),
            AssetBuilder::new("13G35", "9.3.4").prerequisite("9.3.4", "13G34").record(),
        ];
        let mut grouper = RowspanGrouper::count(&records);
        assert_eq!(grouper.take_prerequisite_version(&records[0]), Cell::Spanning(2));
        assert_eq!(grouper.take_prerequisite_version(&records[1]), Cell::Covered);
        assert_eq!(grouper.take_prerequisite_version(&records[2]), Cell::Plain);
    }

    #[test]
    fn pending_does_not_consume() {
        let records = vec![
            AssetBuilder::new("13G36", "9.3.5").record(),
            AssetBuilder::new("13G36", "9.3.5").prerequisite("9.3.4", "13G35").record(),
        ];
        let mut grouper = RowspanGrouper::count(&records);
        assert_eq!(grouper.pending(GroupColumn::ActualVersion, &records[0]), Some(2));
        assert_eq!(grouper.take(GroupColumn::ActualVersion, &records[0]), Cell::Spanning(2));
        assert_eq!(grouper.pending(GroupColumn::ActualVersion, &records[1]), None);
    }

    #[test]
    fn spans_cover_every_counted_row() {
        let mut records = vec![
            AssetBuilder::new("13G36", "9.3.5").url(SHARED_URL).record(),
            AssetBuilder::new("13G36", "9.3.5")
                .url(SHARED_URL)
                .prerequisite("9.3.4", "13G35")
                .record(),
            AssetBuilder::new("13G35", "9.3.4").prerequisite("9.3.3", "13G34").record(),
            AssetBuilder::new("13G36", "9.3.5").prerequisite("9.3.3", "13G34").record(),
            AssetBuilder::new("13F69", "9.3.2").record(),
            AssetBuilder::new("13G5034", "9.3.5")
                .release_type("Beta")
                .doc_id("iOS935")
                .record(),
        ];
        sort_records(&mut records);
        let totals = RowspanGrouper::count(&records);
        let mut grouper = totals.clone();

        for column in GroupColumn::ALL {
            let mut emitted: HashMap<String, u32> = HashMap::new();
            for record in &records {
                let expected = grouper.pending(column, record);
                let cell = grouper.take(column, record);
                *emitted.entry(column.key(record).to_string()).or_default() += cell.rows();
                if let Some(total) = expected {
                    assert_eq!(cell.rows(), total);
                }
            }
            for (key, rows) in emitted {
                assert_eq!(Some(&rows), totals.columns[&column].get(&key), "{column:?} {key}");
            }
        }

        let mut emitted: HashMap<(String, String), u32> = HashMap::new();
        for record in records.iter().filter(|record| !record.is_universal()) {
            let cell = grouper.take_prerequisite_version(record);
            let key = (
                record.declared_build().to_string(),
                record.prerequisite_version().to_string(),
            );
            *emitted.entry(key).or_default() += cell.rows();
        }
        for ((build, version), rows) in emitted {
            assert_eq!(Some(&rows), totals.prerequisites[&build].get(&version), "{build} {version}");
        }
    }

    #[test]
    fn universal_rows_do_not_count_toward_prerequisite_spans() {
        let mut records = vec![
            AssetBuilder::new("9B206", "5.1").record(),
            AssetBuilder::new("9B206", "5.1").prerequisite_build("9B176").record(),
            AssetBuilder::new("9B206", "5.1").prerequisite_build("9B179").record(),
        ];
        sort_records(&mut records);
        assert!(records[0].is_universal());
        assert_eq!(records[1].prerequisite_version(), "N/A");

        let mut grouper = RowspanGrouper::count(&records);
        assert_eq!(grouper.take_prerequisite_version(&records[1]), Cell::Spanning(2));
        assert_eq!(grouper.take_prerequisite_version(&records[2]), Cell::Covered);
    }

    #[test]
    fn attributes() {
        assert_eq!(Cell::Spanning(3).attribute(), "rowspan=\"3\" | ");
        assert_eq!(Cell::Plain.attribute(), "");
        assert!(Cell::Covered.is_covered());
    }
}
