/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::package_record
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Wrap one OTA catalog asset and derive its classification
    (beta type, real build number, prerequisites, timestamp)
    plus the lexical keys used to order entries.

  Security / Safety Notes:
    Pure data container; no I/O performed in this module.

  Dependencies:
    plist for the decoded asset tree, regex for the build and
    timestamp heuristics.

  Operational Scope:
    Constructed by EntryFilter, ordered by the sorter and read
    by both renderers.

  Revision History:
    2026-10-18 COD  Introduced PackageRecord classification.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Immutable records derived once at construction
    - Heuristics kept as documented pattern constants
============================================================*/

use std::collections::BTreeSet;
use std::sync::OnceLock;

use plist::{Dictionary, Value};
use regex::Regex;

use crate::error::{Result, SynotaError};

/// Build numbers shaped like a beta seed, e.g. `14E5239e`.
///
/// Apple labels some finals with this shape by inserting an extra numeral
/// after the version letter.
pub const INFLATED_BUILD_PATTERN: &str = r"^\d?\d[A-Z][4-6]\d{3}[a-z]?$";
/// Timestamp embedded in download URLs: four digits of the part number, a
/// separator, then `YYYYMMDD` (or `YYYYMMD` for single-digit days).
pub const URL_TIMESTAMP_PATTERN: &str = r"\d{4}[-.]\d{7,8}";
/// No beta OTA package has been observed above this size; larger
/// "Beta"-tagged packages are treated as mislabeled finals.
pub const BETA_SIZE_CEILING: u64 = 550_000_000;
/// Value used for absent prerequisite fields.
pub const NOT_APPLICABLE: &str = "N/A";
/// Value used when a URL carries no timestamp.
pub const DATE_NOT_AVAILABLE: &str = "Not Available";

const DEFAULT_DOCUMENTATION_ID: &str = "0Seed";
const UNIVERSAL_SORT_KEY: &str = "0000000000";

/// Prerequisite builds from before `PrerequisiteOSVersion` was published.
const LEGACY_PREREQUISITES: &[(&str, &str)] = &[("10A405", "6.0"), ("10B141", "6.1")];

/// Release classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BetaType {
    None,
    Public,
    Developer,
    Carrier,
    Internal,
    /// `ReleaseType` carried a value this parser does not recognise.
    Unknown,
}

impl BetaType {
    /// True for the four recognised pre-release kinds.
    pub fn is_beta(self) -> bool {
        matches!(
            self,
            BetaType::Public | BetaType::Developer | BetaType::Carrier | BetaType::Internal
        )
    }

    /// Label appended to the version in the plain report.
    pub fn report_label(self) -> Option<&'static str> {
        match self {
            BetaType::Public => Some("Public Beta"),
            BetaType::Developer => Some("beta"),
            BetaType::Carrier => Some("Carrier Beta"),
            BetaType::Internal => Some("Internal"),
            BetaType::None | BetaType::Unknown => None,
        }
    }
}

/// Classify an entry from its `ReleaseType`, documentation ID and size.
pub fn classify(release_type: Option<&str>, documentation_id: &str, size_bytes: u64) -> BetaType {
    match release_type {
        None => BetaType::None,
        Some("Carrier") => BetaType::Carrier,
        Some("Internal") => BetaType::Internal,
        Some("Beta") => {
            if documentation_id == "PreRelease" {
                BetaType::Developer
            } else if size_bytes > BETA_SIZE_CEILING {
                BetaType::None
            } else if documentation_id.contains("Public") {
                BetaType::Public
            } else if documentation_id.contains("Beta") || documentation_id.contains("Seed") {
                BetaType::Developer
            } else {
                BetaType::None
            }
        }
        Some(_) => BetaType::Unknown,
    }
}

/// One catalog asset with its derived classification and display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    documentation_id: String,
    size_bytes: u64,
    url: String,
    declared_build: String,
    os_version: String,
    marketing_version: String,
    prerequisite_os_version: Option<String>,
    prerequisite_build: Option<String>,
    release_type: Option<String>,
    supported_devices: BTreeSet<String>,
    supported_device_models: Option<BTreeSet<String>>,
    date: String,
    beta_type: BetaType,
    actual_build: String,
}

impl PackageRecord {
    /// Build a record from one entry of the catalog's `Assets` array.
    ///
    /// Missing required keys are fatal; optional keys fall back to their
    /// documented defaults.
    pub fn from_asset(asset: &Value) -> Result<Self> {
        let entry = asset
            .as_dictionary()
            .ok_or_else(|| SynotaError::Catalog("asset is not a dictionary".into()))?;

        let documentation_id = optional_string(entry, "SUDocumentationID")?
            .unwrap_or_else(|| DEFAULT_DOCUMENTATION_ID.to_string());
        let supported_devices = string_set(entry, "SupportedDevices")?
            .ok_or_else(|| SynotaError::missing_key("SupportedDevices"))?;
        if supported_devices.is_empty() {
            return Err(SynotaError::Catalog(
                "asset lists no `SupportedDevices`".into(),
            ));
        }
        let supported_device_models = string_set(entry, "SupportedDeviceModels")?;
        let release_type = optional_string(entry, "ReleaseType")?;
        let declared_build = required_string(entry, "Build")?;
        let os_version = required_string(entry, "OSVersion")?;
        let marketing_version = match optional_string(entry, "MarketingVersion")? {
            Some(version) if !version.contains('.') => format!("{version}.0"),
            Some(version) => version,
            None => os_version.clone(),
        };
        let prerequisite_os_version = optional_string(entry, "PrerequisiteOSVersion")?;
        let prerequisite_build = optional_string(entry, "PrerequisiteBuild")?;
        let (size_bytes, url) = download_info(entry)?;

        let date = extract_date(&url);
        let beta_type = classify(release_type.as_deref(), &documentation_id, size_bytes);
        let actual_build = if release_type.is_some()
            && beta_type == BetaType::None
            && inflated_build_pattern().is_match(&declared_build)
        {
            deflate_build(&declared_build)
        } else {
            declared_build.clone()
        };

        Ok(Self {
            documentation_id,
            size_bytes,
            url,
            declared_build,
            os_version,
            marketing_version,
            prerequisite_os_version,
            prerequisite_build,
            release_type,
            supported_devices,
            supported_device_models,
            date,
            beta_type,
            actual_build,
        })
    }

    pub fn documentation_id(&self) -> &str {
        &self.documentation_id
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size with US-style thousands separators, e.g. `1,234,567`.
    pub fn size(&self) -> String {
        group_thousands(self.size_bytes)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The build identifier exactly as the catalog lists it.
    pub fn declared_build(&self) -> &str {
        &self.declared_build
    }

    /// The build the device reports once the update is installed.
    ///
    /// Identical to [`declared_build`](Self::declared_build) unless the entry
    /// is a "Beta"-tagged final whose build carries an inserted numeral.
    pub fn actual_build(&self) -> &str {
        &self.actual_build
    }

    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    /// User-facing version: `MarketingVersion` (with `.0` added to bare
    /// majors) or `OSVersion` when no override exists.
    pub fn marketing_version(&self) -> &str {
        &self.marketing_version
    }

    /// Version column key for wiki tables: the listed OS version.
    pub fn actual_version(&self) -> &str {
        &self.os_version
    }

    pub fn prerequisite_version(&self) -> &str {
        if let Some(version) = &self.prerequisite_os_version {
            return version;
        }
        let build = self.prerequisite_build();
        LEGACY_PREREQUISITES
            .iter()
            .find(|(legacy_build, _)| *legacy_build == build)
            .map(|(_, version)| *version)
            .unwrap_or(NOT_APPLICABLE)
    }

    pub fn prerequisite_build(&self) -> &str {
        self.prerequisite_build.as_deref().unwrap_or(NOT_APPLICABLE)
    }

    /// Raw `ReleaseType` value, if declared.
    pub fn release_type(&self) -> Option<&str> {
        self.release_type.as_deref()
    }

    /// Whether Apple tagged this entry with any release type.
    pub fn is_declared_beta(&self) -> bool {
        self.release_type.is_some()
    }

    pub fn beta_type(&self) -> BetaType {
        self.beta_type
    }

    pub fn is_beta(&self) -> bool {
        self.beta_type.is_beta()
    }

    /// Tagged with a release type but classified as an ordinary release.
    pub fn is_mislabeled_beta(&self) -> bool {
        self.is_declared_beta() && self.beta_type == BetaType::None
    }

    /// The `ReleaseType` value when it was not recognised.
    pub fn unrecognized_release_type(&self) -> Option<&str> {
        match self.beta_type {
            BetaType::Unknown => self.release_type(),
            _ => None,
        }
    }

    /// Which beta this is, taken from the last character of the
    /// documentation ID; 0 for non-betas and `PreRelease` entries.
    pub fn beta_number(&self) -> u32 {
        if !self.is_beta() || self.documentation_id == "PreRelease" {
            return 0;
        }
        self.documentation_id
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(1)
    }

    /// `YYYYMMDD` from the download URL, or `Not Available`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Year, month and day of [`date`](Self::date), when available.
    pub fn date_parts(&self) -> Option<(&str, &str, &str)> {
        if self.date.len() != 8 {
            return None;
        }
        Some((&self.date[..4], &self.date[4..6], &self.date[6..]))
    }

    /// No prerequisite version or build: a full, install-anywhere package.
    pub fn is_universal(&self) -> bool {
        self.prerequisite_version() == NOT_APPLICABLE && self.prerequisite_build() == NOT_APPLICABLE
    }

    pub fn supported_devices(&self) -> &BTreeSet<String> {
        &self.supported_devices
    }

    pub fn supported_device_models(&self) -> Option<&BTreeSet<String>> {
        self.supported_device_models.as_ref()
    }

    /// Declared build padded so that `9A` majors sort before `10A`. Entries
    /// with an inflated build collapse to `<major><letter>0000` so they sort
    /// ahead of the finals sharing their prefix.
    pub fn sorting_build(&self) -> String {
        let mut key = zero_pad_if_second(&self.declared_build, |c| c.is_alphabetic());
        if self.actual_build != self.declared_build {
            let chars: Vec<char> = key.chars().collect();
            let cut = version_letter_end(&chars);
            key = chars[..cut].iter().collect();
            key.push_str("0000");
        }
        key
    }

    pub fn sorting_marketing_version(&self) -> String {
        zero_pad_if_second(&self.marketing_version, |c| c == '.')
    }

    pub fn sorting_prerequisite_build(&self) -> String {
        if self.is_universal() {
            UNIVERSAL_SORT_KEY.to_string()
        } else {
            zero_pad_if_second(self.prerequisite_build(), |c| c.is_alphabetic())
        }
    }
}

fn inflated_build_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(INFLATED_BUILD_PATTERN).expect("build pattern compiles"))
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(URL_TIMESTAMP_PATTERN).expect("timestamp pattern compiles"))
}

fn extract_date(url: &str) -> String {
    let Some(found) = timestamp_pattern().find(url) else {
        return DATE_NOT_AVAILABLE.to_string();
    };
    let mut date = found.as_str()[5..].to_string();
    if date.len() == 7 {
        date.insert(6, '0');
    }
    date
}

/// Index just past the first uppercase letter after position 0, or the
/// length when there is none.
fn version_letter_end(chars: &[char]) -> usize {
    chars
        .iter()
        .skip(1)
        .position(|c| c.is_uppercase())
        .map(|pos| pos + 2)
        .unwrap_or(chars.len())
}

/// Drop the numeral Apple inserts after the version letter, plus a
/// following `0` pad if present: `14E5301` becomes `14E301`.
fn deflate_build(build: &str) -> String {
    let chars: Vec<char> = build.chars().collect();
    let keep = version_letter_end(&chars);
    let mut resume = keep + 1;
    if chars.get(resume) == Some(&'0') {
        resume += 1;
    }
    let tail = chars.get(resume..).unwrap_or(&[]);
    chars[..keep].iter().chain(tail).collect()
}

fn zero_pad_if_second(value: &str, test: impl Fn(char) -> bool) -> String {
    match value.chars().nth(1) {
        Some(second) if test(second) => format!("0{value}"),
        _ => value.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn required_string(entry: &Dictionary, key: &str) -> Result<String> {
    optional_string(entry, key)?.ok_or_else(|| SynotaError::missing_key(key))
}

fn optional_string(entry: &Dictionary, key: &str) -> Result<Option<String>> {
    match entry.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_string()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| SynotaError::Catalog(format!("`{key}` is not a string"))),
    }
}

fn string_set(entry: &Dictionary, key: &str) -> Result<Option<BTreeSet<String>>> {
    let Some(value) = entry.get(key) else {
        return Ok(None);
    };
    let items = value
        .as_array()
        .ok_or_else(|| SynotaError::Catalog(format!("`{key}` is not an array")))?;
    items
        .iter()
        .map(|item| {
            item.as_string()
                .map(str::to_string)
                .ok_or_else(|| SynotaError::Catalog(format!("`{key}` holds a non-string item")))
        })
        .collect::<Result<BTreeSet<_>>>()
        .map(Some)
}

fn size_value(entry: &Dictionary, key: &str) -> Result<u64> {
    entry
        .get(key)
        .and_then(Value::as_unsigned_integer)
        .ok_or_else(|| SynotaError::missing_key(key))
}

/// Size and URL, preferring `RealUpdateAttributes` over stub download info.
fn download_info(entry: &Dictionary) -> Result<(u64, String)> {
    if let Some(real) = entry.get("RealUpdateAttributes") {
        let real = real.as_dictionary().ok_or_else(|| {
            SynotaError::Catalog("`RealUpdateAttributes` is not a dictionary".into())
        })?;
        return Ok((
            size_value(real, "RealUpdateDownloadSize")?,
            required_string(real, "RealUpdateURL")?,
        ));
    }

    let size = size_value(entry, "_DownloadSize")?;
    let base = required_string(entry, "__BaseURL")?;
    let relative = required_string(entry, "__RelativePath")?;
    Ok((size, base + &relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::AssetBuilder;

    #[test]
    fn classification_without_release_type_is_final() {
        assert_eq!(classify(None, "PreRelease", 1), BetaType::None);
    }

    #[test]
    fn classification_of_tagged_entries() {
        assert_eq!(classify(Some("Carrier"), "0Seed", 1), BetaType::Carrier);
        assert_eq!(classify(Some("Internal"), "0Seed", 1), BetaType::Internal);
        assert_eq!(classify(Some("Beta"), "PreRelease", 900_000_000), BetaType::Developer);
        assert_eq!(classify(Some("Beta"), "iOS10PublicBeta3", 1), BetaType::Public);
        assert_eq!(classify(Some("Beta"), "iOS10Beta4", 1), BetaType::Developer);
        assert_eq!(classify(Some("Beta"), "iOS93Seed2", 1), BetaType::Developer);
        assert_eq!(classify(Some("Beta"), "iOS1031", 1), BetaType::None);
        assert_eq!(classify(Some("Preview"), "iOS10Beta4", 1), BetaType::Unknown);
    }

    #[test]
    fn oversized_beta_is_treated_as_final() {
        assert_eq!(
            classify(Some("Beta"), "iOS10Beta4", BETA_SIZE_CEILING + 1),
            BetaType::None
        );
        assert_eq!(
            classify(Some("Beta"), "iOS10Beta4", BETA_SIZE_CEILING),
            BetaType::Developer
        );
    }

    #[test]
    fn unknown_is_not_a_beta() {
        assert!(!BetaType::Unknown.is_beta());
        assert!(!BetaType::None.is_beta());
        assert!(BetaType::Carrier.is_beta());
    }

    #[test]
    fn documentation_id_defaults_to_seed() {
        let record = AssetBuilder::new("13G36", "9.3.5").record();
        assert_eq!(record.documentation_id(), "0Seed");
    }

    #[test]
    fn mislabeled_large_beta_gets_actual_build() {
        let record = AssetBuilder::new("14E5301", "10.3.1")
            .release_type("Beta")
            .doc_id("14E8301")
            .size(600_000_001)
            .record();
        assert_eq!(record.beta_type(), BetaType::None);
        assert!(record.is_mislabeled_beta());
        assert_eq!(record.actual_build(), "14E301");
        assert_eq!(record.declared_build(), "14E5301");
    }

    #[test]
    fn build_outside_beta_shape_is_left_alone() {
        let record = AssetBuilder::new("14E8301", "10.3.1")
            .release_type("Beta")
            .doc_id("14E8301")
            .size(600_000_001)
            .record();
        assert_eq!(record.beta_type(), BetaType::None);
        assert_eq!(record.actual_build(), "14E8301");
    }

    #[test]
    fn zero_pad_after_inserted_numeral_is_dropped() {
        assert_eq!(deflate_build("13G5034"), "13G34");
        assert_eq!(deflate_build("9B5176"), "9B176");
        assert_eq!(deflate_build("14A5309d"), "14A309d");
    }

    #[test]
    fn real_betas_keep_their_build() {
        let record = AssetBuilder::new("14E5249d", "10.3")
            .release_type("Beta")
            .doc_id("iOS103Beta7")
            .record();
        assert_eq!(record.beta_type(), BetaType::Developer);
        assert_eq!(record.actual_build(), "14E5249d");
        assert_eq!(record.beta_number(), 7);
    }

    #[test]
    fn untagged_beta_shaped_build_is_not_rewritten() {
        let record = AssetBuilder::new("14E5249d", "10.3").record();
        assert_eq!(record.actual_build(), "14E5249d");
    }

    #[test]
    fn actual_build_never_grows() {
        for build in ["13G5034", "9B5176", "14A5309d", "14E5301", "13E238", "9A334"] {
            let record = AssetBuilder::new(build, "9.0")
                .release_type("Beta")
                .doc_id("iOS9")
                .record();
            assert!(record.actual_build().len() <= record.declared_build().len());
            let prefix_len = version_letter_end(&build.chars().collect::<Vec<_>>());
            assert_eq!(&record.actual_build()[..prefix_len], &build[..prefix_len]);
        }
    }

    #[test]
    fn beta_numbers() {
        let beta = |doc: &str| {
            AssetBuilder::new("14A5309d", "10.0")
                .release_type("Beta")
                .doc_id(doc)
                .record()
                .beta_number()
        };
        assert_eq!(beta("iOS10Beta3"), 3);
        assert_eq!(beta("iOS10PublicBeta"), 1);
        assert_eq!(beta("PreRelease"), 0);
        assert_eq!(AssetBuilder::new("14A403", "10.0").record().beta_number(), 0);
    }

    #[test]
    fn marketing_version_falls_back_to_os_version() {
        let record = AssetBuilder::new("13G36", "9.3.5").record();
        assert_eq!(record.marketing_version(), "9.3.5");
    }

    #[test]
    fn bare_marketing_major_gets_point_zero() {
        let record = AssetBuilder::new("13S344", "9.0").marketing("2").record();
        assert_eq!(record.marketing_version(), "2.0");
        assert_eq!(record.actual_version(), "9.0");
        let record = AssetBuilder::new("13S661", "9.1").marketing("2.0.1").record();
        assert_eq!(record.marketing_version(), "2.0.1");
    }

    #[test]
    fn legacy_prerequisite_versions() {
        let record = AssetBuilder::new("10B144", "6.1.3")
            .prerequisite_build("10A405")
            .record();
        assert_eq!(record.prerequisite_version(), "6.0");
        let record = AssetBuilder::new("10B144", "6.1.3")
            .prerequisite_build("10B141")
            .record();
        assert_eq!(record.prerequisite_version(), "6.1");
        let record = AssetBuilder::new("10B144", "6.1.3")
            .prerequisite_build("10A523")
            .record();
        assert_eq!(record.prerequisite_version(), NOT_APPLICABLE);
        assert!(!record.is_universal());
    }

    #[test]
    fn declared_prerequisite_version_wins() {
        let record = AssetBuilder::new("10B144", "6.1.3")
            .prerequisite("6.0.1", "10A405")
            .record();
        assert_eq!(record.prerequisite_version(), "6.0.1");
    }

    #[test]
    fn universal_iff_both_prerequisites_absent() {
        let universal = AssetBuilder::new("13G36", "9.3.5").record();
        assert!(universal.is_universal());
        assert_eq!(universal.prerequisite_build(), NOT_APPLICABLE);
        assert_eq!(universal.sorting_prerequisite_build(), "0000000000");

        let delta = AssetBuilder::new("13G36", "9.3.5")
            .prerequisite("9.3.4", "13G35")
            .record();
        assert!(!delta.is_universal());
        assert_eq!(delta.sorting_prerequisite_build(), "13G35");
    }

    #[test]
    fn date_is_taken_from_url() {
        let record = AssetBuilder::new("13G36", "9.3.5")
            .url("http://appldnld.apple.com/ios9.3.5/031-73139-20160825-B2C2C5A2/a.zip")
            .record();
        assert_eq!(record.date(), "20160825");
        assert_eq!(record.date_parts(), Some(("2016", "08", "25")));
    }

    #[test]
    fn single_digit_day_is_zero_padded() {
        let record = AssetBuilder::new("13G36", "9.3.5")
            .url("http://appldnld.apple.com/ios9.3.5/031-73139.2016082-B2C2/a.zip")
            .record();
        assert_eq!(record.date(), "20160802");
    }

    #[test]
    fn missing_timestamp_is_reported() {
        let record = AssetBuilder::new("13G36", "9.3.5")
            .url("http://example.invalid/update.zip")
            .record();
        assert_eq!(record.date(), DATE_NOT_AVAILABLE);
        assert_eq!(record.date_parts(), None);
    }

    #[test]
    fn sorting_build_pads_single_digit_majors() {
        let nine = AssetBuilder::new("9A334", "5.0").record();
        let ten = AssetBuilder::new("10A403", "6.0").record();
        assert_eq!(nine.sorting_build(), "09A334");
        assert!(nine.sorting_build() < ten.sorting_build());
    }

    #[test]
    fn inflated_builds_sort_ahead_of_finals() {
        let inflated = AssetBuilder::new("13G5034", "9.3.5")
            .release_type("Beta")
            .doc_id("iOS935")
            .record();
        let final_build = AssetBuilder::new("13G34", "9.3.5").record();
        assert_eq!(inflated.sorting_build(), "13G0000");
        assert!(inflated.sorting_build() < final_build.sorting_build());

        let single_digit = AssetBuilder::new("9B5176", "5.1")
            .release_type("Beta")
            .doc_id("iOS51")
            .record();
        assert_eq!(single_digit.sorting_build(), "09B0000");
    }

    #[test]
    fn sorting_marketing_version_pads_single_digit_majors() {
        assert_eq!(
            AssetBuilder::new("13G36", "9.3.5").record().sorting_marketing_version(),
            "09.3.5"
        );
        assert_eq!(
            AssetBuilder::new("14A403", "10.0.1").record().sorting_marketing_version(),
            "10.0.1"
        );
    }

    #[test]
    fn size_is_comma_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn real_update_attributes_take_priority() {
        let record = AssetBuilder::new("13G36", "9.3.5")
            .real_update(42_000, "http://appldnld.apple.com/x/031-11111-20160901-AA/b.zip")
            .record();
        assert_eq!(record.size_bytes(), 42_000);
        assert_eq!(record.date(), "20160901");
    }

    #[test]
    fn missing_build_is_fatal() {
        let asset = AssetBuilder::new("13G36", "9.3.5").without("Build").build();
        assert!(matches!(PackageRecord::from_asset(&asset), Err(SynotaError::Catalog(_))));
    }

    #[test]
    fn missing_devices_is_fatal() {
        let asset = AssetBuilder::new("13G36", "9.3.5")
            .without("SupportedDevices")
            .build();
        assert!(PackageRecord::from_asset(&asset).is_err());
        let asset = AssetBuilder::new("13G36", "9.3.5").devices(&[]).build();
        assert!(PackageRecord::from_asset(&asset).is_err());
    }

    #[test]
    fn unknown_release_type_is_surfaced() {
        let record = AssetBuilder::new("13G36", "9.3.5")
            .release_type("Preview")
            .record();
        assert_eq!(record.beta_type(), BetaType::Unknown);
        assert_eq!(record.unrecognized_release_type(), Some("Preview"));
        assert!(!record.is_mislabeled_beta());
    }
}
