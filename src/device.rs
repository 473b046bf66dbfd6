/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::device
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Recognise Apple device identifiers, board model names and
    version arguments, and expose the per-family traits that
    change how catalog entries are rendered.

  Security / Safety Notes:
    Pure string inspection; no I/O performed in this module.

  Dependencies:
    regex for identifier shapes.

  Operational Scope:
    Used by the CLI for argument validation and by renderers
    for device-family specific columns and OS naming.

  Revision History:
    2026-10-18 COD  Introduced device identifier helpers.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Documented pattern constants for external identifiers
    - Clear data contracts between modules
============================================================*/

use std::sync::OnceLock;

use regex::Regex;

/// Device identifiers such as `iPhone8,1`, `Watch1,2` or `AudioAccessory1,1`.
pub const DEVICE_PATTERN: &str = r"^(AppleTV|AudioAccessory|iPad|iPhone|iPod|Watch)\d?\d,\d$";
/// Board model names such as `N71AP` or `J82AP`.
pub const MODEL_PATTERN: &str = r"^[BDJKMNP]\d\d?\d?[A-Za-z]?AP$";
/// Version bounds accepted by `-min`/`-max`: `D.D`, `D.D.D` or `D.D.DD`.
pub const VERSION_PATTERN: &str = r"^\d\.\d(\.\d)?\d?$";
/// Devices whose entries need a `SupportedDeviceModels` check by default.
pub const DEFAULT_MODEL_CHECK_PATTERN: &str = r"^iPhone8,(1|2)$";

const WATCH_PATTERN: &str = r"^Watch\d?\d,\d$";
const LEGACY_APPLE_TV_PATTERN: &str = r"^AppleTV(2,1|3,1|3,2)$";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("identifier pattern compiles"))
}

/// Check whether `device` looks like an Apple device identifier.
pub fn is_device_identifier(device: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, DEVICE_PATTERN).is_match(device)
}

/// Check whether `model` looks like a board model name.
pub fn is_model_identifier(model: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, MODEL_PATTERN).is_match(model)
}

/// Check whether `version` is an acceptable `-min`/`-max` bound.
pub fn is_version_bound(version: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, VERSION_PATTERN).is_match(version)
}

/// Broad product family of a device identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFamily {
    /// 32-bit Apple TV running "Apple TV software" (AppleTV2,1 / 3,1 / 3,2).
    LegacyAppleTv,
    AppleTv,
    AudioAccessory,
    Watch,
    /// iPhone, iPad and iPod touch.
    Handheld,
}

impl DeviceFamily {
    /// Classify a (validated) device identifier.
    pub fn of(device: &str) -> Self {
        static WATCH: OnceLock<Regex> = OnceLock::new();
        static LEGACY_TV: OnceLock<Regex> = OnceLock::new();

        if compiled(&LEGACY_TV, LEGACY_APPLE_TV_PATTERN).is_match(device) {
            DeviceFamily::LegacyAppleTv
        } else if device.starts_with("AppleTV") {
            DeviceFamily::AppleTv
        } else if device.starts_with("AudioAccessory") {
            DeviceFamily::AudioAccessory
        } else if compiled(&WATCH, WATCH_PATTERN).is_match(device) {
            DeviceFamily::Watch
        } else {
            DeviceFamily::Handheld
        }
    }

    /// Operating system name shown in front of version numbers.
    pub fn os_name(self) -> &'static str {
        match self {
            DeviceFamily::LegacyAppleTv => "Apple TV software",
            DeviceFamily::AppleTv => "tvOS",
            DeviceFamily::AudioAccessory => "audioOS",
            DeviceFamily::Watch => "watchOS",
            DeviceFamily::Handheld => "iOS",
        }
    }

    /// Watches get an extra marketing-version column in wiki tables.
    pub fn is_watch(self) -> bool {
        self == DeviceFamily::Watch
    }

    /// Legacy Apple TVs get a marketing-version placeholder column.
    pub fn needs_marketing_placeholder(self) -> bool {
        self == DeviceFamily::LegacyAppleTv
    }
}
