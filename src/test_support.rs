//! Fixture builder for catalog assets used by unit tests.

use plist::{Dictionary, Value};

use crate::package_record::PackageRecord;

const FILE_HASH: &str = "0123456789abcdef0123456789abcdef01234567";

pub(crate) struct AssetBuilder {
    dict: Dictionary,
}

impl AssetBuilder {
    /// A universal, non-beta iPhone8,1 asset with a dated download URL.
    pub(crate) fn new(build: &str, os_version: &str) -> Self {
        let mut dict = Dictionary::new();
        dict.insert("Build".into(), Value::String(build.into()));
        dict.insert("OSVersion".into(), Value::String(os_version.into()));
        dict.insert("_DownloadSize".into(), Value::Integer(100_u64.into()));
        dict.insert(
            "__BaseURL".into(),
            Value::String("http://appldnld.apple.com/ios/".into()),
        );
        dict.insert(
            "__RelativePath".into(),
            Value::String(format!("031-73139-20160825-{build}/{FILE_HASH}.zip")),
        );
        Self { dict }.devices(&["iPhone8,1"])
    }

    fn set(mut self, key: &str, value: Value) -> Self {
        self.dict.insert(key.into(), value);
        self
    }

    pub(crate) fn doc_id(self, id: &str) -> Self {
        self.set("SUDocumentationID", Value::String(id.into()))
    }

    pub(crate) fn release_type(self, tag: &str) -> Self {
        self.set("ReleaseType", Value::String(tag.into()))
    }

    pub(crate) fn marketing(self, version: &str) -> Self {
        self.set("MarketingVersion", Value::String(version.into()))
    }

    pub(crate) fn prerequisite_build(self, build: &str) -> Self {
        self.set("PrerequisiteBuild", Value::String(build.into()))
    }

    pub(crate) fn prerequisite(self, version: &str, build: &str) -> Self {
        self.set("PrerequisiteOSVersion", Value::String(version.into()))
            .prerequisite_build(build)
    }

    pub(crate) fn devices(self, devices: &[&str]) -> Self {
        self.set("SupportedDevices", string_array(devices))
    }

    pub(crate) fn models(self, models: &[&str]) -> Self {
        self.set("SupportedDeviceModels", string_array(models))
    }

    pub(crate) fn size(self, bytes: u64) -> Self {
        self.set("_DownloadSize", Value::Integer(bytes.into()))
    }

    /// Replace the download location with `url`.
    pub(crate) fn url(self, url: &str) -> Self {
        self.set("__BaseURL", Value::String(url.into()))
            .set("__RelativePath", Value::String(String::new()))
    }

    pub(crate) fn real_update(self, bytes: u64, url: &str) -> Self {
        let mut real = Dictionary::new();
        real.insert("RealUpdateDownloadSize".into(), Value::Integer(bytes.into()));
        real.insert("RealUpdateURL".into(), Value::String(url.into()));
        self.set("RealUpdateAttributes", Value::Dictionary(real))
    }

    pub(crate) fn without(mut self, key: &str) -> Self {
        self.dict.remove(key);
        self
    }

    pub(crate) fn build(self) -> Value {
        Value::Dictionary(self.dict)
    }

    pub(crate) fn record(self) -> PackageRecord {
        PackageRecord::from_asset(&self.build()).expect("fixture asset is well formed")
    }
}

fn string_array(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|item| Value::String((*item).into())).collect())
}
