use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_FILES_ENCODING: &str = "utf8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub files: FilesSettings,
    /// 按语言 id 覆盖 files 配置，例如 `{"markdown": {"encoding": "utf8bom"}}`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_overrides: BTreeMap<String, FilesOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesSettings {
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

fn default_encoding() -> String {
    DEFAULT_FILES_ENCODING.to_string()
}

impl Default for FilesSettings {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files: FilesSettings::default(),
            language_overrides: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/ports/settings.rs"]
mod tests;
