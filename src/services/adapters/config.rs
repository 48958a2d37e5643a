//! 配置服务：管理 files.* 配置
//!
//! - 按资源解析：语言覆盖优先于全局值
//! - 运行时修改或设置文件变化时通知订阅者

use super::settings::load_settings;
use crate::core::{Emitter, Subscription};
use crate::models::language::language_for_resource;
use crate::models::Resource;
use crate::services::ports::config::{
    ConfigurationChangeEvent, TextResourceConfigurationService, FILES_ENCODING,
};
use crate::services::ports::settings::Settings;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub struct ConfigService {
    settings: RefCell<Settings>,
    on_did_change: Emitter<ConfigurationChangeEvent>,
    settings_path: RefCell<Option<PathBuf>>,
    last_modified: Cell<Option<SystemTime>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RefCell::new(settings),
            on_did_change: Emitter::new(),
            settings_path: RefCell::new(None),
            last_modified: Cell::new(None),
        }
    }

    /// 从设置文件创建，文件缺失或无效时使用默认值
    pub fn from_file(path: &Path) -> Self {
        let service = Self::new();
        service.load_from_file(path);
        service
    }

    pub fn settings(&self) -> Settings {
        self.settings.borrow().clone()
    }

    pub fn settings_path(&self) -> Option<PathBuf> {
        self.settings_path.borrow().clone()
    }

    /// 绑定设置文件并立即加载，之后由 `poll_settings_file` 跟踪变化
    pub fn load_from_file(&self, path: &Path) -> bool {
        *self.settings_path.borrow_mut() = Some(path.to_path_buf());
        self.last_modified.set(file_modified(path));
        self.reload_settings()
    }

    pub fn set_settings(&self, settings: Settings) {
        let affected_keys = changed_keys(&self.settings.borrow(), &settings);
        *self.settings.borrow_mut() = settings;

        if affected_keys.is_empty() {
            return;
        }
        tracing::debug!(keys = ?affected_keys, "configuration changed");
        self.on_did_change
            .fire(&ConfigurationChangeEvent { affected_keys });
    }

    pub fn update(&self, f: impl FnOnce(&mut Settings)) {
        let mut settings = self.settings();
        f(&mut settings);
        self.set_settings(settings);
    }

    pub fn set_encoding(&self, encoding: &str) {
        self.update(|s| s.files.encoding = encoding.to_string());
    }

    pub fn set_language_encoding(&self, language_id: &str, encoding: Option<&str>) {
        self.update(|s| {
            s.language_overrides
                .entry(language_id.to_string())
                .or_default()
                .encoding = encoding.map(str::to_string);
        });
    }

    /// 设置文件修改时间变化时重新加载，返回是否重新加载
    pub fn poll_settings_file(&self) -> bool {
        let Some(path) = self.settings_path() else {
            return false;
        };

        let modified = file_modified(&path);
        if modified.is_none() || modified == self.last_modified.get() {
            return false;
        }
        self.last_modified.set(modified);
        self.reload_settings()
    }

    pub fn reload_settings(&self) -> bool {
        let Some(path) = self.settings_path() else {
            return false;
        };
        let Some(settings) = load_settings(&path) else {
            return false;
        };

        tracing::info!(path = %path.display(), "settings reloaded");
        self.set_settings(settings);
        true
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl TextResourceConfigurationService for ConfigService {
    fn get_value(&self, resource: &Resource, key: &str) -> Option<String> {
        let settings = self.settings.borrow();
        match key {
            FILES_ENCODING => {
                let language_override = language_for_resource(resource)
                    .and_then(|lang| settings.language_overrides.get(lang.language_id()))
                    .and_then(|o| o.encoding.clone());
                Some(language_override.unwrap_or_else(|| settings.files.encoding.clone()))
            }
            _ => None,
        }
    }

    fn on_did_change_configuration(
        &self,
        listener: Box<dyn FnMut(&ConfigurationChangeEvent)>,
    ) -> Subscription {
        self.on_did_change.subscribe(listener)
    }
}

fn changed_keys(old: &Settings, new: &Settings) -> Vec<String> {
    let mut keys = Vec::new();
    if old.files.encoding != new.files.encoding
        || old.language_overrides != new.language_overrides
    {
        keys.push(FILES_ENCODING.to_string());
    }
    keys
}

fn file_modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/config.rs"]
mod tests;
