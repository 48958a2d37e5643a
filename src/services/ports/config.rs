use crate::core::Subscription;
use crate::models::Resource;

pub const FILES_ENCODING: &str = "files.encoding";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationChangeEvent {
    pub affected_keys: Vec<String>,
}

impl ConfigurationChangeEvent {
    pub fn affects(&self, key: &str) -> bool {
        self.affected_keys.iter().any(|k| k == key)
    }
}

/// 按资源解析的配置源
pub trait TextResourceConfigurationService {
    fn get_value(&self, resource: &Resource, key: &str) -> Option<String>;

    fn on_did_change_configuration(
        &self,
        listener: Box<dyn FnMut(&ConfigurationChangeEvent)>,
    ) -> Subscription;
}
