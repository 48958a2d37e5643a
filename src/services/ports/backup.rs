//! 备份服务契约

use super::runtime::LocalBoxFuture;
use crate::models::{Resource, TextBufferFactory, TextSnapshot};
use serde_json::Value;
use std::io;

pub type Result<T> = std::result::Result<T, BackupError>;

#[derive(Debug)]
pub enum BackupError {
    Io(io::Error),
    NotFound(String),
    Corrupt(String),
}

impl std::fmt::Display for BackupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackupError::Io(e) => write!(f, "IO error: {}", e),
            BackupError::NotFound(id) => write!(f, "Backup not found: {}", id),
            BackupError::Corrupt(msg) => write!(f, "Corrupt backup: {}", msg),
        }
    }
}

impl std::error::Error for BackupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackupError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BackupError {
    fn from(e: io::Error) -> Self {
        BackupError::Io(e)
    }
}

/// 指向某个资源已存在的备份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupResource {
    pub resource: Resource,
    /// 备份存储内部使用的标识（资源字符串的哈希）
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedBackup {
    pub value: TextBufferFactory,
    pub meta: Option<Value>,
}

pub trait BackupFileService {
    fn load_backup_resource<'a>(
        &'a self,
        resource: &'a Resource,
    ) -> LocalBoxFuture<'a, Result<Option<BackupResource>>>;

    fn resolve_backup_content<'a>(
        &'a self,
        backup: &'a BackupResource,
    ) -> LocalBoxFuture<'a, Result<ResolvedBackup>>;

    fn backup_resource<'a>(
        &'a self,
        resource: &'a Resource,
        snapshot: TextSnapshot,
        version_id: u64,
    ) -> LocalBoxFuture<'a, Result<()>>;

    fn discard_resource_backup<'a>(&'a self, resource: &'a Resource)
        -> LocalBoxFuture<'a, Result<()>>;

    /// 是否存在该资源的备份；给出 version_id 时要求版本完全一致
    fn has_backup_sync(&self, resource: &Resource, version_id: Option<u64>) -> bool;
}
