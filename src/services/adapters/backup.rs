//! 内存备份服务
//!
//! 备份按资源存放，记录对应的 version_id：
//! - 同一版本重复备份直接跳过
//! - has_backup_sync 指定版本时要求完全一致

use crate::models::{Resource, TextBufferFactory, TextSnapshot};
use crate::services::ports::backup::{
    BackupError, BackupFileService, BackupResource, ResolvedBackup, Result,
};
use crate::services::ports::LocalBoxFuture;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

struct BackupEntry {
    snapshot: TextSnapshot,
    version_id: u64,
    meta: Option<Value>,
}

#[derive(Default)]
pub struct InMemoryBackupService {
    backups: RefCell<HashMap<Resource, BackupEntry>>,
}

/// 资源字符串的哈希，作为备份标识
fn backup_id(resource: &Resource) -> String {
    let mut hasher = DefaultHasher::new();
    resource.to_string().hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

impl InMemoryBackupService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接放入一份备份（例如启动时从上次会话恢复）
    pub fn insert_backup(&self, resource: Resource, content: &str, meta: Option<Value>) {
        let snapshot = TextSnapshot::from(content);
        self.backups.borrow_mut().insert(
            resource,
            BackupEntry {
                snapshot,
                version_id: 0,
                meta,
            },
        );
    }

    pub fn backup_count(&self) -> usize {
        self.backups.borrow().len()
    }

    pub fn backed_up_version(&self, resource: &Resource) -> Option<u64> {
        self.backups.borrow().get(resource).map(|e| e.version_id)
    }

    pub fn backup_content(&self, resource: &Resource) -> Option<String> {
        self.backups
            .borrow()
            .get(resource)
            .map(|e| e.snapshot.to_string())
    }
}

impl BackupFileService for InMemoryBackupService {
    fn load_backup_resource<'a>(
        &'a self,
        resource: &'a Resource,
    ) -> LocalBoxFuture<'a, Result<Option<BackupResource>>> {
        Box::pin(async move {
            let exists = self.backups.borrow().contains_key(resource);
            Ok(exists.then(|| BackupResource {
                resource: resource.clone(),
                id: backup_id(resource),
            }))
        })
    }

    fn resolve_backup_content<'a>(
        &'a self,
        backup: &'a BackupResource,
    ) -> LocalBoxFuture<'a, Result<ResolvedBackup>> {
        Box::pin(async move {
            let backups = self.backups.borrow();
            let entry = backups
                .get(&backup.resource)
                .ok_or_else(|| BackupError::NotFound(backup.id.clone()))?;
            Ok(ResolvedBackup {
                value: TextBufferFactory::from(entry.snapshot.clone()),
                meta: entry.meta.clone(),
            })
        })
    }

    fn backup_resource<'a>(
        &'a self,
        resource: &'a Resource,
        snapshot: TextSnapshot,
        version_id: u64,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if self.has_backup_sync(resource, Some(version_id)) {
                return Ok(());
            }

            let meta = self
                .backups
                .borrow()
                .get(resource)
                .and_then(|e| e.meta.clone());
            self.backups.borrow_mut().insert(
                resource.clone(),
                BackupEntry {
                    snapshot,
                    version_id,
                    meta,
                },
            );
            tracing::trace!(resource = %resource, version_id, "backup stored");
            Ok(())
        })
    }

    fn discard_resource_backup<'a>(
        &'a self,
        resource: &'a Resource,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.backups.borrow_mut().remove(resource);
            Ok(())
        })
    }

    fn has_backup_sync(&self, resource: &Resource, version_id: Option<u64>) -> bool {
        match self.backups.borrow().get(resource) {
            Some(entry) => version_id.map_or(true, |v| entry.version_id == v),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/backup.rs"]
mod tests;
