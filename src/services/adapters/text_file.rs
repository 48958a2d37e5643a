//! 本地文件保存
//!
//! 把已注册工作副本的快照写入其关联路径，写盘在 tokio blocking 线程池执行。

use super::working_copy::WorkingCopyRegistry;
use crate::models::{Resource, TextSnapshot};
use crate::services::ports::runtime::LocalBoxFuture;
use crate::services::ports::text_file::{FileError, Result, SaveOptions, TextFileService};
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

pub struct LocalTextFileService {
    working_copies: Rc<WorkingCopyRegistry>,
}

impl LocalTextFileService {
    pub fn new(working_copies: Rc<WorkingCopyRegistry>) -> Self {
        Self { working_copies }
    }

    async fn save_resource(&self, resource: &Resource, options: SaveOptions) -> Result<bool> {
        let Some(working_copy) = self.working_copies.get(resource) else {
            tracing::warn!(resource = %resource, "save: no working copy registered");
            return Ok(false);
        };
        let Some(path) = working_copy.associated_path() else {
            tracing::debug!(resource = %resource, "save: no target path");
            return Ok(false);
        };
        let Some(snapshot) = working_copy.snapshot() else {
            tracing::debug!(resource = %resource, "save: working copy not resolved");
            return Ok(false);
        };
        if !options.force && !working_copy.is_dirty() && path.exists() {
            return Ok(true);
        }

        let path_for_write = path.clone();
        let result =
            tokio::task::spawn_blocking(move || write_snapshot_to_path(&path_for_write, &snapshot))
                .await
                .map_err(|e| FileError::Io(io::Error::other(e)))?;

        match result {
            Ok(()) => {
                tracing::info!(
                    resource = %resource,
                    path = %path.display(),
                    reason = ?options.reason,
                    "saved"
                );
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                tracing::warn!(path = %path.display(), error = %e, "save: permission denied");
                Ok(false)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::error!(path = %path.display(), error = %e, "save failed");
                Err(FileError::NotFound(path))
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "save failed");
                Err(FileError::Io(e))
            }
        }
    }
}

impl TextFileService for LocalTextFileService {
    fn save<'a>(
        &'a self,
        resource: &'a Resource,
        options: SaveOptions,
    ) -> LocalBoxFuture<'a, Result<bool>> {
        Box::pin(self.save_resource(resource, options))
    }
}

fn write_snapshot_to_path(path: &Path, snapshot: &TextSnapshot) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    snapshot.write_to(&mut writer)?;
    writer.flush()
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/text_file.rs"]
mod tests;
