//! 文件保存契约

use super::runtime::LocalBoxFuture;
use crate::models::Resource;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
        }
    }
}

impl std::error::Error for FileError {}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveReason {
    #[default]
    Explicit,
    Auto,
    FocusChange,
    WindowChange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    pub reason: SaveReason,
    pub force: bool,
}

pub trait TextFileService {
    /// Ok(false) 表示预期内的失败（如写权限被拒），意外错误以 Err 返回
    fn save<'a>(
        &'a self,
        resource: &'a Resource,
        options: SaveOptions,
    ) -> LocalBoxFuture<'a, Result<bool>>;
}
