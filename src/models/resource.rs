//! 资源标识：scheme + path

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const UNTITLED_SCHEME: &str = "untitled";
pub const FILE_SCHEME: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Resource {
    scheme: String,
    path: String,
}

impl Resource {
    pub fn new(scheme: &str, path: &str) -> Self {
        Self {
            scheme: scheme.to_string(),
            path: path.to_string(),
        }
    }

    /// `untitled:Untitled-1`
    pub fn untitled(name: &str) -> Self {
        Self::new(UNTITLED_SCHEME, name)
    }

    /// 关联了目标路径的未命名文档：`untitled:/path/to/file`
    pub fn untitled_with_path(path: &Path) -> Self {
        Self::new(UNTITLED_SCHEME, &path.to_string_lossy())
    }

    pub fn file(path: &Path) -> Self {
        Self::new(FILE_SCHEME, &path.to_string_lossy())
    }

    /// 解析 `scheme:path`，没有 scheme 时按 file 处理
    pub fn parse(value: &str) -> Self {
        match value.split_once(':') {
            Some((scheme, path))
                if scheme.len() > 1
                    && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') =>
            {
                Self::new(scheme, path)
            }
            _ => Self::new(FILE_SCHEME, value),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    pub fn is_untitled(&self) -> bool {
        self.scheme == UNTITLED_SCHEME
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/resource.rs"]
mod tests;
