use crate::core::Subscription;
use crate::models::{Resource, TextSnapshot};
use std::path::PathBuf;
use std::rc::Rc;

pub type Result<T> = std::result::Result<T, WorkingCopyError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingCopyError {
    AlreadyRegistered(Resource),
}

impl std::fmt::Display for WorkingCopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkingCopyError::AlreadyRegistered(resource) => write!(
                f,
                "Cannot register more than one working copy with the same resource: {}",
                resource
            ),
        }
    }
}

impl std::error::Error for WorkingCopyError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingCopyCapabilities {
    /// 保存时需要额外确认目标路径
    pub untitled: bool,
}

impl WorkingCopyCapabilities {
    pub const NONE: Self = Self { untitled: false };
}

pub trait WorkingCopy {
    fn resource(&self) -> &Resource;

    fn capabilities(&self) -> WorkingCopyCapabilities;

    fn is_dirty(&self) -> bool;

    /// 未解析时为 None
    fn snapshot(&self) -> Option<TextSnapshot>;

    /// 保存时的目标路径
    fn associated_path(&self) -> Option<PathBuf>;
}

pub trait WorkingCopyService {
    fn register_working_copy(&self, working_copy: Rc<dyn WorkingCopy>) -> Result<Subscription>;
}
