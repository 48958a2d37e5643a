//! Service ports: traits + data contracts.

pub mod backup;
pub mod config;
pub mod runtime;
pub mod settings;
pub mod text_file;
pub mod working_copy;

pub use backup::{BackupError, BackupFileService, BackupResource, ResolvedBackup};
pub use config::{ConfigurationChangeEvent, TextResourceConfigurationService, FILES_ENCODING};
pub use runtime::LocalBoxFuture;
pub use settings::{FilesOverride, FilesSettings, Settings, DEFAULT_FILES_ENCODING};
pub use text_file::{FileError, SaveOptions, SaveReason, TextFileService};
pub use working_copy::{
    WorkingCopy, WorkingCopyCapabilities, WorkingCopyError, WorkingCopyService,
};
