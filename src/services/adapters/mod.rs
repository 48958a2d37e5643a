//! Service adapters: 端口的进程内实现

pub mod backup;
pub mod config;
pub mod paths;
pub mod settings;
pub mod text_file;
pub mod working_copy;

pub use backup::InMemoryBackupService;
pub use config::ConfigService;
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir, get_settings_path};
pub use settings::{ensure_settings_file, load_settings};
pub use text_file::LocalTextFileService;
pub use working_copy::WorkingCopyRegistry;
