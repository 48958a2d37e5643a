//! 服务层模块
//!
//! - ports: 外部协作者的 trait 与数据契约
//! - adapters: 这些契约的进程内实现（备份、配置、工作副本、文件保存）

pub mod adapters;
pub mod ports;
