//! zcode-untitled - 未命名文档模型库
//!
//! 模块结构：
//! - core: 事件与调度（Emitter, Subscription, RunOnceScheduler）
//! - models: 数据模型（TextModel, MarkdownString, UntitledTextModel）
//! - services: 服务端口与进程内实现（备份、配置、工作副本、文件保存）
//! - logging: 宿主程序的 tracing 初始化

pub mod core;
pub mod logging;
pub mod models;
pub mod services;
