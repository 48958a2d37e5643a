//! 核心框架模块
//!
//! - Event: 事件发射器与订阅生命周期
//! - Scheduler: 合并多次触发的延迟调度

pub mod event;
pub mod scheduler;

pub use event::{DisposableStore, Emitter, Subscription};
pub use scheduler::RunOnceScheduler;
