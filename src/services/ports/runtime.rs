use std::future::Future;
use std::pin::Pin;

/// 单线程端口使用的 boxed future（不要求 Send）
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
