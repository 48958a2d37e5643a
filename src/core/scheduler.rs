//! 合并型单次定时器
//!
//! 与 Workbench tick 中的 debounce deadline 相同的思路：
//! schedule 只记录截止时间，由宿主在 tick 中轮询 poll。
//! 重复 schedule 会重置截止时间，不会叠加。

use std::cell::Cell;
use std::time::{Duration, Instant};

pub struct RunOnceScheduler {
    delay: Duration,
    deadline: Cell<Option<Instant>>,
}

impl RunOnceScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: Cell::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.get()
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.get().is_some()
    }

    pub fn schedule(&self) {
        self.schedule_at(Instant::now());
    }

    pub fn schedule_at(&self, now: Instant) {
        self.deadline.set(Some(now + self.delay));
    }

    pub fn cancel(&self) {
        self.deadline.set(None);
    }

    pub fn poll(&self) -> bool {
        self.poll_at(Instant::now())
    }

    /// 到期返回 true 并解除挂起状态，每次 schedule 最多触发一次
    pub fn poll_at(&self, now: Instant) -> bool {
        let Some(deadline) = self.deadline.get() else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let overshoot = now.duration_since(deadline);
        if overshoot.as_millis() > 5 {
            tracing::trace!(
                overshoot_ms = overshoot.as_millis() as u64,
                "run-once scheduler overshoot"
            );
        }

        self.deadline.set(None);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/scheduler.rs"]
mod tests;
