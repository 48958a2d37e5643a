//! 事件与订阅
//!
//! 单线程观察者模型：
//! - Emitter: 按注册顺序同步通知所有仍存活的监听器
//! - Subscription: 可释放的订阅句柄（drop 即取消订阅）
//! - DisposableStore: 统一持有一组订阅

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;
type ListenerList<T> = Rc<RefCell<Vec<(u64, Listener<T>)>>>;

pub struct Emitter<T> {
    listeners: ListenerList<T>,
    next_id: Cell<u64>,
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    #[must_use = "dropping the subscription removes the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().push((id, listener));

        let weak = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }

    pub fn fire(&self, event: &T) {
        // 先拍快照，监听器内部可以继续订阅或取消订阅
        let snapshot: Vec<(u64, Listener<T>)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        for (id, listener) in snapshot {
            let alive = self.listeners.borrow().iter().any(|(lid, _)| *lid == id);
            if !alive {
                continue;
            }
            // 同一监听器的重入触发直接跳过
            let Ok(mut f) = listener.try_borrow_mut() else {
                continue;
            };
            (f)(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn has_listeners(&self) -> bool {
        self.listener_count() > 0
    }

    pub fn dispose(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 订阅句柄，释放后监听器不再收到事件
#[must_use = "dropping the subscription removes the listener"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn empty() -> Self {
        Self { dispose: None }
    }

    pub fn is_disposed(&self) -> bool {
        self.dispose.is_none()
    }

    pub fn dispose(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

#[derive(Default)]
pub struct DisposableStore {
    items: Vec<Subscription>,
}

impl DisposableStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.items.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按注册顺序释放全部订阅
    pub fn clear(&mut self) {
        for mut item in self.items.drain(..) {
            item.dispose();
        }
    }
}

impl Drop for DisposableStore {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
