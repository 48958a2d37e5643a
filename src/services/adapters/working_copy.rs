//! 工作副本注册表
//!
//! 每个资源同一时刻最多注册一个工作副本，注销由注册返回的 Subscription 完成。

use crate::core::{Emitter, Subscription};
use crate::models::Resource;
use crate::services::ports::working_copy::{
    Result, WorkingCopy, WorkingCopyError, WorkingCopyService,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct RegistryInner {
    working_copies: RefCell<HashMap<Resource, Rc<dyn WorkingCopy>>>,
    on_did_register: Emitter<Resource>,
    on_did_unregister: Emitter<Resource>,
}

#[derive(Default)]
pub struct WorkingCopyRegistry {
    inner: Rc<RegistryInner>,
}

impl WorkingCopyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, resource: &Resource) -> Option<Rc<dyn WorkingCopy>> {
        self.inner.working_copies.borrow().get(resource).cloned()
    }

    pub fn working_copies(&self) -> Vec<Rc<dyn WorkingCopy>> {
        self.inner.working_copies.borrow().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.working_copies.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.working_copies.borrow().is_empty()
    }

    pub fn has_dirty(&self) -> bool {
        self.inner
            .working_copies
            .borrow()
            .values()
            .any(|w| w.is_dirty())
    }

    pub fn dirty_count(&self) -> usize {
        self.inner
            .working_copies
            .borrow()
            .values()
            .filter(|w| w.is_dirty())
            .count()
    }

    pub fn on_did_register(&self, listener: impl FnMut(&Resource) + 'static) -> Subscription {
        self.inner.on_did_register.subscribe(listener)
    }

    pub fn on_did_unregister(&self, listener: impl FnMut(&Resource) + 'static) -> Subscription {
        self.inner.on_did_unregister.subscribe(listener)
    }
}

impl WorkingCopyService for WorkingCopyRegistry {
    fn register_working_copy(&self, working_copy: Rc<dyn WorkingCopy>) -> Result<Subscription> {
        let resource = working_copy.resource().clone();
        {
            let mut copies = self.inner.working_copies.borrow_mut();
            if copies.contains_key(&resource) {
                tracing::warn!(resource = %resource, "working copy already registered");
                return Err(WorkingCopyError::AlreadyRegistered(resource));
            }
            copies.insert(resource.clone(), working_copy.clone());
        }

        tracing::debug!(resource = %resource, "working copy registered");
        self.inner.on_did_register.fire(&resource);

        let weak_inner: Weak<RegistryInner> = Rc::downgrade(&self.inner);
        let copy_ptr = Rc::as_ptr(&working_copy) as *const ();
        Ok(Subscription::new(move || {
            let Some(inner) = weak_inner.upgrade() else {
                return;
            };
            let removed = {
                let mut copies = inner.working_copies.borrow_mut();
                let registered = copies
                    .get(&resource)
                    .is_some_and(|w| Rc::as_ptr(w) as *const () == copy_ptr);
                if registered {
                    copies.remove(&resource)
                } else {
                    None
                }
            };
            if removed.is_some() {
                drop(removed);
                tracing::debug!(resource = %resource, "working copy unregistered");
                inner.on_did_unregister.fire(&resource);
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/working_copy.rs"]
mod tests;
