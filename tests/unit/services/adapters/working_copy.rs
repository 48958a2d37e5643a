use super::*;
use crate::models::TextSnapshot;
use crate::services::ports::working_copy::WorkingCopyCapabilities;
use std::cell::Cell;
use std::path::PathBuf;

struct FakeWorkingCopy {
    resource: Resource,
    dirty: Cell<bool>,
}

impl FakeWorkingCopy {
    fn new(name: &str, dirty: bool) -> Rc<Self> {
        Rc::new(Self {
            resource: Resource::untitled(name),
            dirty: Cell::new(dirty),
        })
    }
}

impl WorkingCopy for FakeWorkingCopy {
    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn capabilities(&self) -> WorkingCopyCapabilities {
        WorkingCopyCapabilities { untitled: true }
    }

    fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn snapshot(&self) -> Option<TextSnapshot> {
        None
    }

    fn associated_path(&self) -> Option<PathBuf> {
        None
    }
}

#[test]
fn test_register_and_unregister() {
    let registry = WorkingCopyRegistry::new();
    let copy = FakeWorkingCopy::new("Untitled-1", false);

    let mut sub = registry
        .register_working_copy(copy.clone())
        .expect("register");
    assert_eq!(registry.len(), 1);
    assert!(registry.get(&copy.resource).is_some());

    sub.dispose();
    assert!(registry.is_empty());
    assert!(registry.get(&copy.resource).is_none());
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = WorkingCopyRegistry::new();
    let first = FakeWorkingCopy::new("Untitled-1", false);
    let second = FakeWorkingCopy::new("Untitled-1", true);

    let _sub = registry.register_working_copy(first).expect("register");
    let err = registry
        .register_working_copy(second)
        .expect_err("duplicate must fail");
    assert_eq!(
        err,
        WorkingCopyError::AlreadyRegistered(Resource::untitled("Untitled-1"))
    );
    assert!(err.to_string().contains("untitled:Untitled-1"));
    assert!(!registry.has_dirty());
}

#[test]
fn test_stale_subscription_does_not_remove_new_registration() {
    let registry = WorkingCopyRegistry::new();
    let first = FakeWorkingCopy::new("Untitled-1", false);
    let second = FakeWorkingCopy::new("Untitled-1", true);

    let mut first_sub = registry.register_working_copy(first).expect("register");
    first_sub.dispose();
    let _second_sub = registry.register_working_copy(second).expect("register");

    drop(first_sub);
    assert_eq!(registry.len(), 1);
    assert!(registry.has_dirty());
}

#[test]
fn test_dirty_tracking() {
    let registry = WorkingCopyRegistry::new();
    let a = FakeWorkingCopy::new("Untitled-1", false);
    let b = FakeWorkingCopy::new("Untitled-2", false);
    let _sa = registry.register_working_copy(a.clone()).expect("register");
    let _sb = registry.register_working_copy(b.clone()).expect("register");

    assert!(!registry.has_dirty());
    a.dirty.set(true);
    b.dirty.set(true);
    assert_eq!(registry.dirty_count(), 2);
    assert_eq!(registry.working_copies().len(), 2);
}

#[test]
fn test_registration_events() {
    let registry = WorkingCopyRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let log_reg = log.clone();
    let _r = registry.on_did_register(move |r| log_reg.borrow_mut().push(format!("+{}", r)));
    let log_unreg = log.clone();
    let _u = registry.on_did_unregister(move |r| log_unreg.borrow_mut().push(format!("-{}", r)));

    let sub = registry
        .register_working_copy(FakeWorkingCopy::new("Untitled-1", false))
        .expect("register");
    drop(sub);

    assert_eq!(
        *log.borrow(),
        vec!["+untitled:Untitled-1".to_string(), "-untitled:Untitled-1".to_string()]
    );
}
