use super::*;

#[test]
fn test_fire_in_registration_order() {
    let emitter: Emitter<u32> = Emitter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let l1 = Rc::clone(&log);
    let _a = emitter.subscribe(move |v| l1.borrow_mut().push(("a", *v)));
    let l2 = Rc::clone(&log);
    let _b = emitter.subscribe(move |v| l2.borrow_mut().push(("b", *v)));

    emitter.fire(&7);

    assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
}

#[test]
fn test_drop_subscription_removes_listener() {
    let emitter: Emitter<()> = Emitter::new();
    let count = Rc::new(Cell::new(0));

    let c = Rc::clone(&count);
    let sub = emitter.subscribe(move |_| c.set(c.get() + 1));
    emitter.fire(&());
    drop(sub);
    emitter.fire(&());

    assert_eq!(count.get(), 1);
    assert_eq!(emitter.listener_count(), 0);
}

#[test]
fn test_listener_disposed_during_fire_is_skipped() {
    let emitter: Emitter<()> = Emitter::new();
    let second_calls = Rc::new(Cell::new(0));
    let second_sub: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&second_sub);
    let _first = emitter.subscribe(move |_| {
        if let Some(mut sub) = slot.borrow_mut().take() {
            sub.dispose();
        }
    });
    let c = Rc::clone(&second_calls);
    *second_sub.borrow_mut() = Some(emitter.subscribe(move |_| c.set(c.get() + 1)));

    emitter.fire(&());

    assert_eq!(second_calls.get(), 0);
}

#[test]
fn test_subscription_outlives_emitter() {
    let emitter: Emitter<()> = Emitter::new();
    let mut sub = emitter.subscribe(|_| {});
    drop(emitter);

    sub.dispose();
    assert!(sub.is_disposed());
}

#[test]
fn test_emitter_dispose_drops_all_listeners() {
    let emitter: Emitter<()> = Emitter::new();
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    let _sub = emitter.subscribe(move |_| c.set(c.get() + 1));

    emitter.dispose();
    emitter.fire(&());

    assert_eq!(count.get(), 0);
    assert!(!emitter.has_listeners());
}

#[test]
fn test_disposable_store_clear() {
    let emitter: Emitter<()> = Emitter::new();
    let mut store = DisposableStore::new();
    store.add(emitter.subscribe(|_| {}));
    store.add(emitter.subscribe(|_| {}));
    assert_eq!(store.len(), 2);
    assert_eq!(emitter.listener_count(), 2);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(emitter.listener_count(), 0);
}
