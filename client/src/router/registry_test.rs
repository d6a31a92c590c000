use super::*;
use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;
use futures::executor::block_on;

#[test]
fn loads_once_then_serves_cache() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut registry: ViewRegistry<&str> = ViewRegistry::new();
    registry.register(ViewId::Users, move || {
        counter.set(counter.get() + 1);
        async { Ok::<_, String>("users") }.boxed_local()
    });

    assert!(!registry.is_loaded(ViewId::Users));
    assert_eq!(block_on(registry.load(ViewId::Users)), Ok("users"));
    assert_eq!(block_on(registry.load(ViewId::Users)), Ok("users"));
    assert_eq!(calls.get(), 1);
    assert!(registry.is_loaded(ViewId::Users));
}

#[test]
fn unknown_view_is_reported() {
    let registry: ViewRegistry<&str> = ViewRegistry::new();
    assert_eq!(block_on(registry.load(ViewId::Pickups)), Err(ViewLoadError::NotRegistered(ViewId::Pickups)));
}

#[test]
fn failed_load_is_retried_next_time() {
    let attempts = Rc::new(Cell::new(0));
    let counter = attempts.clone();
    let mut registry: ViewRegistry<i32> = ViewRegistry::new();
    registry.register(ViewId::Drivers, move || {
        counter.set(counter.get() + 1);
        let first = counter.get() == 1;
        async move { if first { Err("chunk missing".to_owned()) } else { Ok(7) } }.boxed_local()
    });

    let err = block_on(registry.load(ViewId::Drivers)).unwrap_err();
    assert_eq!(err.to_string(), "failed to load drivers view: chunk missing");
    assert_eq!(block_on(registry.load(ViewId::Drivers)), Ok(7));
    assert_eq!(attempts.get(), 2);
}

#[test]
fn ready_views_resolve_immediately() {
    let mut registry: ViewRegistry<i32> = ViewRegistry::new();
    registry.register_ready(ViewId::NotFound, 404);
    assert_eq!(block_on(registry.load(ViewId::NotFound)), Ok(404));
}
