use super::*;

#[test]
fn newer_intent_overwrites_older() {
    let store = MemoryIntentStore::default();
    store.store("/users/1");
    store.store("/drivers/2");
    assert_eq!(store.peek().as_deref(), Some("/drivers/2"));
}

#[test]
fn take_consumes_exactly_once() {
    let store = MemoryIntentStore::default();
    store.store("/pickups");
    assert_eq!(store.take().as_deref(), Some("/pickups"));
    assert_eq!(store.take(), None);
    assert_eq!(store.peek(), None);
}

#[test]
fn session_store_is_inert_outside_browser() {
    let store = SessionIntentStore;
    store.store("/users");
    assert_eq!(store.take(), None);
}
