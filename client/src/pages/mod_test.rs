use super::*;
use futures::executor::block_on;

const ROUTED: [ViewId; 10] = [
    ViewId::Login,
    ViewId::Layout,
    ViewId::Dashboard,
    ViewId::Users,
    ViewId::UserDetail,
    ViewId::Drivers,
    ViewId::DriverDetail,
    ViewId::Pickups,
    ViewId::PickupDetail,
    ViewId::NotFound,
];

#[test]
fn every_view_is_registered() {
    let registry = view_registry();
    for view in ROUTED {
        assert!(block_on(registry.load(view)).is_ok(), "{}", view.name());
    }
}

#[test]
fn only_the_layout_wraps_children() {
    let registry = view_registry();
    for view in ROUTED {
        let factory = block_on(registry.load(view)).unwrap();
        assert_eq!(matches!(factory, ViewFactory::Layout(_)), view == ViewId::Layout);
    }
}
