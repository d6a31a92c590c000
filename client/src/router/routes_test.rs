use super::*;

#[test]
fn every_entity_has_list_and_detail_routes() {
    let table = app_routes();
    for (list, detail) in [
        ("/users", ViewId::UserDetail),
        ("/drivers", ViewId::DriverDetail),
        ("/pickups", ViewId::PickupDetail),
    ] {
        let m = table.resolve(&format!("{list}/abc")).unwrap();
        assert_eq!(m.leaf(), detail);
        assert_eq!(m.chain[0], ViewId::Layout);
    }
}

#[test]
fn new_resolves_to_detail_view() {
    assert_eq!(app_routes().resolve("/drivers/new").unwrap().leaf(), ViewId::DriverDetail);
}

#[test]
fn view_names_are_distinct() {
    let names = [
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
    ]
    .map(ViewId::name);
    let unique: std::collections::BTreeSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}
