use super::*;

#[test]
fn location_path_joins_query() {
    assert_eq!(location_path("/users", ""), "/users");
    assert_eq!(location_path("/pickups", "?status=pending"), "/pickups?status=pending");
    assert_eq!(location_path("/pickups", "status=pending"), "/pickups?status=pending");
}
