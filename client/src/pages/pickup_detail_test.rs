use super::*;
use crate::net::types::PickupStatus;

#[test]
fn details_fill_missing_values_with_dash() {
    let pickup = Pickup {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        driver_id: None,
        status: PickupStatus::Pending,
        location: Some(serde_json::json!("12 Elm St")),
        estimated_weight: Some(40.5),
        waste_type: None,
        requested_time: Some("2024-05-01T10:00:00Z".to_owned()),
        assigned_time: None,
        completed_time: None,
        deleted_at: None,
    };
    let details = pickup_details(&pickup);
    let get = |label: &str| details.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str());
    assert_eq!(get("Driver"), Some("-"));
    assert_eq!(get("Status"), Some("pending"));
    assert_eq!(get("Location"), Some("12 Elm St"));
    assert_eq!(get("Estimated Weight"), Some("40.5"));
    assert_eq!(details.len(), 11);
}
