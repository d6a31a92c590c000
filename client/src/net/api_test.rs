use super::*;
use serde_json::json;

// =============================================================
// URL construction
// =============================================================

#[test]
fn expand_path_substitutes_and_encodes() {
    assert_eq!(expand_path(USER, &[("userId", "u 1/2")]), "/users/u%201%2F2");
    assert_eq!(expand_path(DRIVER, &[("driverId", "abc123")]), "/drivers/abc123");
}

#[test]
fn expand_path_leaves_unknown_placeholders() {
    assert_eq!(expand_path(PICKUP, &[("userId", "x")]), "/pickups/{pickupId}");
}

#[test]
fn query_string_skips_missing_values() {
    let qs = query_string(&[("limit", Some("20".to_owned())), ("offset", None), ("q", Some("a b".to_owned()))]);
    assert_eq!(qs, "limit=20&q=a+b");
    assert_eq!(query_string(&[("offset", None)]), "");
}

#[test]
fn build_request_joins_base_and_query() {
    let req = build_request(
        "https://api.example.com/prod/",
        Method::Get,
        PICKUPS,
        &[],
        &[("status", Some("pending".to_owned()))],
        None,
    );
    assert_eq!(req.url, "https://api.example.com/prod/pickups?status=pending");
    assert_eq!(req.body, None);
}

#[test]
fn build_request_drops_body_for_get_and_delete() {
    let body = json!({ "a": 1 });
    let get = build_request("", Method::Get, USERS, &[], &[], Some(&body));
    let delete = build_request("", Method::Delete, USER, &[("userId", "1")], &[], Some(&body));
    assert_eq!(get.body, None);
    assert_eq!(delete.body, None);
}

#[test]
fn build_request_keeps_body_for_writes() {
    let body = json!({ "a": 1 });
    let put = build_request("/api", Method::Put, USER, &[("userId", "7")], &[], Some(&body));
    assert_eq!(put.url, "/api/users/7");
    assert_eq!(put.body.as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn paging_query_emits_only_set_fields() {
    let paging = Paging { limit: Some(50), offset: None };
    assert_eq!(query_string(&paging.query()), "limit=50");
}

#[test]
fn session_headers_carry_both_tokens() {
    let headers = session_headers("id-t", "acc-t");
    assert_eq!(
        headers,
        vec![
            ("Authorization".to_owned(), "Bearer id-t".to_owned()),
            ("X-Amz-Security-Token".to_owned(), "acc-t".to_owned()),
        ]
    );
}

// =============================================================
// Errors
// =============================================================

#[test]
fn http_error_message_includes_status_and_body() {
    let err = ApiError::Http { status: 409, body: Some(json!({ "message": "conflict" })) };
    assert_eq!(err.to_string(), r#"HTTP error! status: 409: {"message":"conflict"}"#);
    let bare = ApiError::Http { status: 500, body: None };
    assert_eq!(bare.to_string(), "HTTP error! status: 500");
}

#[test]
fn auth_errors_convert_transparently() {
    let err: ApiError = AuthError::NoSession.into();
    assert_eq!(err.to_string(), "No active session");
}

#[test]
fn decode_rejects_empty_body() {
    let result: Result<HealthCheck, ApiError> = decode(None);
    assert!(matches!(result, Err(ApiError::Decode(_))));
    let ok: HealthCheck = decode(Some(json!({ "status": "healthy" }))).unwrap();
    assert!(ok.is_healthy());
}

// =============================================================
// Client without a browser transport
// =============================================================

struct StaticHeaders;

#[async_trait(?Send)]
impl AuthHeaders for StaticHeaders {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>, AuthError> {
        Ok(session_headers("i", "a"))
    }
}

struct NoSession;

#[async_trait(?Send)]
impl AuthHeaders for NoSession {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>, AuthError> {
        Err(AuthError::NoSession)
    }
}

#[test]
fn request_outside_browser_is_unavailable() {
    let client = ApiClient::new("/api", Rc::new(StaticHeaders));
    let result = futures::executor::block_on(client.list_users(Paging::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn request_without_session_fails_before_sending() {
    let client = ApiClient::new("/api", Rc::new(NoSession));
    let result = futures::executor::block_on(client.delete_user("u-1"));
    assert_eq!(result, Err(ApiError::Auth(AuthError::NoSession)));
}
