// Test Assertion Helpers
//
// Common assertions for responses produced by the test application.

use actix_web::http::StatusCode;
use serde_json::Value;

use super::test_app::TestResponse;

fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected {} {}, got {} {} with body {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        response.status.as_u16(),
        response.status.canonical_reason().unwrap_or("Unknown"),
        response.body
    );
}

/// Assert HTTP response is 200 OK
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 201 Created
pub fn assert_created(response: &TestResponse) {
    assert_status(response, StatusCode::CREATED);
}

/// Assert HTTP response is 404 Not Found
pub fn assert_not_found(response: &TestResponse) {
    assert_status(response, StatusCode::NOT_FOUND);
}

/// Assert a 500 whose body carries no detail about the failure
pub fn assert_generic_server_error(response: &TestResponse) {
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": { "message": "Internal server error", "code": 500 } })
    );
}

/// Assert HTTP response is 500 Internal Server Error
pub fn assert_server_error(response: &TestResponse) {
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Assert the fixed delete acknowledgement body
pub fn assert_deleted(response: &TestResponse) {
    assert_ok(response);
    assert_eq!(response.body, serde_json::json!({ "message": "Deleted" }));
}

/// Assert response body JSON field has expected value
///
/// # Example
/// ```ignore
/// let body = json!({"status": "Active", "age": 21});
/// assert_json_field_eq(&body, "status", "Active");
/// ```
pub fn assert_json_field_eq<T>(body: &Value, field: &str, expected: T)
where
    T: serde::Serialize + std::fmt::Debug,
{
    let actual = body
        .get(field)
        .unwrap_or_else(|| panic!("Field '{}' not found in response: {}", field, body));

    let expected_value = serde_json::to_value(&expected).unwrap();

    assert_eq!(
        actual, &expected_value,
        "Field '{}' value mismatch. Expected {:?}, got {:?}",
        field, expected_value, actual
    );
}

/// Assert that every field of `payload` appears with the same value in `body`
pub fn assert_matches_payload(body: &Value, payload: &Value) {
    let fields = payload
        .as_object()
        .unwrap_or_else(|| panic!("Payload is not a JSON object: {}", payload));

    for (field, expected) in fields {
        assert_json_field_eq(body, field, expected);
    }
}

/// Assert a list contains (or does not contain) a record ID
pub fn assert_contains_id(items: &[Value], id: &str, expected: bool) {
    let found = items.iter().any(|item| item["id"] == id);
    assert_eq!(
        found, expected,
        "Expected id {} to be {} in listing",
        id,
        if expected { "present" } else { "absent" }
    );
}
