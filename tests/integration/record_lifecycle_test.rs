// Integration tests for record lifecycles across every collection
//
// Covers stable round-trips, delete accounting, unvalidated cross-references
// and the middleware stack wrapped around the routes.

#[path = "../helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

use actix_web::{http::header, test};
use helpers::*;
use serde_json::{json, Value};

fn collections() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        ("/basics", "basics", TestDataFactory::basic_payload()),
        ("/principles", "principles", TestDataFactory::principle_payload()),
        ("/tactics", "tactics", TestDataFactory::tactic_payload()),
        ("/exercises", "exercises", TestDataFactory::full_exercise_payload()),
        (
            "/training_sessions",
            "training_sessions",
            TestDataFactory::training_session_payload("2024-05-01"),
        ),
        ("/players", "players", TestDataFactory::player_payload(11)),
    ]
}

/// Strip the id so a listed record can be resubmitted as a payload
fn as_payload(record: &Value) -> Value {
    let mut payload = record.clone();
    payload
        .as_object_mut()
        .expect("record is a JSON object")
        .remove("id");
    payload
}

#[actix_web::test]
async fn test_resubmitting_listed_record_is_stable() {
    let app = TestApp::spawn().await;

    for (path, _, payload) in collections() {
        let id = app.create(path, &payload).await;
        let before = app.get(&format!("{}/{}", path, id)).await;
        assert_ok(&before);

        let response = app
            .put_json(&format!("{}/{}", path, id), &as_payload(&before.body))
            .await;
        assert_ok(&response);
        assert_eq!(response.body, before.body, "round-trip changed {}", path);

        let listed = app.list(path).await;
        assert_eq!(listed, vec![before.body.clone()], "listing changed for {}", path);
    }
}

#[actix_web::test]
async fn test_delete_removes_exactly_one_record() {
    let app = TestApp::spawn().await;

    for (path, table, payload) in collections() {
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(app.create(path, &payload).await);
        }
        assert_eq!(count_rows(&app.pool, table).await, 3);

        assert_deleted(&app.delete(&format!("{}/{}", path, ids[1])).await);

        let listed = app.list(path).await;
        assert_eq!(listed.len(), 2, "unexpected count in {}", path);
        assert_contains_id(&listed, &ids[0], true);
        assert_contains_id(&listed, &ids[1], false);
        assert_contains_id(&listed, &ids[2], true);
    }
}

#[actix_web::test]
async fn test_ids_are_unique_across_creates() {
    let app = TestApp::spawn().await;
    let mut seen = std::collections::HashSet::new();

    for _ in 0..20 {
        let id = app.create("/basics", &TestDataFactory::basic_payload()).await;
        assert!(seen.insert(id), "duplicate id issued");
    }
}

#[actix_web::test]
async fn test_dangling_references_are_tolerated() {
    let app = TestApp::spawn().await;
    let basic_id = app.create("/basics", &TestDataFactory::basic_payload()).await;

    let mut exercise = TestDataFactory::full_exercise_payload();
    exercise["linked_basics"] = json!(format!("{},does-not-exist", basic_id));
    let exercise_id = app.create("/exercises", &exercise).await;

    let mut session = TestDataFactory::training_session_payload("2024-05-01");
    session["selected_exercises"] = json!(format!("{},ghost-exercise", exercise_id));
    session["selected_players"] = json!("ghost-player");
    let session_id = app.create("/training_sessions", &session).await;

    // Deleting a referenced record leaves the referencing text untouched
    assert_deleted(&app.delete(&format!("/basics/{}", basic_id)).await);
    assert_deleted(&app.delete(&format!("/exercises/{}", exercise_id)).await);

    let fetched = app.get(&format!("/training_sessions/{}", session_id)).await;
    assert_ok(&fetched);
    assert_json_field_eq(
        &fetched.body,
        "selected_exercises",
        format!("{},ghost-exercise", exercise_id),
    );
}

#[actix_web::test]
async fn test_cors_allows_any_origin() {
    let app = TestApp::spawn().await;

    let request = test::TestRequest::get()
        .uri("/basics")
        .insert_header((header::ORIGIN, "http://coach.example.com"));
    let srv = test::init_service(
        actix_web::App::new()
            .wrap(drillbook::middleware::cors_policy())
            .configure(drillbook::modules::configure(app.pool.clone())),
    )
    .await;
    let resp = test::call_service(&srv, request.to_request()).await;

    assert!(resp.status().is_success());
    let allowed = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("CORS header present");
    assert_eq!(allowed, "http://coach.example.com");
}

#[actix_web::test]
async fn test_cors_preflight_is_answered() {
    let app = TestApp::spawn().await;
    let srv = test::init_service(
        actix_web::App::new()
            .wrap(drillbook::middleware::cors_policy())
            .configure(drillbook::modules::configure(app.pool.clone())),
    )
    .await;

    let request = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/exercises")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
        .to_request();
    let resp = test::call_service(&srv, request).await;

    assert!(resp.status().is_success(), "preflight got {}", resp.status());
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::spawn().await;
    let srv = test::init_service(
        actix_web::App::new()
            .wrap(drillbook::middleware::RequestId)
            .configure(drillbook::modules::configure(app.pool.clone())),
    )
    .await;

    let request = test::TestRequest::get()
        .uri("/players")
        .insert_header((drillbook::middleware::request_id::REQUEST_ID_HEADER, "trace-42"))
        .to_request();
    let resp = test::call_service(&srv, request).await;

    assert_eq!(
        resp.headers()
            .get(drillbook::middleware::request_id::REQUEST_ID_HEADER)
            .unwrap(),
        "trace-42"
    );
}

#[actix_web::test]
async fn test_health_and_readiness() {
    let app = TestApp::spawn().await;

    let health = app.get("/health").await;
    assert_ok(&health);
    assert_json_field_eq(&health.body, "status", "healthy");

    let ready = app.get("/ready").await;
    assert_ok(&ready);
}

#[actix_web::test]
async fn test_server_middleware_stack_handles_every_outcome() {
    let app = TestApp::spawn().await;

    assert_created(&app.post_json("/basics", &TestDataFactory::basic_payload()).await);
    assert_not_found(&app.get("/basics/ghost").await);
    assert_generic_server_error(&app.post_json("/basics", &json!({})).await);
    assert_eq!(app.list("/basics").await.len(), 1);
}
