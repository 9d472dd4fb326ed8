// Contract tests for the drill library: /basics, /principles, /tactics

#[path = "../helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn test_create_basic_exact_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/basics", &TestDataFactory::basic_payload())
        .await;

    assert_created(&response);
    let id = response.body["id"].as_str().unwrap().to_string();
    assert_eq!(
        response.body,
        json!({
            "id": id,
            "name": "Passing Gate",
            "description": "Two-cone gate drill",
            "diagram_url": null
        })
    );

    let listed = app.list("/basics").await;
    assert_eq!(listed, vec![response.body.clone()]);
}

#[actix_web::test]
async fn test_basics_list_in_insertion_order() {
    let app = TestApp::spawn().await;
    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        let id = app
            .create(
                "/basics",
                &json!({"name": name, "description": "order check"}),
            )
            .await;
        ids.push(id);
    }

    let listed: Vec<String> = app
        .list("/basics")
        .await
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, ids);
}

#[actix_web::test]
async fn test_update_and_delete_basic() {
    let app = TestApp::spawn().await;
    let id = app
        .create("/basics", &TestDataFactory::basic_payload())
        .await;

    let response = app
        .put_json(
            &format!("/basics/{}", id),
            &json!({
                "name": "Passing Gate",
                "description": "Three-cone gate drill",
                "diagram_url": "https://example.com/gate.png"
            }),
        )
        .await;
    assert_ok(&response);
    assert_json_field_eq(&response.body, "id", &id);
    assert_json_field_eq(&response.body, "description", "Three-cone gate drill");
    assert_json_field_eq(&response.body, "diagram_url", "https://example.com/gate.png");

    assert_deleted(&app.delete(&format!("/basics/{}", id)).await);
    assert!(app.list("/basics").await.is_empty());
    assert_not_found(&app.get(&format!("/basics/{}", id)).await);
}

#[actix_web::test]
async fn test_basic_unknown_id_returns_404() {
    let app = TestApp::spawn().await;

    assert_not_found(
        &app.put_json("/basics/ghost", &TestDataFactory::basic_payload())
            .await,
    );
    assert_not_found(&app.delete("/basics/ghost").await);
    assert_eq!(count_rows(&app.pool, "basics").await, 0);
}

#[actix_web::test]
async fn test_basic_missing_description_hides_detail() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/basics", &json!({"name": "x"})).await;

    assert_generic_server_error(&response);
    assert!(!response.body.to_string().contains("description"));
    assert_eq!(count_rows(&app.pool, "basics").await, 0);
}

#[actix_web::test]
async fn test_create_principle_defaults() {
    let app = TestApp::spawn().await;
    let payload = TestDataFactory::principle_payload();

    let response = app.post_json("/principles", &payload).await;

    assert_created(&response);
    assert_matches_payload(&response.body, &payload);
    assert_json_field_eq(&response.body, "coaching_notes", "");
    assert_json_field_eq(&response.body, "implementation_tips", "");
    assert_json_field_eq(&response.body, "media_url", serde_json::Value::Null);
}

#[actix_web::test]
async fn test_principle_lifecycle() {
    let app = TestApp::spawn().await;
    let id = app
        .create("/principles", &TestDataFactory::principle_payload())
        .await;

    let replacement = json!({
        "name": "Width in possession",
        "game_phase": "Attacking",
        "description": "Stretch the back line",
        "coaching_notes": "Wingers hold the touchline",
        "implementation_tips": "Use channels\nSwitch play",
        "media_url": "https://example.com/width.mp4"
    });
    let response = app
        .put_json(&format!("/principles/{}", id), &replacement)
        .await;
    assert_ok(&response);
    assert_matches_payload(&response.body, &replacement);

    let fetched = app.get(&format!("/principles/{}", id)).await;
    assert_ok(&fetched);
    assert_eq!(fetched.body, response.body);

    assert_deleted(&app.delete(&format!("/principles/{}", id)).await);
    assert_not_found(&app.delete(&format!("/principles/{}", id)).await);
}

#[actix_web::test]
async fn test_principle_missing_game_phase_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/principles",
            &json!({"name": "Compactness", "description": "Stay tight"}),
        )
        .await;

    assert_generic_server_error(&response);
    assert_eq!(count_rows(&app.pool, "principles").await, 0);
}

#[actix_web::test]
async fn test_create_tactic_echoes_payload() {
    let app = TestApp::spawn().await;
    let payload = TestDataFactory::tactic_payload();

    let response = app.post_json("/tactics", &payload).await;

    assert_created(&response);
    assert_matches_payload(&response.body, &payload);
}

#[actix_web::test]
async fn test_tactic_defaults_and_replace() {
    let app = TestApp::spawn().await;
    let id = app
        .create("/tactics", &TestDataFactory::tactic_payload())
        .await;

    let response = app
        .put_json(
            &format!("/tactics/{}", id),
            &json!({"name": "Low Block", "formation": "5-4-1", "description": "Sit deep"}),
        )
        .await;

    assert_ok(&response);
    assert_json_field_eq(&response.body, "formation", "5-4-1");
    assert_json_field_eq(&response.body, "diagram_url", serde_json::Value::Null);
    assert_json_field_eq(&response.body, "suggested_drills", "");

    let listed = app.list("/tactics").await;
    assert_eq!(listed, vec![response.body.clone()]);
}

#[actix_web::test]
async fn test_tactic_unknown_id_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .put_json("/tactics/ghost", &TestDataFactory::tactic_payload())
        .await;

    assert_not_found(&response);
    assert_eq!(
        response.body["error"]["message"],
        "Not found: Tactic not found"
    );
    assert_not_found(&app.delete("/tactics/ghost").await);
}
