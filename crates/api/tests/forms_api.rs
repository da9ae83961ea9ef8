//! HTTP-level integration tests for form management and the entry view.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_form, delete, get, post_json, put_json, sample_form};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: POST /forms creates a form with ordered fields and an alias
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_returns_201_with_alias(pool: PgPool) {
    let form = create_form(&pool, sample_form()).await;

    assert_eq!(form["name"], "Daily check-in");
    assert_eq!(form["theme"], "default");
    let short_id = form["shortId"].as_str().unwrap();
    assert_eq!(short_id.len(), 6);
    assert!(short_id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    let labels: Vec<_> = form["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["Calls", "Stage", "Done"]);
    assert_eq!(form["fields"][1]["type"], "steps");
    assert_eq!(form["fields"][1]["options"], json!(["A", "B"]));
    assert_eq!(form["fields"][0]["required"], true);
    assert_eq!(form["fields"][2]["required"], false);
}

// ---------------------------------------------------------------------------
// Test: reading by alias returns the same fields in the same order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_form_by_alias_and_id(pool: PgPool) {
    let created = create_form(&pool, sample_form()).await;
    let short_id = created["shortId"].as_str().unwrap();
    let id = created["id"].as_str().unwrap();

    let by_alias = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/forms/{short_id}")).await).await;
    let by_id = body_json(get(build_test_app(pool), &format!("/api/v1/forms/{id}")).await).await;

    assert_eq!(by_alias["fields"], created["fields"]);
    assert_eq!(by_id["fields"], created["fields"]);
    assert_eq!(by_alias["id"], by_id["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_alias_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/forms/zzzzzz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_forms_newest_first(pool: PgPool) {
    create_form(&pool, json!({ "name": "First", "fields": [] })).await;
    create_form(&pool, json!({ "name": "Second", "fields": [] })).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/forms").await).await;
    let names: Vec<_> = json.as_array().unwrap().iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Second", "First"]);
}

// ---------------------------------------------------------------------------
// Test: validation failures return 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_rejects_blank_name(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/v1/forms", json!({ "name": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_rejects_select_without_options(pool: PgPool) {
    let body = json!({
        "name": "Mood",
        "fields": [{ "label": "Mood", "type": "select", "options": [] }],
    });
    let response = post_json(build_test_app(pool), "/api/v1/forms", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_rejects_unknown_field_type(pool: PgPool) {
    let body = json!({
        "name": "Mood",
        "fields": [{ "label": "Mood", "type": "slider" }],
    });
    let response = post_json(build_test_app(pool), "/api/v1/forms", body).await;

    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Test: PUT /forms/{id} replaces metadata and fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_form_replaces_fields(pool: PgPool) {
    let created = create_form(&pool, sample_form()).await;
    let id = created["id"].as_str().unwrap();

    let body = json!({
        "name": "Renamed",
        "theme": "navy",
        "fields": [{ "label": "Visits", "type": "number" }],
    });
    let response = put_json(build_test_app(pool.clone()), &format!("/api/v1/forms/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["theme"], "navy");
    assert_eq!(json["shortId"], created["shortId"]);
    assert_eq!(json["fields"].as_array().unwrap().len(), 1);
    assert_eq!(json["fields"][0]["label"], "Visits");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_form_null_description_clears_it(pool: PgPool) {
    let created = create_form(&pool, sample_form()).await;
    let uri = format!("/api/v1/forms/{}", created["id"].as_str().unwrap());

    let kept = body_json(put_json(build_test_app(pool.clone()), &uri, json!({ "name": "A" })).await).await;
    assert_eq!(kept["description"], "Team standup numbers");

    let response = put_json(
        build_test_app(pool),
        &uri,
        json!({ "name": "A", "description": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_form_returns_404(pool: PgPool) {
    let uri = format!("/api/v1/forms/{}", uuid::Uuid::new_v4());
    let response = put_json(build_test_app(pool), &uri, json!({ "name": "Nope" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: DELETE /forms/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_form_then_get_returns_404(pool: PgPool) {
    let created = create_form(&pool, sample_form()).await;
    let id = created["id"].as_str().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(pool), &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: GET /forms/{id}/entry pre-fills initial values
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn entry_view_has_initial_values(pool: PgPool) {
    let created = create_form(&pool, sample_form()).await;
    let short_id = created["shortId"].as_str().unwrap();

    let response = get(build_test_app(pool), &format!("/api/v1/forms/{short_id}/entry")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["form"]["name"], "Daily check-in");
    assert_eq!(json["fields"][0]["initialValue"], "0");
    assert_eq!(json["fields"][1]["initialValue"], r#"{"A":0,"B":0}"#);
    assert_eq!(json["fields"][2]["initialValue"], "false");
    assert_eq!(json["fields"][1]["label"], "Stage");
}
