//! HTTP-level integration tests for the plant endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, delete, get, patch_json, post, post_json, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_plant_returns_201_with_assigned_fields() {
    let pool = common::seeded_pool().await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/plants", common::plant_body("Monty")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let plant = &json["data"];
    assert_eq!(plant["id"], 1);
    assert_eq!(plant["name"], "Monty");
    assert_eq!(plant["waterFrequency"], 7);
    assert!(plant["lastWatered"].is_string());
    assert!(plant["fertilizeFrequency"].is_null());
    assert!(plant["lastFertilized"].is_null());
    assert!(plant["notes"].is_null());
}

#[tokio::test]
async fn create_with_fertilize_frequency_sets_last_fertilized() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Tom");
    body["fertilizeFrequency"] = json!(14);
    body["notes"] = json!("South balcony");

    let plant = common::create_plant(&pool, body).await;
    assert_eq!(plant["fertilizeFrequency"], 14);
    assert!(plant["lastFertilized"].is_string());
    assert_eq!(plant["notes"], "South balcony");
}

#[tokio::test]
async fn create_ignores_server_assigned_fields() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Sneaky");
    body["id"] = json!(500);
    body["lastWatered"] = json!("2001-01-01T00:00:00Z");

    let plant = common::create_plant(&pool, body).await;
    assert_eq!(plant["id"], 1);
    assert_ne!(plant["lastWatered"], "2001-01-01T00:00:00Z");
}

#[tokio::test]
async fn create_with_zero_water_frequency_returns_400() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Dry");
    body["waterFrequency"] = json!(0);

    let response = post_json(common::build_test_app(pool.clone()), "/api/plants", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing reached the store.
    let list = body_json(get(common::build_test_app(pool), "/api/plants").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_out_of_range_fertilize_frequency_returns_400() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Overfed");
    body["fertilizeFrequency"] = json!(91);

    let response = post_json(common::build_test_app(pool), "/api/plants", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_empty_name_returns_400() {
    let pool = common::seeded_pool().await;
    let response = post_json(
        common::build_test_app(pool),
        "/api/plants",
        common::plant_body(""),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_missing_required_field_returns_400() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Nameless species");
    body.as_object_mut().unwrap().remove("species");

    let response = post_json(common::build_test_app(pool), "/api/plants", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_with_fractional_frequency_returns_400() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Half");
    body["waterFrequency"] = json!(2.5);

    let response = post_json(common::build_test_app(pool), "/api/plants", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_null_fertilize_frequency_returns_400() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Nullish");
    body["fertilizeFrequency"] = json!(null);

    let response = post_json(common::build_test_app(pool.clone()), "/api/plants", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");

    let list = body_json(get(common::build_test_app(pool), "/api/plants").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let pool = common::seeded_pool().await;
    let response = post_raw(common::build_test_app(pool), "/api/plants", "{\"name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_plants_returns_all() {
    let pool = common::seeded_pool().await;
    common::create_plant(&pool, common::plant_body("P1")).await;
    common::create_plant(&pool, common::plant_body("P2")).await;

    let response = get(common::build_test_app(pool), "/api/plants").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["P1", "P2"]);
}

#[tokio::test]
async fn get_plant_by_id() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Get Me")).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool), &format!("/api/plants/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], created);
}

#[tokio::test]
async fn get_nonexistent_plant_returns_404() {
    let pool = common::seeded_pool().await;
    let response = get(common::build_test_app(pool), "/api/plants/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_integer_id_returns_400() {
    let pool = common::seeded_pool().await;

    let response = get(common::build_test_app(pool.clone()), "/api/plants/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid plant ID");

    let response = delete(common::build_test_app(pool.clone()), "/api/plants/1.5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json(
        common::build_test_app(pool),
        "/api/plants/x",
        json!({"notes": "hi"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_notes_only_preserves_other_fields() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Monty")).await;
    let id = created["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/plants/{id}"),
        json!({"notes": "New leaf!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["notes"], "New leaf!");
    for field in ["id", "name", "species", "image", "waterFrequency", "sunlightNeeds", "lastWatered"] {
        assert_eq!(updated[field], created[field], "{field} changed");
    }
}

#[tokio::test]
async fn patch_null_notes_clears_them() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Monty");
    body["notes"] = json!("old note");
    let created = common::create_plant(&pool, body).await;
    let id = created["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{id}"),
        json!({"notes": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["notes"].is_null());

    let response = get(common::build_test_app(pool), &format!("/api/plants/{id}")).await;
    let fetched = body_json(response).await;
    assert!(fetched["data"]["notes"].is_null());
    assert_eq!(fetched["data"]["name"], "Monty");
}

#[tokio::test]
async fn patch_null_frequency_returns_400_and_leaves_plant() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Tom");
    body["fertilizeFrequency"] = json!(14);
    let created = common::create_plant(&pool, body).await;
    let id = created["id"].as_i64().unwrap();

    for patch in [json!({"fertilizeFrequency": null}), json!({"waterFrequency": null})] {
        let response = patch_json(
            common::build_test_app(pool.clone()),
            &format!("/api/plants/{id}"),
            patch,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = get(common::build_test_app(pool), &format!("/api/plants/{id}")).await;
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["fertilizeFrequency"], 14);
    assert_eq!(fetched["data"]["waterFrequency"], 7);
    assert_eq!(fetched["data"]["lastFertilized"], created["lastFertilized"]);
}

#[tokio::test]
async fn patch_with_last_watered_marks_plant_watered() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Monty")).await;
    let id = created["id"].as_i64().unwrap();
    let week_ago = (Utc::now() - Duration::days(7)).to_rfc3339();

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{id}"),
        json!({"lastWatered": week_ago}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let status = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/plants/{id}/care-status"),
        )
        .await,
    )
    .await;
    assert_eq!(status["data"]["watering"]["isDue"], true);
    assert_eq!(status["data"]["watering"]["daysUntilDue"], 0);
}

#[tokio::test]
async fn patch_with_invalid_range_returns_400_and_leaves_plant() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Monty")).await;
    let id = created["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{id}"),
        json!({"waterFrequency": 61}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = body_json(get(common::build_test_app(pool), &format!("/api/plants/{id}")).await).await;
    assert_eq!(stored["data"]["waterFrequency"], 7);
}

#[tokio::test]
async fn patch_nonexistent_plant_returns_404() {
    let pool = common::seeded_pool().await;
    let response = patch_json(
        common::build_test_app(pool),
        "/api/plants/999",
        json!({"notes": "anyone there?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_plant_returns_204_then_404() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Delete Me")).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/plants/{id}");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let pool = common::seeded_pool().await;
    let first = common::create_plant(&pool, common::plant_body("A")).await;
    let id = first["id"].as_i64().unwrap();
    delete(common::build_test_app(pool.clone()), &format!("/api/plants/{id}")).await;

    let second = common::create_plant(&pool, common::plant_body("B")).await;
    assert_eq!(second["id"].as_i64().unwrap(), id + 1);
}

// ---------------------------------------------------------------------------
// Care actions and derived views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn water_action_resets_watering_clock() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Thirsty")).await;
    let id = created["id"].as_i64().unwrap();
    let long_ago = (Utc::now() - Duration::days(30)).to_rfc3339();
    patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{id}"),
        json!({"lastWatered": long_ago}),
    )
    .await;

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{id}/water"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let status = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/plants/{id}/care-status"),
        )
        .await,
    )
    .await;
    assert_eq!(status["data"]["watering"]["isDue"], false);
    assert_eq!(status["data"]["watering"]["daysUntilDue"], 7);
}

#[tokio::test]
async fn water_unknown_plant_returns_404() {
    let pool = common::seeded_pool().await;
    let response = post(common::build_test_app(pool), "/api/plants/999/water").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fertilize_without_cadence_returns_400() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("No food")).await;
    let id = created["id"].as_i64().unwrap();

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{id}/fertilize"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let stored = body_json(get(common::build_test_app(pool), &format!("/api/plants/{id}")).await).await;
    assert!(stored["data"]["lastFertilized"].is_null());
}

#[tokio::test]
async fn fertilize_with_cadence_updates_clock() {
    let pool = common::seeded_pool().await;
    let mut body = common::plant_body("Fed");
    body["fertilizeFrequency"] = json!(30);
    let created = common::create_plant(&pool, body).await;
    let id = created["id"].as_i64().unwrap();

    let response = post(
        common::build_test_app(pool),
        &format!("/api/plants/{id}/fertilize"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let plant = body_json(response).await["data"].clone();
    assert!(plant["lastFertilized"].is_string());
}

#[tokio::test]
async fn care_status_has_null_fertilizing_without_cadence() {
    let pool = common::seeded_pool().await;
    let created = common::create_plant(&pool, common::plant_body("Monty")).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/plants/{id}/care-status"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["plantId"], id);
    assert_eq!(json["data"]["watering"]["frequencyDays"], 7);
    assert_eq!(json["data"]["watering"]["isDue"], false);
    assert!(json["data"]["fertilizing"].is_null());
}

#[tokio::test]
async fn due_dashboard_lists_only_due_items() {
    let pool = common::seeded_pool().await;
    let fresh = common::create_plant(&pool, common::plant_body("Fresh")).await;
    let mut body = common::plant_body("Neglected");
    body["fertilizeFrequency"] = json!(14);
    let neglected = common::create_plant(&pool, body).await;
    let neglected_id = neglected["id"].as_i64().unwrap();

    let three_weeks_ago = (Utc::now() - Duration::days(21)).to_rfc3339();
    patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{neglected_id}"),
        json!({"lastWatered": three_weeks_ago, "lastFertilized": three_weeks_ago}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/plants/due").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["plantId"] == neglected_id));
    assert_ne!(items[0]["plantId"], fresh["id"]);
    assert_eq!(items[0]["kind"], "watering");
    assert_eq!(items[0]["daysOverdue"], 14);
    assert_eq!(items[1]["kind"], "fertilizing");
    assert_eq!(items[1]["daysOverdue"], 7);
    assert_eq!(items[1]["plantName"], "Neglected");
}

#[tokio::test]
async fn plant_care_guide_matches_species() {
    let pool = common::seeded_pool().await;
    let monstera = common::create_plant(&pool, common::plant_body("Monty")).await;
    let mut body = common::plant_body("Mystery");
    body["species"] = json!("monstera deliciosa");
    let mystery = common::create_plant(&pool, body).await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/plants/{}/care-guide", monstera["id"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["species"], "Monstera Deliciosa");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/plants/{}/care-guide", mystery["id"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
