//! HTTP-level integration tests for rooming and chaperone group membership
//! rules.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_room(pool: &PgPool, body: serde_json::Value) -> axum::http::Response<axum::body::Body> {
    post_json(common::build_test_app(pool.clone()), "/api/rooming", body).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_room_with_occupants(pool: PgPool) {
    let group_id = common::create_group(&pool, "Lincoln High", "Band").await;
    let jane = common::create_traveler(&pool, group_id, "Jane", "Doe").await;
    let ana = common::create_traveler(&pool, group_id, "Ana", "Ruiz").await;

    let response = create_room(
        &pool,
        json!({
            "group_id": group_id,
            "room_number": "101",
            "occupancy": 4,
            "occupant_ids": [ana, jane, jane],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["room_number"], "101");
    let mut expected = vec![jane, ana];
    expected.sort();
    assert_eq!(json["occupant_ids"], json!(expected));

    let response = get(
        common::build_test_app(pool),
        &format!("/api/groups/{group_id}/rooming"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json[0]["occupant_ids"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn room_over_occupancy_returns_400(pool: PgPool) {
    let group_id = common::create_group(&pool, "Lincoln High", "Band").await;
    let jane = common::create_traveler(&pool, group_id, "Jane", "Doe").await;
    let ana = common::create_traveler(&pool, group_id, "Ana", "Ruiz").await;

    let response = create_room(
        &pool,
        json!({
            "group_id": group_id,
            "room_number": "101",
            "occupancy": 1,
            "occupant_ids": [jane, ana],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "occupant_ids");
    assert_eq!(json["fields"][0]["message"], "exceeds room occupancy of 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn room_with_occupant_from_other_group_returns_400(pool: PgPool) {
    let band = common::create_group(&pool, "Lincoln High", "Band").await;
    let choir = common::create_group(&pool, "Roosevelt Middle", "Choir").await;
    let outsider = common::create_traveler(&pool, choir, "Ana", "Ruiz").await;

    let response = create_room(
        &pool,
        json!({
            "group_id": band,
            "room_number": "101",
            "occupant_ids": [outsider],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "occupant_ids");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn traveler_in_two_rooms_returns_409(pool: PgPool) {
    let group_id = common::create_group(&pool, "Lincoln High", "Band").await;
    let jane = common::create_traveler(&pool, group_id, "Jane", "Doe").await;

    let response = create_room(
        &pool,
        json!({ "group_id": group_id, "room_number": "101", "occupant_ids": [jane] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = create_room(
        &pool,
        json!({ "group_id": group_id, "room_number": "102", "occupant_ids": [jane] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/groups/{group_id}/rooming"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_room_checks_stored_occupancy(pool: PgPool) {
    let group_id = common::create_group(&pool, "Lincoln High", "Band").await;
    let jane = common::create_traveler(&pool, group_id, "Jane", "Doe").await;
    let ana = common::create_traveler(&pool, group_id, "Ana", "Ruiz").await;

    let response = create_room(
        &pool,
        json!({ "group_id": group_id, "room_number": "101", "occupancy": 1 }),
    )
    .await;
    let room_id = body_json(response).await["id"].as_i64().unwrap();
    let uri = format!("/api/rooming/{room_id}");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "occupant_ids": [jane, ana] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "occupancy": 2, "occupant_ids": [jane, ana] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["occupant_ids"].as_array().unwrap().len(), 2);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn chaperone_group_members_must_share_group(pool: PgPool) {
    let band = common::create_group(&pool, "Lincoln High", "Band").await;
    let choir = common::create_group(&pool, "Roosevelt Middle", "Choir").await;
    let chaperone = common::create_traveler(&pool, band, "Pat", "Kim").await;
    let student = common::create_traveler(&pool, band, "Jane", "Doe").await;
    let outsider = common::create_traveler(&pool, choir, "Ana", "Ruiz").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/chaperone-groups",
        json!({
            "group_id": band,
            "name": "Group A",
            "chaperone_id": chaperone,
            "student_ids": [student, outsider],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["fields"][0]["field"], "student_ids");

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/chaperone-groups",
        json!({
            "group_id": band,
            "name": "Group A",
            "chaperone_id": chaperone,
            "student_ids": [student],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["chaperone_id"], chaperone);
    assert_eq!(json["student_ids"], json!([student]));

    let response = get(
        common::build_test_app(pool),
        &format!("/api/groups/{band}/chaperone-groups"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}
