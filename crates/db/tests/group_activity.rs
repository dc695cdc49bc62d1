//! Integration tests for group writes and the activity trail they leave.
//!
//! - Create, update and delete each append exactly one activity
//! - Writes against a missing group append nothing
//! - A failing activity insert rolls the group write back
//! - Storage does not enforce the trip date range
//! - Derived status follows the milestone flags

use chrono::NaiveDate;
use sqlx::PgPool;
use tripdesk_core::activity::activity_types;
use tripdesk_core::group_status::GroupStatus;
use tripdesk_db::models::activity::ActivityQuery;
use tripdesk_db::models::group::{CreateGroup, Group, UpdateGroup};
use tripdesk_db::repositories::{ActivityRepo, GroupRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_group(school: &str, group: &str) -> CreateGroup {
    CreateGroup {
        school_name: school.to_string(),
        group_name: group.to_string(),
        location: "Orlando, FL".to_string(),
        start_date: date(2025, 4, 10),
        end_date: date(2025, 4, 14),
        registration_date: None,
        director_name: None,
        director_email: None,
        bus_supplier_id: None,
        bus_count: None,
        charter_number: None,
        transportation_cost_cents: None,
        deposit_amount_cents: None,
        deposit_due_date: None,
        deposit_paid: None,
        contract_sent: None,
        contract_signed: None,
        workshop_registered: None,
        insurance_purchased: None,
        money_collection_started: None,
        status: None,
        notes: None,
    }
}

/// A user id with no `users` row; recording an activity for it fails the FK.
const UNKNOWN_USER: Option<i64> = Some(424_242);

/// Every column except `updated_at`, for comparing row state across writes.
fn row_state(group: &Group) -> serde_json::Value {
    let mut value = serde_json::to_value(group).unwrap();
    value.as_object_mut().unwrap().remove("updated_at");
    value
}

async fn activities_for(pool: &PgPool, group_id: i64) -> Vec<tripdesk_db::models::activity::Activity> {
    ActivityRepo::list(
        pool,
        &ActivityQuery {
            group_id: Some(group_id),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_defaults_and_records_activity(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    assert_eq!(group.status, "pending");
    assert!(!group.contract_sent);
    assert!(!group.deposit_paid);
    assert_eq!(group.derived_status(date(2025, 3, 1)), GroupStatus::Planning);

    let activities = activities_for(&pool, group.id).await;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].activity_type, activity_types::CREATED);
    assert!(activities[0].description.contains("Lincoln High - Band"));
    assert_eq!(activities[0].user_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_storage_accepts_inverted_date_range(pool: PgPool) {
    let mut input = new_group("Lincoln High", "Choir");
    input.start_date = date(2025, 5, 10);
    input.end_date = date(2025, 5, 1);

    let group = GroupRepo::create(&pool, &input, None).await.unwrap();
    assert!(group.end_date < group.start_date);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_partial_fields(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    let patch = UpdateGroup {
        contract_sent: Some(true),
        notes: Some("Contract emailed".to_string()),
        ..Default::default()
    };
    let updated = GroupRepo::update(&pool, group.id, &patch, None)
        .await
        .unwrap()
        .expect("group should exist");

    assert!(updated.contract_sent);
    assert_eq!(updated.notes.as_deref(), Some("Contract emailed"));
    assert_eq!(updated.school_name, "Lincoln High");
    assert!(updated.updated_at >= group.updated_at);
    assert_eq!(updated.derived_status(date(2025, 3, 1)), GroupStatus::ContractSent);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_update_records_one_activity_per_call(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    let patch = UpdateGroup {
        bus_count: Some(2),
        ..Default::default()
    };
    let first = GroupRepo::update(&pool, group.id, &patch, None).await.unwrap().unwrap();
    let second = GroupRepo::update(&pool, group.id, &patch, None).await.unwrap().unwrap();
    assert_eq!(row_state(&first), row_state(&second));
    assert_eq!(second.bus_count, Some(2));

    let updates = ActivityRepo::count_for_group(&pool, group.id, activity_types::UPDATED)
        .await
        .unwrap();
    assert_eq!(updates, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_group_records_nothing(pool: PgPool) {
    let result = GroupRepo::update(&pool, 999_999, &UpdateGroup::default(), None)
        .await
        .unwrap();
    assert!(result.is_none());

    let all = ActivityRepo::list(&pool, &ActivityQuery::default()).await.unwrap();
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_rolls_back_when_activity_fails(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    let patch = UpdateGroup {
        bus_count: Some(3),
        ..Default::default()
    };
    assert!(GroupRepo::update(&pool, group.id, &patch, UNKNOWN_USER)
        .await
        .is_err());

    let stored = GroupRepo::find_by_id(&pool, group.id).await.unwrap().unwrap();
    assert_eq!(row_state(&stored), row_state(&group));
    assert_eq!(stored.updated_at, group.updated_at);
    assert_eq!(activities_for(&pool, group.id).await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_guard_sees_stored_row_and_can_reject(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    let patch = UpdateGroup {
        end_date: Some(date(2025, 4, 1)),
        ..Default::default()
    };
    let result = GroupRepo::update_guarded(&pool, group.id, &patch, None, |existing| {
        if patch.end_date.unwrap() < existing.start_date {
            Err(sqlx::Error::Protocol("end before start".into()))
        } else {
            Ok(())
        }
    })
    .await;
    assert!(matches!(result, Err(sqlx::Error::Protocol(_))));

    let stored = GroupRepo::find_by_id(&pool, group.id).await.unwrap().unwrap();
    assert_eq!(stored.end_date, date(2025, 4, 14));
    assert_eq!(activities_for(&pool, group.id).await.len(), 1);

    let mut seen = None;
    let noop = UpdateGroup::default();
    let updated = GroupRepo::update_guarded(&pool, group.id, &noop, None, |existing| {
        seen = Some(existing.start_date);
        Ok::<(), sqlx::Error>(())
    })
    .await
    .unwrap();
    assert!(updated.is_some());
    assert_eq!(seen, Some(date(2025, 4, 10)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_guard_not_called_for_missing_group(pool: PgPool) {
    let mut called = false;
    let noop = UpdateGroup::default();
    let result = GroupRepo::update_guarded(&pool, 999_999, &noop, None, |_| {
        called = true;
        Ok::<(), sqlx::Error>(())
    })
    .await
    .unwrap();

    assert!(result.is_none());
    assert!(!called);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_rolls_back_when_activity_fails(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    assert!(GroupRepo::delete(&pool, group.id, UNKNOWN_USER).await.is_err());

    let stored = GroupRepo::find_by_id(&pool, group.id).await.unwrap();
    assert!(stored.is_some());
    let activities = activities_for(&pool, group.id).await;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].activity_type, activity_types::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_keeps_activity_trail(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Lincoln High", "Band"), None)
        .await
        .unwrap();

    assert!(GroupRepo::delete(&pool, group.id, None).await.unwrap());
    assert!(GroupRepo::find_by_id(&pool, group.id).await.unwrap().is_none());

    let activities = activities_for(&pool, group.id).await;
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].activity_type, activity_types::DELETED);
    assert_eq!(activities[0].description, "Group deleted: Lincoln High - Band");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_group_records_nothing(pool: PgPool) {
    assert!(!GroupRepo::delete(&pool, 424_242, None).await.unwrap());

    let all = ActivityRepo::list(&pool, &ActivityQuery::default()).await.unwrap();
    assert!(all.is_empty());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_upcoming_orders_by_start_date(pool: PgPool) {
    let mut past = new_group("Lincoln High", "Past");
    past.start_date = date(2024, 1, 10);
    past.end_date = date(2024, 1, 12);
    let mut late = new_group("Lincoln High", "Late");
    late.start_date = date(2025, 9, 1);
    late.end_date = date(2025, 9, 3);
    let soon = new_group("Lincoln High", "Soon");

    for input in [&past, &late, &soon] {
        GroupRepo::create(&pool, input, None).await.unwrap();
    }

    let upcoming = GroupRepo::list_upcoming(&pool, date(2025, 1, 1), 5).await.unwrap();
    let names: Vec<&str> = upcoming.iter().map(|g| g.group_name.as_str()).collect();
    assert_eq!(names, ["Soon", "Late"]);
}
