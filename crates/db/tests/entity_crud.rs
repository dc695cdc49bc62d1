//! Integration tests for the plain CRUD repositories.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tripdesk_core::action_items::{priorities, statuses};
use tripdesk_db::models::action_item::{CreateActionItem, UpdateActionItem};
use tripdesk_db::models::bus_supplier::{CreateBusSupplier, UpdateBusSupplier};
use tripdesk_db::models::document::CreateDocument;
use tripdesk_db::models::group::{CreateGroup, UpdateGroup};
use tripdesk_db::models::itinerary::{CreateItinerary, UpdateItinerary};
use tripdesk_db::models::meal::CreateMeal;
use tripdesk_db::models::user::CreateUser;
use tripdesk_db::repositories::{
    ActionItemRepo, BusSupplierRepo, DocumentRepo, GroupRepo, ItineraryRepo, MealRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_group(name: &str, bus_supplier_id: Option<i64>) -> CreateGroup {
    CreateGroup {
        school_name: "Lincoln High".to_string(),
        group_name: name.to_string(),
        location: "Orlando, FL".to_string(),
        start_date: date(2025, 4, 10),
        end_date: date(2025, 4, 14),
        registration_date: None,
        director_name: None,
        director_email: None,
        bus_supplier_id,
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

fn new_supplier(name: &str) -> CreateBusSupplier {
    CreateBusSupplier {
        name: name.to_string(),
        address: None,
        website: None,
        contact_name: Some("Dana".to_string()),
        contact_phone: None,
        contact_email: None,
        available_buses: Some(6),
    }
}

fn constraint_of(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Bus suppliers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_supplier_rename_is_seen_by_groups(pool: PgPool) {
    let supplier = BusSupplierRepo::create(&pool, &new_supplier("Coastal Coaches"))
        .await
        .unwrap();
    let group = GroupRepo::create(&pool, &new_group("Band", Some(supplier.id)), None)
        .await
        .unwrap();

    let renamed = BusSupplierRepo::update(
        &pool,
        supplier.id,
        &UpdateBusSupplier {
            name: Some("Coastal Charter".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Coastal Charter");
    assert_eq!(renamed.available_buses, Some(6));

    let riders = GroupRepo::list_by_bus_supplier(&pool, supplier.id).await.unwrap();
    assert_eq!(riders.len(), 1);
    assert_eq!(riders[0].id, group.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_supplier_delete_detaches_groups(pool: PgPool) {
    let supplier = BusSupplierRepo::create(&pool, &new_supplier("Coastal Coaches"))
        .await
        .unwrap();
    let group = GroupRepo::create(&pool, &new_group("Band", Some(supplier.id)), None)
        .await
        .unwrap();

    assert!(BusSupplierRepo::delete(&pool, supplier.id).await.unwrap());

    let reloaded = GroupRepo::find_by_id(&pool, group.id).await.unwrap().unwrap();
    assert_eq!(reloaded.bus_supplier_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_supplier_names_are_unique(pool: PgPool) {
    BusSupplierRepo::create(&pool, &new_supplier("Coastal Coaches"))
        .await
        .unwrap();
    let err = BusSupplierRepo::create(&pool, &new_supplier("Coastal Coaches"))
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_bus_suppliers_name"));
}

// ---------------------------------------------------------------------------
// Itineraries and meals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_itinerary_crud(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Band", None), None)
        .await
        .unwrap();

    let day = ItineraryRepo::create(
        &pool,
        &CreateItinerary {
            group_id: group.id,
            day_number: 1,
            date: date(2025, 4, 10),
            activity: "Magic Kingdom".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_time: None,
            location: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    let updated = ItineraryRepo::update(
        &pool,
        day.id,
        &UpdateItinerary {
            activity: Some("EPCOT".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.activity, "EPCOT");
    assert_eq!(updated.start_time, NaiveTime::from_hms_opt(9, 0, 0));

    assert_eq!(ItineraryRepo::list(&pool, Some(group.id)).await.unwrap().len(), 1);
    assert!(ItineraryRepo::delete(&pool, day.id).await.unwrap());
    assert!(!ItineraryRepo::delete(&pool, day.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_meal_counts_default_to_zero(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Band", None), None)
        .await
        .unwrap();

    let meal = MealRepo::create(
        &pool,
        &CreateMeal {
            group_id: group.id,
            meal_date: date(2025, 4, 11),
            meal_time: None,
            turkey_count: Some(4),
            ham_count: None,
            chicken_count: Some(3),
            veggie_count: None,
            salad_count: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(meal.ham_count, 0);
    assert_eq!(meal.total_meals(), 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_group_delete_cascades_children(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Band", None), None)
        .await
        .unwrap();
    MealRepo::create(
        &pool,
        &CreateMeal {
            group_id: group.id,
            meal_date: date(2025, 4, 11),
            meal_time: None,
            turkey_count: None,
            ham_count: None,
            chicken_count: None,
            veggie_count: None,
            salad_count: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    GroupRepo::delete(&pool, group.id, None).await.unwrap();
    assert!(MealRepo::list(&pool, Some(group.id)).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Action items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_action_item_defaults_and_status_count(pool: PgPool) {
    let item = ActionItemRepo::create(
        &pool,
        &CreateActionItem {
            group_id: None,
            title: "Book buses".to_string(),
            description: None,
            due_date: None,
            priority: None,
            status: None,
            assigned_to: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(item.priority, priorities::MEDIUM);
    assert_eq!(item.status, statuses::OPEN);
    assert_eq!(ActionItemRepo::count_by_status(&pool, statuses::OPEN).await.unwrap(), 1);

    ActionItemRepo::update(
        &pool,
        item.id,
        &UpdateActionItem {
            status: Some(statuses::DONE.to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(ActionItemRepo::count_by_status(&pool, statuses::OPEN).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_action_item_survives_group_delete(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Band", None), None)
        .await
        .unwrap();
    let item = ActionItemRepo::create(
        &pool,
        &CreateActionItem {
            group_id: Some(group.id),
            title: "Collect forms".to_string(),
            description: None,
            due_date: None,
            priority: Some(priorities::HIGH.to_string()),
            status: None,
            assigned_to: None,
        },
    )
    .await
    .unwrap();

    GroupRepo::delete(&pool, group.id, None).await.unwrap();

    let reloaded = ActionItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(reloaded.group_id, None);
}

// ---------------------------------------------------------------------------
// Users and documents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_defaults_and_uniqueness(pool: PgPool) {
    let input = CreateUser {
        username: "amy".to_string(),
        display_name: Some("Amy".to_string()),
        email: None,
        role: None,
    };
    let user = UserRepo::create(&pool, &input).await.unwrap();
    assert_eq!(user.role, "staff");

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_delete_returns_row(pool: PgPool) {
    let group = GroupRepo::create(&pool, &new_group("Band", None), None)
        .await
        .unwrap();
    let doc = DocumentRepo::create(
        &pool,
        &CreateDocument {
            group_id: group.id,
            document_type: "contract".to_string(),
            file_name: "contract.pdf".to_string(),
            file_path: "storage/documents/1/abc_contract.pdf".to_string(),
            file_size_bytes: 42,
            content_type: Some("application/pdf".to_string()),
            description: None,
            uploaded_by: None,
        },
    )
    .await
    .unwrap();

    let deleted = DocumentRepo::delete(&pool, doc.id).await.unwrap().unwrap();
    assert_eq!(deleted.file_path, "storage/documents/1/abc_contract.pdf");
    assert!(DocumentRepo::delete(&pool, doc.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_group_update_can_attach_supplier(pool: PgPool) {
    let supplier = BusSupplierRepo::create(&pool, &new_supplier("Coastal Coaches"))
        .await
        .unwrap();
    let group = GroupRepo::create(&pool, &new_group("Band", None), None)
        .await
        .unwrap();

    let updated = GroupRepo::update(
        &pool,
        group.id,
        &UpdateGroup {
            bus_supplier_id: Some(supplier.id),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.bus_supplier_id, Some(supplier.id));
}
