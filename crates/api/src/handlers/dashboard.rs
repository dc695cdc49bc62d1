//! Handler for the dashboard summary.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tripdesk_core::action_items::statuses;
use tripdesk_core::group_status::GroupStatus;
use tripdesk_db::models::activity::{Activity, ActivityQuery};
use tripdesk_db::models::group::GroupWithStatus;
use tripdesk_db::repositories::{ActionItemRepo, ActivityRepo, GroupRepo};

use crate::error::AppResult;
use crate::handlers::today;
use crate::state::AppState;

const UPCOMING_LIMIT: i64 = 5;
const RECENT_ACTIVITY_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: GroupStatus,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_groups: i64,
    /// One entry per derived status, zeros included.
    pub status_counts: Vec<StatusCount>,
    pub open_action_items: i64,
    pub upcoming_groups: Vec<GroupWithStatus>,
    pub recent_activities: Vec<Activity>,
}

/// Tally derived statuses in [`GroupStatus::ALL`] order.
fn count_statuses(statuses: impl IntoIterator<Item = GroupStatus>) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = GroupStatus::ALL
        .iter()
        .map(|&status| StatusCount { status, count: 0 })
        .collect();
    for status in statuses {
        if let Some(entry) = counts.iter_mut().find(|c| c.status == status) {
            entry.count += 1;
        }
    }
    counts
}

/// GET /api/dashboard
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let today = today();

    let groups = GroupRepo::list(&state.pool).await?;
    let total_groups = groups.len() as i64;
    let status_counts = count_statuses(groups.iter().map(|g| g.derived_status(today)));

    let open_action_items = ActionItemRepo::count_by_status(&state.pool, statuses::OPEN).await?;

    let upcoming_groups = GroupRepo::list_upcoming(&state.pool, today, UPCOMING_LIMIT)
        .await?
        .into_iter()
        .map(|g| g.with_status(today))
        .collect();

    let recent_activities = ActivityRepo::list(
        &state.pool,
        &ActivityQuery {
            limit: Some(RECENT_ACTIVITY_LIMIT),
            ..Default::default()
        },
    )
    .await?;

    Ok(Json(DashboardSummary {
        total_groups,
        status_counts,
        open_action_items,
        upcoming_groups,
        recent_activities,
    }))
}
