//! Whole-store snapshot endpoint, fetched once at session start.

use axum::extract::State;
use chrono::Utc;

use super::{success, ApiResult};
use crate::models::{Datastore, PublicUser};
use crate::AppState;

/// GET /api/datastore - Every collection in one response, so the dashboard
/// can mirror the store into local view state in a single round trip.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Datastore> {
    let users = state.repo.list_users().await?;

    let datastore = Datastore {
        generated_at: Utc::now().to_rfc3339(),
        users: users.iter().map(PublicUser::from).collect(),
        attendees: state.repo.list_attendees().await?,
        events: state.repo.list_events().await?,
        staff_shifts: state.repo.list_staff_shifts().await?,
        volunteer_shifts: state.repo.list_volunteer_shifts().await?,
        accommodations: state.repo.list_accommodations().await?,
        products: state.repo.list_products().await?,
        transactions: state.repo.list_transactions().await?,
        bulletins: state.repo.list_bulletins().await?,
    };

    success(datastore)
}
