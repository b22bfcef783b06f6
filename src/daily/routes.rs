use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use super::{merge_days, DailyRecord};
use crate::error::Public;
use crate::oura::{
    ActivityEntry, CardiovascularAgeEntry, Category, OuraClient, ReadinessEntry, SleepEntry,
    StressEntry,
};
use crate::utils::time::{DateRange, RangeParams};
use crate::{AResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/all-data", get(all_data))
}

async fn all_data(
    State(state): State<AppState>,
    query: Result<Query<RangeParams>, QueryRejection>,
) -> AResult<Json<Vec<DailyRecord>>> {
    let range = state.config.default_range.from_query(query)?;
    let records = organize(&state.oura, range)
        .await
        .public("Failed to fetch and organize data.")?;
    Ok(Json(records))
}

// All five fetches settle before any result is looked at.
pub async fn organize(client: &OuraClient, range: DateRange) -> anyhow::Result<Vec<DailyRecord>> {
    let (sleep, readiness, activity, cardiovascular, stress) = tokio::join!(
        client.fetch::<SleepEntry>(Category::Sleep, range),
        client.fetch::<ReadinessEntry>(Category::Readiness, range),
        client.fetch::<ActivityEntry>(Category::Activity, range),
        client.fetch::<CardiovascularAgeEntry>(Category::CardiovascularAge, range),
        client.fetch::<StressEntry>(Category::Stress, range),
    );

    let records = merge_days(
        &sleep?,
        &readiness?,
        &activity?,
        &cardiovascular?,
        &stress?,
    );
    tracing::info!(%range, days = records.len(), "organized daily records");
    Ok(records)
}
