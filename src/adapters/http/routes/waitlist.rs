use axum::{
    Json, Router, body::Bytes, extract::State, response::IntoResponse, routing::post,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub fn router(listing_enabled: bool) -> Router<AppState> {
    let route = post(join_waitlist);
    let route = if listing_enabled {
        route.get(list_waitlist)
    } else {
        route
    };
    Router::new().route("/waitlist", route)
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
}

#[derive(Serialize)]
struct ListResponse {
    entries: Vec<WaitlistEntry>,
    count: usize,
}

/// POST /waitlist
/// Body: `{ "email": string }`, parsed as JSON whatever the Content-Type.
/// New and already-registered emails get the same response.
async fn join_waitlist(
    State(app_state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    // A body that isn't JSON, or has no string `email`, counts as missing.
    let body = serde_json::from_slice::<Value>(&body).ok();
    let email = body
        .as_ref()
        .and_then(|body| body.get("email"))
        .and_then(Value::as_str);

    app_state.waitlist_use_cases.join(email).await?;

    Ok(Json(JoinResponse { success: true }))
}

/// GET /waitlist
/// All entries, newest first. No pagination or access control.
async fn list_waitlist(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let listing = app_state
        .waitlist_use_cases
        .list()
        .await
        .map_err(|err| err.into_fetch_failure())?;

    Ok(Json(ListResponse {
        entries: listing.entries,
        count: listing.count,
    }))
}
