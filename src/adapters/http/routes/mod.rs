pub mod health;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router(listing_enabled: bool) -> Router<AppState> {
    Router::new()
        .merge(waitlist::router(listing_enabled))
        .merge(health::router())
}
