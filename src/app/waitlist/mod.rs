use axum::{routing::post, Router};

use super::AppState;

mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(route::join))
}
