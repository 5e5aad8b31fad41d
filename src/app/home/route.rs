use askama::Template;
use axum::response::IntoResponse;
use chrono::Datelike;

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    year: i32,
}

#[tracing::instrument(name = "Home page")]
pub async fn home_page() -> impl IntoResponse {
    HomeTemplate {
        year: chrono::Utc::now().year(),
    }
}
