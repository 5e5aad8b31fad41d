use axum::{extract::State, response::IntoResponse, Json};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::schema::{self, JoinBody};
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::signup::NewSignup,
};

#[instrument(name = "adding a signup to the waitlist", skip(state, body), fields(email = %body.email, name = %body.name))]
pub async fn join(
    State(state): State<AppState>,
    Json(body): Json<JoinBody>,
) -> AppResult<impl IntoResponse> {
    let signup = NewSignup::try_from(body)?;

    insert_signup(&state.db, &signup).await?;

    Ok(Json(schema::JoinResponse {
        message: "Thanks for joining! We'll be in touch soon.".to_owned(),
    }))
}

#[instrument(name = "inserting signup into the database", skip(db, signup), fields(email = %signup.email, name = %signup.name))]
async fn insert_signup(db: &PgPool, signup: &NewSignup) -> Result<(), AppError> {
    sqlx::query(
        r#"insert into waitlist (id, name, email, interests, joined_at) values ($1, $2, $3, $4, $5)"#,
    )
    .bind(Uuid::new_v4())
    .bind(signup.name.as_ref())
    .bind(signup.email.as_ref())
    .bind(signup.interests.as_deref())
    .bind(chrono::Utc::now())
    .execute(db)
    .await
    .map_err(|e| {
        // The unexpected class is error-logged where the response is built;
        // a duplicate is an ordinary outcome, not an error.
        let err = classify_insert_error(e);
        if matches!(err, AppError::DuplicateEmail) {
            tracing::info!("email is already on the waitlist");
        }
        err
    })?;

    Ok(())
}

/// Decide once, at the insert boundary, whether a failure is a duplicate
/// email or something unexpected. Postgres signals a unique-constraint
/// violation with SQLSTATE 23505; the message check covers drivers that
/// only surface "duplicate key" text.
fn classify_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        let is_duplicate = db_err.code().map_or(false, |code| code == "23505")
            || db_err.message().contains("duplicate");
        if is_duplicate {
            return AppError::DuplicateEmail;
        }
    }

    AppError::Unexpected(anyhow::Error::from(e))
}
