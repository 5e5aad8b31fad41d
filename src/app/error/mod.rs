use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function and maps each
/// failure class to a status code and a JSON body with a user-facing message.
/// The real cause of an `Unexpected` error is logged, never sent to the
/// client.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("This email is already on our waitlist.")]
    DuplicateEmail,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Validation { field, ref message } => {
                tracing::info!(field, detail = %message, "rejected signup");
                (
                    status,
                    Json(schema::Error {
                        code: status.as_u16(),
                        message: message.to_owned(),
                        details: Some(vec![schema::ErrorDetails {
                            field: field.to_owned(),
                            message: message.to_owned(),
                        }]),
                    }),
                )
                    .into_response()
            }
            Self::DuplicateEmail => (
                status,
                Json(schema::Error {
                    code: status.as_u16(),
                    message: self.to_string(),
                    details: None,
                }),
            )
                .into_response(),
            Self::Unexpected(ref e) => {
                tracing::error!("{:?}", e);
                (
                    status,
                    Json(schema::Error {
                        code: status.as_u16(),
                        message: "Something went wrong. Please try again.".to_owned(),
                        details: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}
