use serde::Deserialize;

use crate::app::error::AppError;
use crate::domain::signup::{email::SignupEmail, name::SignupName, NewSignup};

#[derive(Deserialize)]
pub struct JoinBody {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub interests: Option<String>,
}

impl TryFrom<JoinBody> for NewSignup {
    type Error = AppError;
    fn try_from(value: JoinBody) -> Result<Self, Self::Error> {
        let name = SignupName::try_from(value.name).map_err(|message| AppError::Validation {
            field: "name",
            message,
        })?;
        let email = SignupEmail::try_from(value.email).map_err(|message| AppError::Validation {
            field: "email",
            message,
        })?;

        Ok(Self {
            name,
            email,
            interests: value.interests,
        })
    }
}

#[derive(serde::Serialize)]
pub struct JoinResponse {
    pub message: String,
}
