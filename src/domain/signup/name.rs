use derive_more::Display;

/// The signer's name. Required, otherwise free text.
#[derive(Display)]
#[display(fmt = "{}", _0)]
pub struct SignupName(String);

impl TryFrom<String> for SignupName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("Please enter your name".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for SignupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
