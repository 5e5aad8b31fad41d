use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::validate_email;

/// The pattern the signup form applies before submitting: plain or quoted
/// local-part, domain name or bracketed IPv4 address. The server accepts
/// everything the form does, so a signup that passes the pre-check cannot
/// bounce on format.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("The email pattern should be valid.")
});

/// A syntactically plausible email address. This is a best-effort
/// well-formedness check, not an existence check.
#[derive(Display)]
#[display(fmt = "{}", _0)]
pub struct SignupEmail(String);

impl TryFrom<String> for SignupEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) || EMAIL_PATTERN.is_match(&value) {
            Ok(Self(value))
        } else {
            Err("Please enter a valid email address".into())
        }
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
