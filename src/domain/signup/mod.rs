pub mod email;
pub mod name;

use self::email::SignupEmail;
use self::name::SignupName;

/// A signup that has passed validation and may be written to the waitlist.
pub struct NewSignup {
    pub name: SignupName,
    pub email: SignupEmail,
    pub interests: Option<String>,
}
