//! User accounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named account.
///
/// The password is only reachable through [`User::password`] and
/// [`User::set_password`]. It is never serialized and never shows up in
/// `Display` or `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display identity, also used as the authorship key on posts.
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    password: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replace the password. No check against the old value.
    pub fn set_password(&mut self, new_password: impl Into<String>) {
        self.password = new_password.into();
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: {}, Email: {}", self.name, self.email)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
