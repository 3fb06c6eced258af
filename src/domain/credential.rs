//! Teacher credential record handed over by account creation

use serde::{Deserialize, Serialize};

/// Credentials of a freshly created teacher account.
///
/// All fields are opaque here; validation belongs to whoever produced them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
    pub access_id: String,
    pub teacher_name: String,
    pub teacher_email: String,
}

impl CredentialRecord {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        access_id: impl Into<String>,
        teacher_name: impl Into<String>,
        teacher_email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            access_id: access_id.into(),
            teacher_name: teacher_name.into(),
            teacher_email: teacher_email.into(),
        }
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("password", &"***")
            .field("access_id", &self.access_id)
            .field("teacher_name", &self.teacher_name)
            .field("teacher_email", &self.teacher_email)
            .finish()
    }
}
