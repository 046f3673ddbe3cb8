use std::fmt;

/// Client id sent when no `CLIENT_ID` is configured
pub const DEFAULT_CLIENT_ID: &str = "TalentPlus";

/// Grant type for the OAuth-style login form
pub const GRANT_TYPE: &str = "password";

#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Form fields for the login request, in the order the server expects them
    pub fn form_fields(&self) -> [(&'static str, String); 5] {
        [
            ("grant_type", GRANT_TYPE.to_string()),
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ]
    }
}

// Secrets stay out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
