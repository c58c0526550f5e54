use serde_json::{json, Value};

/// Values returned by a successful authorization code exchange.
///
/// Defaults mirror a typical one hour session for subject `u-9`.
#[derive(Clone, Debug)]
pub struct TokenFixture {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub subject_id: String,
}

impl TokenFixture {
    pub fn new(access_token: &str, refresh_token: &str, expires_in: i64, subject_id: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
            expires_in,
            subject_id: subject_id.to_string(),
        }
    }

    /// Builds the token endpoint JSON body.
    ///
    /// The backend embeds the account it issued the session for under `user`, next to the
    /// standard OAuth2 token response fields.
    pub fn to_json(&self) -> Value {
        json!({
            "access_token": self.access_token,
            "token_type": "bearer",
            "expires_in": self.expires_in,
            "refresh_token": self.refresh_token,
            "user": {
                "id": self.subject_id,
            }
        })
    }
}

impl Default for TokenFixture {
    fn default() -> Self {
        Self::new("t1", "r1", 3600, "u-9")
    }
}

/// OAuth2 error body as returned by the token endpoint.
pub fn token_error(error: &str, description: &str) -> Value {
    json!({
        "error": error,
        "error_description": description,
    })
}

/// Body of the backend's current-user endpoint.
pub fn user(id: &str, email: Option<&str>) -> Value {
    json!({
        "id": id,
        "email": email,
    })
}
