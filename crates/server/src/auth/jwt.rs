use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Authenticated visitor, as carried in the signed session token.
///
/// The identity provider issues these tokens; this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub sub: i64,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token id, so two tokens minted in the same second differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Session {
    pub fn user_id(&self) -> i64 {
        self.sub
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn session_secret() -> Result<String, jsonwebtoken::errors::Error> {
    std::env::var("SESSION_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| jsonwebtoken::errors::ErrorKind::InvalidKeyFormat.into())
}

pub fn session_expiry_minutes() -> i64 {
    std::env::var("SESSION_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60 * 12)
}

/// Mint a session token. Used by the dev `issue-session` binary and tests.
pub fn create_session_token(user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let session = Session {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(session_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
    };
    encode(
        &Header::default(),
        &session,
        &EncodingKey::from_secret(session_secret()?.as_bytes()),
    )
}

/// Validate a session token's signature and expiry.
pub fn validate_session_token(token: &str) -> Result<Session, jsonwebtoken::errors::Error> {
    let data = decode::<Session>(
        token,
        &DecodingKey::from_secret(session_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
