use serde::{Deserialize, Serialize};

/// Catalog role controlling where an authorized visitor lands in the admin area.
///
/// - `Admin`: catalog managers, routed to the management view.
/// - `Student`: student workers, routed to the student view.
/// - `Other`: any other stored role; never admitted to the admin area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    Student,
    Other(String),
}

impl Role {
    /// Parse a stored role string. Matching is case-insensitive for the
    /// two known roles; anything else is kept verbatim as `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "student" => Role::Student,
            _ => Role::Other(s.to_string()),
        }
    }
}

/// An entry in the admin allow-list. `username` holds the email the
/// identity provider reports for the visitor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct AuthorizedUser {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AuthorizedUser {
    /// True when this entry belongs to the given session email. Exact match.
    pub fn matches_email(&self, email: &str) -> bool {
        self.username == email
    }
}

/// Full user record as returned by the directory's id lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}
