use serde::{Deserialize, Serialize};

/// Text rendered whenever the admin area refuses a visitor.
pub const NOT_AUTHORIZED: &str = "NOT AUTHORIZED";

/// Admin-area landing views a visitor can be routed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdminDestination {
    #[serde(rename = "/admin/management")]
    Management,
    #[serde(rename = "/admin/student")]
    Student,
}

impl AdminDestination {
    pub fn path(&self) -> &'static str {
        match self {
            AdminDestination::Management => "/admin/management",
            AdminDestination::Student => "/admin/student",
        }
    }
}

/// Result of the admin dispatch. There is no partial outcome: a visitor is
/// either routed somewhere or refused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdminOutcome {
    Unauthorized,
    Redirect { to: AdminDestination },
}

impl AdminOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AdminOutcome::Redirect { .. })
    }

    /// Whether this outcome may open pages that belong to `area`.
    ///
    /// Management pages need the management destination. The student view
    /// is also open to managers.
    pub fn admits(&self, area: AdminDestination) -> bool {
        match (self, area) {
            (AdminOutcome::Unauthorized, _) => false,
            (AdminOutcome::Redirect { to }, AdminDestination::Management) => {
                *to == AdminDestination::Management
            }
            (AdminOutcome::Redirect { .. }, AdminDestination::Student) => true,
        }
    }
}

/// Link menu rendered on the management view: (label, href).
pub const ADMIN_LINKS: &[(&str, &str)] = &[
    ("Management", "/admin/management"),
    ("3D Modeler", "/admin/modeler"),
    ("Botanist", "/admin/botanist"),
];
