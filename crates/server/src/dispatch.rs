//! Admin-area dispatch: decide where a visitor lands, or refuse them.

use shared_types::{AdminDestination, AdminOutcome, Role};

use crate::auth::Session;
use crate::repo::Directory;

/// Resolve the admin landing view for `session`.
///
/// 1. No session, or an email missing from the allow-list: refused.
/// 2. Otherwise the user record decides: `admin` goes to management,
///    `student` to the student view, anything else (or no record) is refused.
///
/// Directory failures also refuse; the outcome is always binary.
#[tracing::instrument(skip_all, fields(user_id = session.map(|s| s.sub)))]
pub async fn dispatch(session: Option<&Session>, directory: &dyn Directory) -> AdminOutcome {
    let Some(session) = session else {
        return AdminOutcome::Unauthorized;
    };

    let authorized = match directory.authorized_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!(error = %e, "Allow-list lookup failed");
            return AdminOutcome::Unauthorized;
        }
    };

    if !authorized.iter().any(|u| u.matches_email(session.email())) {
        return AdminOutcome::Unauthorized;
    }

    let record = match directory.user_by_id(session.user_id()).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "User lookup failed");
            return AdminOutcome::Unauthorized;
        }
    };

    match record.map(|r| r.role()) {
        Some(Role::Admin) => AdminOutcome::Redirect {
            to: AdminDestination::Management,
        },
        Some(Role::Student) => AdminOutcome::Redirect {
            to: AdminDestination::Student,
        },
        Some(Role::Other(_)) | None => AdminOutcome::Unauthorized,
    }
}
