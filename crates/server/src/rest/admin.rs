use axum::{extract::State, Json};
use shared_types::AdminOutcome;

use crate::auth::extractors::MaybeSession;
use crate::db::AppState;

/// GET /api/admin/destination
///
/// Always 200: refusal is a normal outcome, not an error.
pub async fn admin_destination(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Json<AdminOutcome> {
    Json(crate::dispatch::dispatch(session.as_ref(), state.directory.as_ref()).await)
}
