use shared_types::{AppError, AuthorizedUser, UserRecord};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// List the admin allow-list.
pub async fn list_authorized(pool: &Pool<Postgres>) -> Result<Vec<AuthorizedUser>, AppError> {
    sqlx::query_as::<_, AuthorizedUser>(
        "SELECT username, role FROM authorized_users ORDER BY username ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a user by id.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<UserRecord>, AppError> {
    sqlx::query_as::<_, UserRecord>("SELECT id, email, role FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}
