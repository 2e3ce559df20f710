use shared_types::{AppError, CollectionSearchRequest, ContributorLists, ModelSummary};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Escape LIKE wildcards so user input matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Distinct specimen names containing `prefix`, shortest first.
pub async fn suggest_names(
    pool: &Pool<Postgres>,
    prefix: &str,
    limit: i64,
) -> Result<Vec<String>, AppError> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT specimen_name
        FROM (SELECT DISTINCT specimen_name FROM models WHERE specimen_name ILIKE $1) names
        ORDER BY length(specimen_name) ASC, specimen_name ASC
        LIMIT $2
        "#,
    )
    .bind(like_pattern(prefix.trim()))
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Distinct modeler and annotator names.
pub async fn contributors(pool: &Pool<Postgres>) -> Result<ContributorLists, AppError> {
    let modeled_by = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT modeled_by FROM models ORDER BY modeled_by ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let annotated_by = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT annotated_by FROM models WHERE annotated_by IS NOT NULL ORDER BY annotated_by ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(ContributorLists {
        modeled_by,
        annotated_by,
    })
}

/// Models matching the term (substring, case-insensitive) and exact filters.
pub async fn search(
    pool: &Pool<Postgres>,
    req: &CollectionSearchRequest,
) -> Result<Vec<ModelSummary>, AppError> {
    sqlx::query_as::<_, ModelSummary>(
        r#"
        SELECT uid, specimen_name, modeled_by, annotated_by
        FROM models
        WHERE specimen_name ILIKE $1
          AND ($2::TEXT IS NULL OR modeled_by = $2)
          AND ($3::TEXT IS NULL OR annotated_by = $3)
        ORDER BY specimen_name ASC, uid ASC
        "#,
    )
    .bind(like_pattern(req.q.trim()))
    .bind(req.modeler_filter())
    .bind(req.annotator_filter())
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
