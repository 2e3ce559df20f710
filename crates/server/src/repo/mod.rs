//! Data queries consumed by the admin dispatcher and the catalog views.
//!
//! `Directory` is the seam between handlers and storage. `PgDirectory`
//! backs the served app; `MemoryDirectory` backs tests and the demo catalog.

pub mod memory;
pub mod model;
pub mod user;

use async_trait::async_trait;
use shared_types::{
    AppError, AuthorizedUser, CollectionSearchRequest, ContributorLists, ModelSummary, UserRecord,
};
use sqlx::{Pool, Postgres};

pub use memory::MemoryDirectory;

#[async_trait]
pub trait Directory: Send + Sync {
    /// Everyone allowed into the admin area.
    async fn authorized_users(&self) -> Result<Vec<AuthorizedUser>, AppError>;

    /// Full user record, or `None` when the id is unknown.
    async fn user_by_id(&self, id: i64) -> Result<Option<UserRecord>, AppError>;

    /// Distinct specimen names containing `prefix`, at most `limit` of them.
    async fn suggestions(&self, prefix: &str, limit: i64) -> Result<Vec<String>, AppError>;

    /// Distinct modeler and annotator names, sorted.
    async fn contributors(&self) -> Result<ContributorLists, AppError>;

    /// Models matching the search term and filters.
    async fn search_models(
        &self,
        req: &CollectionSearchRequest,
    ) -> Result<Vec<ModelSummary>, AppError>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Postgres-backed directory.
#[derive(Clone)]
pub struct PgDirectory {
    pool: Pool<Postgres>,
}

impl PgDirectory {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Directory for PgDirectory {
    async fn authorized_users(&self) -> Result<Vec<AuthorizedUser>, AppError> {
        user::list_authorized(&self.pool).await
    }

    async fn user_by_id(&self, id: i64) -> Result<Option<UserRecord>, AppError> {
        user::find_by_id(&self.pool, id).await
    }

    async fn suggestions(&self, prefix: &str, limit: i64) -> Result<Vec<String>, AppError> {
        model::suggest_names(&self.pool, prefix, limit).await
    }

    async fn contributors(&self) -> Result<ContributorLists, AppError> {
        model::contributors(&self.pool).await
    }

    async fn search_models(
        &self,
        req: &CollectionSearchRequest,
    ) -> Result<Vec<ModelSummary>, AppError> {
        model::search(&self.pool, req).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        use crate::error_convert::SqlxErrorExt;

        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(SqlxErrorExt::into_app_error)
    }
}
