use async_trait::async_trait;
use shared_types::{
    AppError, AuthorizedUser, CollectionSearchRequest, ContributorLists, ModelSummary, UserRecord,
};
use std::collections::{BTreeSet, HashMap};

use super::Directory;

/// In-process directory. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    authorized: Vec<AuthorizedUser>,
    users: HashMap<i64, UserRecord>,
    models: Vec<ModelSummary>,
    unavailable: bool,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory whose every query fails, for exercising error paths.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_authorized(mut self, username: &str, role: Option<&str>) -> Self {
        self.authorized.push(AuthorizedUser {
            username: username.to_string(),
            role: role.map(str::to_string),
        });
        self
    }

    pub fn with_user(mut self, id: i64, email: &str, role: &str) -> Self {
        self.users.insert(
            id,
            UserRecord {
                id,
                email: email.to_string(),
                role: role.to_string(),
            },
        );
        self
    }

    pub fn with_model(
        mut self,
        uid: &str,
        specimen_name: &str,
        modeled_by: &str,
        annotated_by: Option<&str>,
    ) -> Self {
        self.models.push(ModelSummary {
            uid: uid.to_string(),
            specimen_name: specimen_name.to_string(),
            modeled_by: modeled_by.to_string(),
            annotated_by: annotated_by.map(str::to_string),
        });
        self
    }

    /// Small seeded catalog for local runs without Postgres.
    pub fn demo() -> Self {
        Self::new()
            .with_authorized("curator@herbarium.test", Some("admin"))
            .with_authorized("student@herbarium.test", Some("student"))
            .with_user(1, "curator@herbarium.test", "admin")
            .with_user(2, "student@herbarium.test", "student")
            .with_model("m-001", "Phalaenopsis amabilis", "Jane Doe", Some("Ada Park"))
            .with_model("m-002", "Cypripedium acaule", "Jane Doe", None)
            .with_model("m-003", "Quercus alba", "Luis Ortega", Some("Ada Park"))
            .with_model("m-004", "Sarracenia purpurea", "Luis Ortega", Some("Wen Li"))
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            Err(AppError::database("directory unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn authorized_users(&self) -> Result<Vec<AuthorizedUser>, AppError> {
        self.check()?;
        Ok(self.authorized.clone())
    }

    async fn user_by_id(&self, id: i64) -> Result<Option<UserRecord>, AppError> {
        self.check()?;
        Ok(self.users.get(&id).cloned())
    }

    async fn suggestions(&self, prefix: &str, limit: i64) -> Result<Vec<String>, AppError> {
        self.check()?;
        let needle = prefix.trim().to_lowercase();
        let mut names: Vec<String> = self
            .models
            .iter()
            .map(|m| m.specimen_name.clone())
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        names.sort_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        });
        names.truncate(usize::try_from(limit.max(0)).unwrap_or(0));
        Ok(names)
    }

    async fn contributors(&self) -> Result<ContributorLists, AppError> {
        self.check()?;
        let modeled_by: BTreeSet<String> =
            self.models.iter().map(|m| m.modeled_by.clone()).collect();
        let annotated_by: BTreeSet<String> = self
            .models
            .iter()
            .filter_map(|m| m.annotated_by.clone())
            .collect();
        Ok(ContributorLists {
            modeled_by: modeled_by.into_iter().collect(),
            annotated_by: annotated_by.into_iter().collect(),
        })
    }

    async fn search_models(
        &self,
        req: &CollectionSearchRequest,
    ) -> Result<Vec<ModelSummary>, AppError> {
        self.check()?;
        let mut found: Vec<ModelSummary> = self
            .models
            .iter()
            .filter(|m| req.matches(m))
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.specimen_name
                .cmp(&b.specimen_name)
                .then_with(|| a.uid.cmp(&b.uid))
        });
        Ok(found)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
