use serde::{Deserialize, Serialize};

/// Default number of suggestions returned to the header autocomplete.
pub const DEFAULT_SUGGESTION_LIMIT: i64 = 10;

/// Feature flags controlling optional server behaviour.
///
/// Every field defaults to `false` so a missing or partial config file
/// leaves the optional layers off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Wrap the router in `tower_http::trace::TraceLayer`.
    #[serde(default)]
    pub request_tracing: bool,
    /// Seed the in-memory demo catalog instead of connecting to Postgres.
    #[serde(default)]
    pub demo_catalog: bool,
}

/// Catalog tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: i64,
}

fn default_suggestion_limit() -> i64 {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
