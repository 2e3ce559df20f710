use shared_types::{AppConfig, CatalogConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents. Invalid TOML falls back to defaults and a
/// negative suggestion limit is clamped to zero.
pub fn parse_config(contents: &str) -> AppConfig {
    let mut config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    });
    if config.catalog.suggestion_limit < 0 {
        tracing::warn!(
            suggestion_limit = config.catalog.suggestion_limit,
            "Negative suggestion limit, using 0"
        );
        config.catalog.suggestion_limit = 0;
    }
    config
}

/// Read `config.toml` once into the global `OnceLock`. Later calls are no-ops.
///
/// A missing file leaves every flag off and the catalog knobs at their defaults.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, catalog = ?config.catalog, "Loaded config");
            config
        }
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    });
}

/// The loaded config, or defaults if `load_config()` has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

pub fn catalog() -> &'static CatalogConfig {
    &config().catalog
}
