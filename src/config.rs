use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::search::SortMode;
use crate::QuestError;

/// Environment variable consulted when no key is configured
pub const API_KEY_ENV: &str = "FOOD2FORK_API_KEY";

/// Runtime settings for a recipe quest
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// API key for the recipe service (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Search endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Recipe detail endpoint
    #[serde(default = "default_recipe_url")]
    pub recipe_url: String,
    /// Sort order requested from the search endpoint
    #[serde(default)]
    pub sort: SortMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            search_url: default_search_url(),
            recipe_url: default_recipe_url(),
            sort: SortMode::default(),
        }
    }
}

fn default_search_url() -> String {
    "https://www.food2fork.com/api/search".to_string()
}

fn default_recipe_url() -> String {
    "https://www.food2fork.com/api/get".to_string()
}

impl Settings {
    /// Load settings from `config.toml` and `RECIPE_QUEST__*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Resolve the API key, falling back to `FOOD2FORK_API_KEY`
    pub fn api_key(&self) -> Result<String, QuestError> {
        resolve_api_key(self.api_key.clone(), || std::env::var(API_KEY_ENV).ok())
    }
}

/// Blank keys count as unset.
fn resolve_api_key(
    configured: Option<String>,
    from_env: impl FnOnce() -> Option<String>,
) -> Result<String, QuestError> {
    configured
        .filter(|key| !key.trim().is_empty())
        .or_else(from_env)
        .filter(|key| !key.trim().is_empty())
        .ok_or(QuestError::MissingApiKey)
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_QUEST__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_QUEST__API_KEY
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::with_prefix("RECIPE_QUEST").separator("__"))
        .build()?;

    settings.try_deserialize()
}
