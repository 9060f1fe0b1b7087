use crate::config::{DEFAULT_MAX_RESTAURANTS, DEFAULT_SEARCH_RADIUS};
use crate::core::client::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{validate_search_settings, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub max_restaurants: Option<usize>,
    pub radius_meters: Option<u32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SearchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SearchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// `None` when absent or still an unresolved `${VAR}` placeholder.
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .api_key
            .as_deref()
            .filter(|key| !(key.starts_with("${") && key.ends_with('}')))
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn max_restaurants(&self) -> usize {
        self.search.max_restaurants.unwrap_or(DEFAULT_MAX_RESTAURANTS)
    }

    fn search_radius(&self) -> u32 {
        self.search.radius_meters.unwrap_or(DEFAULT_SEARCH_RADIUS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_search_settings(self.base_url(), self.max_restaurants(), self.search_radius())
    }
}
