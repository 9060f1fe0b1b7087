#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_search_settings, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RESTAURANTS: usize = 5;
pub const DEFAULT_SEARCH_RADIUS: u32 = 500;

/// Resolved search configuration, whatever source it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub base_url: String,
    pub max_restaurants: usize,
    pub search_radius: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_restaurants: DEFAULT_MAX_RESTAURANTS,
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

impl ConfigProvider for SearchSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_restaurants(&self) -> usize {
        self.max_restaurants
    }

    fn search_radius(&self) -> u32 {
        self.search_radius
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> Result<()> {
        validate_search_settings(&self.base_url, self.max_restaurants, self.search_radius)
    }
}
