use crate::config::toml_config::TomlConfig;
use crate::config::{SearchSettings, DEFAULT_MAX_RESTAURANTS, DEFAULT_SEARCH_RADIUS};
use crate::core::client::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use clap::{Parser, ValueEnum};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Parser)]
#[command(name = "maps-search")]
#[command(about = "Find restaurants near an address with the Google Maps APIs")]
pub struct CliConfig {
    /// Street address to search around
    #[arg(short, long)]
    pub address: String,

    /// Google Maps API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum number of restaurants to report
    #[arg(long, env = "MAPS_SEARCH_MAX_RESTAURANTS")]
    pub max_restaurants: Option<usize>,

    /// Search radius in metres
    #[arg(long, env = "MAPS_SEARCH_RADIUS")]
    pub search_radius: Option<u32>,

    /// Base URL of the Maps API
    #[arg(long)]
    pub base_url: Option<String>,

    /// TOML configuration file, flags given on the command line win over it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

// keeps the API key out of `--verbose` logs
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("address", &self.address)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_restaurants", &self.max_restaurants)
            .field("search_radius", &self.search_radius)
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("format", &self.format)
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// Everything the binary needs to run one search.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub address: String,
    pub settings: SearchSettings,
}

impl CliConfig {
    /// Merges flags over the optional config file over the defaults.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let api_key = self
            .api_key
            .clone()
            .or_else(|| file.as_ref().and_then(|f| f.api_key().map(str::to_string)));
        let api_key = validate_required_field("api_key", &api_key)?.clone();

        let settings = SearchSettings {
            base_url: self
                .base_url
                .clone()
                .or_else(|| file.as_ref().map(|f| f.base_url().to_string()))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_restaurants: self
                .max_restaurants
                .or_else(|| file.as_ref().map(|f| f.max_restaurants()))
                .unwrap_or(DEFAULT_MAX_RESTAURANTS),
            search_radius: self
                .search_radius
                .or_else(|| file.as_ref().map(|f| f.search_radius()))
                .unwrap_or(DEFAULT_SEARCH_RADIUS),
        };

        let resolved = ResolvedConfig {
            api_key,
            address: self.address.clone(),
            settings,
        };
        resolved.validate()?;
        Ok(resolved)
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("address", &self.address)?;
        self.settings.validate()
    }
}
