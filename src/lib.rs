pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, OutputFormat, ResolvedConfig};

pub use crate::config::SearchSettings;
pub use crate::core::client::GoogleMapsClient;
pub use crate::core::report::format_report;
pub use crate::core::search::{search, RestaurantSearch};
pub use crate::domain::model::{Coordinate, Restaurant};
pub use crate::utils::error::{ApiOperation, Result, SearchError};
