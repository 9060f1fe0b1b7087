use std::fmt;
use thiserror::Error;

/// The remote call that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Geocode,
    NearbySearch,
    PlaceDetails,
}

impl ApiOperation {
    /// Path of the JSON endpoint, relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            ApiOperation::Geocode => "/geocode/json",
            ApiOperation::NearbySearch => "/place/nearbysearch/json",
            ApiOperation::PlaceDetails => "/place/details/json",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOperation::Geocode => "geocoding",
            ApiOperation::NearbySearch => "nearby search",
            ApiOperation::PlaceDetails => "place details",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(
        "{operation} request failed with status {status}{}{}",
        address_context(.address),
        detail_context(.detail)
    )]
    ExternalServiceError {
        operation: ApiOperation,
        status: String,
        address: Option<String>,
        detail: Option<String>,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Malformed {operation} response: {message}")]
    MalformedResponse {
        operation: ApiOperation,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

fn address_context(address: &Option<String>) -> String {
    match address {
        Some(address) => format!(" for address '{}'", address),
        None => String::new(),
    }
}

fn detail_context(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({})", detail),
        None => String::new(),
    }
}

impl SearchError {
    /// Status string reported by the remote service, if this error came from one.
    pub fn status(&self) -> Option<&str> {
        match self {
            SearchError::ExternalServiceError { status, .. } => Some(status),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SearchError::ConfigError { .. }
                | SearchError::InvalidConfigValueError { .. }
                | SearchError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::ExternalServiceError {
                operation: ApiOperation::Geocode,
                status,
                address,
                ..
            } => format!(
                "Could not resolve the address {} (status {})",
                address.as_deref().unwrap_or("<unknown>"),
                status
            ),
            SearchError::ExternalServiceError {
                operation, status, ..
            } => format!("Google Maps {} failed with status {}", operation, status),
            SearchError::HttpError(_) => "Could not reach the Google Maps API".to_string(),
            SearchError::MalformedResponse { operation, .. } => {
                format!("Google Maps returned an unexpected {} response", operation)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchError::ExternalServiceError { status, .. } => match status.as_str() {
                "ZERO_RESULTS" => "Check the spelling of the address or try a broader one",
                "REQUEST_DENIED" => "Check that the API key is valid and the Places and Geocoding APIs are enabled",
                "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => "Quota exhausted, wait or raise the project quota",
                "INVALID_REQUEST" => "The request was missing a parameter, check the address and configuration",
                _ => "Try again later",
            },
            SearchError::HttpError(_) => "Check network connectivity and the configured base URL",
            SearchError::MalformedResponse { .. } => "Check that the base URL points at the Google Maps API",
            SearchError::IoError(_) => "Check that the file exists and is readable",
            SearchError::SerializationError(_) => "Report this as a bug",
            SearchError::ConfigError { .. }
            | SearchError::InvalidConfigValueError { .. }
            | SearchError::MissingConfigError { .. } => "Fix the configuration and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_error_mentions_status_and_address() {
        let err = SearchError::ExternalServiceError {
            operation: ApiOperation::Geocode,
            status: "ZERO_RESULTS".to_string(),
            address: Some("nowhere 1".to_string()),
            detail: None,
        };

        assert_eq!(
            err.to_string(),
            "geocoding request failed with status ZERO_RESULTS for address 'nowhere 1'"
        );
        assert_eq!(err.status(), Some("ZERO_RESULTS"));
    }

    #[test]
    fn test_error_detail_is_appended() {
        let err = SearchError::ExternalServiceError {
            operation: ApiOperation::PlaceDetails,
            status: "REQUEST_DENIED".to_string(),
            address: None,
            detail: Some("The provided API key is invalid.".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "place details request failed with status REQUEST_DENIED (The provided API key is invalid.)"
        );
        assert!(err.recovery_suggestion().contains("API key"));
    }

    #[test]
    fn test_config_errors_are_classified() {
        let err = SearchError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(err.status(), None);
    }
}
