use crate::core::report::format_float;
use crate::domain::model::{
    Coordinate, GeocodeResponse, GeocodeResult, NearbyPlace, NearbySearchResponse, PlaceDetails,
    PlaceDetailsResponse, STATUS_OK,
};
use crate::domain::ports::PlacesApi;
use crate::utils::error::{ApiOperation, Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Place type sent with every nearby search.
const RESTAURANT_TYPE: &str = "restaurant";

/// reqwest implementation of [`PlacesApi`] against the Maps Platform REST API.
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key, base_url)
    }

    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, operation: ApiOperation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(operation);
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("key", self.api_key.as_str()));

        // the key is part of the query string, so keep URLs out of errors
        tracing::debug!("Requesting {} from {}", operation, url);
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| SearchError::HttpError(e.without_url()))?;

        tracing::debug!("{} HTTP status: {}", operation, response.status());

        response
            .json::<T>()
            .await
            .map_err(|e| SearchError::HttpError(e.without_url()))
    }
}

fn check_status(
    operation: ApiOperation,
    status: &str,
    address: Option<&str>,
    detail: Option<String>,
) -> Result<()> {
    if status == STATUS_OK {
        return Ok(());
    }

    tracing::debug!("{} reported status {}", operation, status);
    Err(SearchError::ExternalServiceError {
        operation,
        status: status.to_string(),
        address: address.map(str::to_string),
        detail,
    })
}

#[async_trait]
impl PlacesApi for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Coordinate> {
        let response: GeocodeResponse = self
            .get_json(ApiOperation::Geocode, &[("address", address.to_string())])
            .await?;

        check_status(
            ApiOperation::Geocode,
            &response.status,
            Some(address),
            response.error_message,
        )?;

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::MalformedResponse {
                operation: ApiOperation::Geocode,
                message: format!("status OK but no results for address '{}'", address),
            })?;

        let first: GeocodeResult =
            serde_json::from_value(first).map_err(|e| SearchError::MalformedResponse {
                operation: ApiOperation::Geocode,
                message: format!("first result has no location: {}", e),
            })?;

        let location = first.geometry.location;
        Ok(Coordinate::new(location.lat, location.lng))
    }

    async fn nearby_restaurants(
        &self,
        location: Coordinate,
        radius: u32,
    ) -> Result<Vec<NearbyPlace>> {
        let params = [
            (
                "location",
                format!(
                    "{},{}",
                    format_float(location.latitude),
                    format_float(location.longitude)
                ),
            ),
            ("radius", radius.to_string()),
            ("type", RESTAURANT_TYPE.to_string()),
        ];

        let response: NearbySearchResponse =
            self.get_json(ApiOperation::NearbySearch, &params).await?;

        check_status(
            ApiOperation::NearbySearch,
            &response.status,
            None,
            response.error_message,
        )?;

        tracing::debug!("Nearby search returned {} candidates", response.results.len());
        Ok(response.results)
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let response: PlaceDetailsResponse = self
            .get_json(ApiOperation::PlaceDetails, &[("place_id", place_id.to_string())])
            .await?;

        check_status(
            ApiOperation::PlaceDetails,
            &response.status,
            None,
            response.error_message,
        )?;

        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_geocode_returns_first_result() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/geocode/json")
                .query_param("address", "1600 Amphitheatre Pkwy")
                .query_param("key", "test-key");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [
                    {"geometry": {"location": {"lat": 37.422, "lng": -122.084}}},
                    {"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}
                ]
            }));
        });

        let client = GoogleMapsClient::new("test-key", server.base_url());
        let coordinate = client.geocode("1600 Amphitheatre Pkwy").await.unwrap();

        api_mock.assert();
        assert_eq!(coordinate, Coordinate::new(37.422, -122.084));
    }

    #[tokio::test]
    async fn test_geocode_ignores_partial_later_results() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/geocode/json");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [
                    {"geometry": {"location": {"lat": 1.5, "lng": 2.5}}},
                    {"formatted_address": "partial"}
                ]
            }));
        });

        let client = GoogleMapsClient::new("test-key", server.base_url());
        let coordinate = client.geocode("somewhere").await.unwrap();

        assert_eq!(coordinate, Coordinate::new(1.5, 2.5));
    }

    #[tokio::test]
    async fn test_geocode_first_result_without_location_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/geocode/json");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [{"formatted_address": "partial"}]
            }));
        });

        let client = GoogleMapsClient::new("test-key", server.base_url());
        let err = client.geocode("somewhere").await.unwrap_err();

        assert!(matches!(
            err,
            SearchError::MalformedResponse {
                operation: ApiOperation::Geocode,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_geocode_non_ok_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/geocode/json");
            then.status(200).json_body(serde_json::json!({
                "status": "ZERO_RESULTS",
                "results": []
            }));
        });

        let client = GoogleMapsClient::new("test-key", server.base_url());
        let err = client.geocode("nowhere").await.unwrap_err();

        match err {
            SearchError::ExternalServiceError {
                operation,
                status,
                address,
                ..
            } => {
                assert_eq!(operation, ApiOperation::Geocode);
                assert_eq!(status, "ZERO_RESULTS");
                assert_eq!(address.as_deref(), Some("nowhere"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geocode_ok_without_results_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/geocode/json");
            then.status(200)
                .json_body(serde_json::json!({"status": "OK", "results": []}));
        });

        let client = GoogleMapsClient::new("test-key", server.base_url());
        let err = client.geocode("somewhere").await.unwrap_err();

        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_nearby_search_sends_location_radius_and_type() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("location", "40.0,-73.5")
                .query_param("radius", "750")
                .query_param("type", "restaurant")
                .query_param("key", "test-key");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [{"name": "A", "place_id": "a"}, {"place_id": "b"}]
            }));
        });

        let client = GoogleMapsClient::new("test-key", format!("{}/", server.base_url()));
        let places = client
            .nearby_restaurants(Coordinate::new(40.0, -73.5), 750)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].display_name(), "A");
        assert_eq!(places[1].display_name(), "Unknown Name");
    }

    #[tokio::test]
    async fn test_place_details_passes_google_error_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/place/details/json")
                .query_param("place_id", "bad");
            then.status(200).json_body(serde_json::json!({
                "status": "INVALID_REQUEST",
                "error_message": "Invalid 'placeid' parameter."
            }));
        });

        let client = GoogleMapsClient::new("test-key", server.base_url());
        let err = client.place_details("bad").await.unwrap_err();

        assert_eq!(err.status(), Some("INVALID_REQUEST"));
        assert!(err.to_string().contains("Invalid 'placeid' parameter."));
    }

    #[tokio::test]
    async fn test_non_json_body_is_http_error_without_key() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/place/details/json");
            then.status(502).body("Bad Gateway");
        });

        let client = GoogleMapsClient::new("secret-key", server.base_url());
        let err = client.place_details("x").await.unwrap_err();

        assert!(matches!(err, SearchError::HttpError(_)));
        assert!(!err.to_string().contains("secret-key"));
    }
}
