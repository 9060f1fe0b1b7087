use crate::config::SearchSettings;
use crate::core::client::GoogleMapsClient;
use crate::core::report::format_report;
use crate::domain::model::{website_of, Coordinate, Restaurant};
use crate::domain::ports::{ConfigProvider, PlacesApi};
use crate::utils::error::Result;

/// Chains geocoding, nearby search and place details for one address.
pub struct RestaurantSearch<A: PlacesApi, C: ConfigProvider> {
    api: A,
    config: C,
}

impl<A: PlacesApi, C: ConfigProvider> RestaurantSearch<A, C> {
    pub fn new(api: A, config: C) -> Self {
        Self { api, config }
    }

    pub async fn geocode(&self, address: &str) -> Result<Coordinate> {
        let coordinate = self.api.geocode(address).await?;
        tracing::debug!(
            "Resolved address to {},{}",
            coordinate.latitude,
            coordinate.longitude
        );
        Ok(coordinate)
    }

    /// Restaurants around `location` in the order Google ranked them.
    ///
    /// Details are fetched one candidate at a time and the walk stops as soon
    /// as `max_restaurants` have been collected, so no detail request is made
    /// for candidates past the cap.
    pub async fn find_nearby_restaurants(&self, location: Coordinate) -> Result<Vec<Restaurant>> {
        let max = self.config.max_restaurants();
        let candidates = self
            .api
            .nearby_restaurants(location, self.config.search_radius())
            .await?;

        let mut restaurants = Vec::new();
        for place in candidates {
            let coordinates = place.location();
            let details = self.api.place_details(place.id()).await?;

            if details.is_empty() {
                tracing::warn!("Skipping {}: empty place details", place.display_name());
            } else {
                restaurants.push(Restaurant {
                    name: place.display_name().to_string(),
                    website: website_of(&details),
                    latitude: coordinates.map(|c| c.lat),
                    longitude: coordinates.map(|c| c.lng),
                });
            }

            if restaurants.len() >= max {
                return Ok(restaurants);
            }
        }

        Ok(restaurants)
    }

    /// Structured results for `address`.
    pub async fn lookup(&self, address: &str) -> Result<Vec<Restaurant>> {
        let coordinate = self.geocode(address).await?;
        let restaurants = self.find_nearby_restaurants(coordinate).await?;
        tracing::info!("Found {} restaurants near '{}'", restaurants.len(), address);
        Ok(restaurants)
    }

    /// Human readable report for `address`.
    pub async fn search(&self, address: &str) -> Result<String> {
        let restaurants = self.lookup(address).await?;
        Ok(format_report(&restaurants))
    }
}

/// Runs the whole chain against Google with a fresh client.
pub async fn search(api_key: &str, address: &str, settings: &SearchSettings) -> Result<String> {
    let client = GoogleMapsClient::new(api_key, settings.base_url.as_str());
    RestaurantSearch::new(client, settings).search(address).await
}
