use crate::domain::model::{Coordinate, NearbyPlace, PlaceDetails};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The three Google Maps calls the search chains together.
///
/// Implementations return an `ExternalServiceError` whenever the service
/// reports a status other than `OK`.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinate>;
    async fn nearby_restaurants(&self, location: Coordinate, radius: u32)
        -> Result<Vec<NearbyPlace>>;
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn max_restaurants(&self) -> usize;
    /// Metres.
    fn search_radius(&self) -> u32;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for &T {
    fn base_url(&self) -> &str {
        (**self).base_url()
    }

    fn max_restaurants(&self) -> usize {
        (**self).max_restaurants()
    }

    fn search_radius(&self) -> u32 {
        (**self).search_radius()
    }
}
