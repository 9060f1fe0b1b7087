pub mod client;
pub mod report;
pub mod search;

pub use crate::domain::model::{Coordinate, Restaurant};
pub use crate::domain::ports::{ConfigProvider, PlacesApi};
pub use crate::utils::error::Result;
