pub mod cache;
pub mod service;

pub use cache::ForecastCache;
pub use service::{AreaListState, WeatherService};
