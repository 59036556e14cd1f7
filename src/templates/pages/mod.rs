pub mod error;
pub mod listings;
pub mod weather;

pub use error::error_page;
pub use listings::{listings_page, ListingsVm};
pub use weather::{weather_page, DetailPane, WeatherVm};
