pub mod client;
mod fetch_error;
pub mod models;

pub use client::{ForecastSource, JmaClient};
pub use fetch_error::FetchError;
