use crate::config::Config;
use crate::db::Database;
use crate::weather::WeatherService;
use std::sync::Arc;

/// Everything a request handler can reach.
pub struct AppState {
    pub db: Database,
    pub weather: Arc<WeatherService>,
    pub search_case_sensitive: bool,
}

impl AppState {
    pub fn new(cfg: &Config, db: Database, weather: WeatherService) -> Self {
        Self {
            db,
            weather: Arc::new(weather),
            search_case_sensitive: cfg.search_case_sensitive,
        }
    }
}
