// client.rs
use crate::config::Config;
use crate::jma::models::{AreaCatalog, ForecastReport};
use crate::jma::FetchError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("rental_weather/", env!("CARGO_PKG_VERSION"));

/// Where the weather service gets its data from.
pub trait ForecastSource: Send + Sync {
    fn fetch_area_catalog(&self) -> Result<AreaCatalog, FetchError>;
    fn fetch_forecast(&self, code: &str) -> Result<Vec<ForecastReport>, FetchError>;
}

pub struct JmaClient {
    client: Client,
    area_url: String,
    forecast_url: String,
}

impl JmaClient {
    pub fn new(cfg: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            area_url: cfg.area_url.clone(),
            forecast_url: cfg.forecast_url.clone(),
        })
    }

    pub fn forecast_url_for(&self, code: &str) -> String {
        self.forecast_url.replace("{code}", code)
    }

    /// Single GET with the client's timeout. Any transport error, non-2xx
    /// status or undecodable body comes back as a `FetchError`.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let start = Instant::now();

        let result = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))
            .and_then(|resp| {
                let status = resp.status();
                if !status.is_success() {
                    return Err(FetchError::Status(status.as_u16()));
                }
                resp.json::<T>()
                    .map_err(|e| FetchError::JsonParse(e.to_string()))
            });

        match &result {
            Ok(_) => log::info!("GET {url} ok in {:?}", start.elapsed()),
            Err(e) => log::warn!("GET {url} failed in {:?}: {e}", start.elapsed()),
        }
        result
    }
}

impl ForecastSource for JmaClient {
    fn fetch_area_catalog(&self) -> Result<AreaCatalog, FetchError> {
        self.fetch_json(&self.area_url)
    }

    fn fetch_forecast(&self, code: &str) -> Result<Vec<ForecastReport>, FetchError> {
        self.fetch_json(&self.forecast_url_for(code))
    }
}
