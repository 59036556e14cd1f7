use crate::errors::ServerError;
use crate::weather::cache::DEFAULT_TTL_SECS;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

pub const DEFAULT_AREA_URL: &str = "http://www.jma.go.jp/bosai/common/const/area.json";
pub const DEFAULT_FORECAST_URL: &str =
    "https://www.jma.go.jp/bosai/forecast/data/forecast/{code}.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub bind_addr: String,
    pub max_workers: usize,
    pub area_url: String,
    /// Must contain `{code}`, replaced by the region code.
    pub forecast_url: String,
    pub http_timeout_secs: u64,
    pub forecast_ttl_secs: i64,
    pub search_case_sensitive: bool,
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "saishukadai.db".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            area_url: DEFAULT_AREA_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            http_timeout_secs: 10,
            forecast_ttl_secs: DEFAULT_TTL_SECS,
            search_case_sensitive: false,
            init_schema: true,
        }
    }
}

impl Config {
    /// Loads `.env` (if any) and overlays environment variables on the defaults.
    pub fn from_env() -> Result<Self, ServerError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let cfg = Config {
            db_path: lookup("RENTAL_DB_PATH").unwrap_or(defaults.db_path),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_workers: parse_or(&lookup, "MAX_WORKERS", defaults.max_workers)?,
            area_url: lookup("JMA_AREA_URL").unwrap_or(defaults.area_url),
            forecast_url: lookup("JMA_FORECAST_URL").unwrap_or(defaults.forecast_url),
            http_timeout_secs: parse_or(&lookup, "HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            forecast_ttl_secs: parse_or(&lookup, "FORECAST_TTL_SECS", defaults.forecast_ttl_secs)?,
            search_case_sensitive: parse_or(
                &lookup,
                "SEARCH_CASE_SENSITIVE",
                defaults.search_case_sensitive,
            )?,
            init_schema: parse_or(&lookup, "INIT_SCHEMA", defaults.init_schema)?,
        };

        if !cfg.forecast_url.contains("{code}") {
            return Err(ServerError::Config(
                "JMA_FORECAST_URL must contain {code}".into(),
            ));
        }
        if cfg.max_workers == 0 {
            return Err(ServerError::Config("MAX_WORKERS must be at least 1".into()));
        }
        if cfg.http_timeout_secs == 0 {
            return Err(ServerError::Config("HTTP_TIMEOUT_SECS must be at least 1".into()));
        }
        if cfg.forecast_ttl_secs <= 0 {
            return Err(ServerError::Config("FORECAST_TTL_SECS must be at least 1".into()));
        }

        Ok(cfg)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ServerError::Config(format!("{key}={raw:?}: {e}"))),
    }
}
