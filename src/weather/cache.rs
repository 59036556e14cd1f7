use crate::jma::models::ForecastReport;
use std::collections::HashMap;

pub const DEFAULT_TTL_SECS: i64 = 600;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub report: ForecastReport,
    /// Unix seconds.
    pub fetched_at: i64,
}

/// Region code -> last fetched report. Lives for the process only.
#[derive(Debug)]
pub struct ForecastCache {
    ttl_secs: i64,
    entries: HashMap<String, CacheEntry>,
}

impl ForecastCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: HashMap::new(),
        }
    }

    /// The entry for `code` if it was fetched less than `ttl_secs` before `now`.
    pub fn get_fresh(&self, code: &str, now: i64) -> Option<&CacheEntry> {
        self.entries
            .get(code)
            .filter(|entry| now - entry.fetched_at < self.ttl_secs)
    }

    /// Overwrites any previous entry for `code`.
    pub fn insert(&mut self, code: &str, report: ForecastReport, now: i64) {
        self.entries.insert(
            code.to_string(),
            CacheEntry {
                report,
                fetched_at: now,
            },
        );
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
