// service.rs
use crate::domain::weather::{flatten_offices, Area};
use crate::jma::models::ForecastReport;
use crate::jma::{FetchError, ForecastSource};
use crate::weather::ForecastCache;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

/// Where the area list is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaListState {
    Idle,
    Loading,
    Loaded(Vec<Area>),
    Failed(String),
}

/// A forecast ready to render.
#[derive(Debug, Clone)]
pub struct ForecastLoad {
    pub report: ForecastReport,
    /// Unix seconds of the network fetch that produced `report`.
    pub fetched_at: i64,
    pub from_cache: bool,
}

/// Owns the area list and the forecast cache for the whole server.
///
/// Request handlers run on several astra worker threads, so every piece of
/// shared state sits behind its own mutex. Locks are never held across a
/// network call.
pub struct WeatherService {
    source: Box<dyn ForecastSource>,
    areas: Mutex<AreaListState>,
    cache: Mutex<ForecastCache>,
}

impl WeatherService {
    pub fn new(source: Box<dyn ForecastSource>, ttl_secs: i64) -> Self {
        Self {
            source,
            areas: Mutex::new(AreaListState::Idle),
            cache: Mutex::new(ForecastCache::new(ttl_secs)),
        }
    }

    pub fn area_state(&self) -> AreaListState {
        lock(&self.areas).clone()
    }

    /// Display name for `code`, or the code itself when the list is not loaded
    /// or does not contain it.
    pub fn area_name(&self, code: &str) -> String {
        match &*lock(&self.areas) {
            AreaListState::Loaded(areas) => areas
                .iter()
                .find(|a| a.code == code)
                .map(|a| a.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| code.to_string()),
            _ => code.to_string(),
        }
    }

    /// Fetch the catalog once and publish the sorted list. No retry; a failure
    /// replaces whatever list was there before.
    pub fn load_areas(&self) -> AreaListState {
        *lock(&self.areas) = AreaListState::Loading;
        let _guard = LoadingGuard { areas: &self.areas };

        let next = match self.source.fetch_area_catalog() {
            Ok(catalog) => {
                let areas = flatten_offices(&catalog);
                log::info!("area catalog loaded: {} offices", areas.len());
                AreaListState::Loaded(areas)
            }
            Err(e) => {
                log::error!("area catalog load failed: {e}");
                AreaListState::Failed(format!("地域リストの取得に失敗: {e}"))
            }
        };

        *lock(&self.areas) = next.clone();
        next
    }

    /// Run [`load_areas`](Self::load_areas) on a background thread.
    ///
    /// Returns `None` without spawning when a load is already in flight.
    pub fn spawn_area_load(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        {
            let mut state = lock(&self.areas);
            if *state == AreaListState::Loading {
                log::debug!("area load already running, skipping");
                return None;
            }
            *state = AreaListState::Loading;
        }

        let svc = Arc::clone(self);
        Some(std::thread::spawn(move || {
            svc.load_areas();
        }))
    }

    /// Serve `code` from cache when fresh, otherwise fetch and cache the
    /// first report.
    ///
    /// Concurrent loads of the same code are not coalesced; whichever fetch
    /// finishes last owns the cache entry.
    pub fn load_forecast(&self, code: &str, now: i64) -> Result<ForecastLoad, FetchError> {
        if let Some(entry) = lock(&self.cache).get_fresh(code, now) {
            log::debug!("forecast cache hit for {code}");
            return Ok(ForecastLoad {
                report: entry.report.clone(),
                fetched_at: entry.fetched_at,
                from_cache: true,
            });
        }

        log::debug!("forecast cache miss for {code}");
        let report = self
            .source
            .fetch_forecast(code)?
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::UnexpectedShape("予報データが見つかりません".into()))?;

        lock(&self.cache).insert(code, report.clone(), now);

        Ok(ForecastLoad {
            report,
            fetched_at: now,
            from_cache: false,
        })
    }

    pub fn cached_regions(&self) -> usize {
        lock(&self.cache).len()
    }
}

/// Leaves `Failed` behind if a load unwinds while still `Loading`, so the
/// next refresh is not skipped forever.
struct LoadingGuard<'a> {
    areas: &'a Mutex<AreaListState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.areas);
        if *state == AreaListState::Loading {
            log::error!("area catalog load aborted");
            *state = AreaListState::Failed("地域リストの取得に失敗: 読み込みが中断されました".into());
        }
    }
}

// A panicked handler must not take the weather pane down with it.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
