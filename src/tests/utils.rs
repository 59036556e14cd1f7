use crate::app::AppState;
use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::jma::models::{AreaCatalog, ForecastReport};
use crate::jma::{FetchError, ForecastSource};
use crate::weather::WeatherService;
use astra::{Body, Request, Response};
use rusqlite::params;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const AREA_JSON: &str = r#"{
    "centers": {},
    "offices": {
        "120000": { "name": "千葉県", "enName": "Chiba", "parent": "010300" },
        "130000": { "name": "東京都", "enName": "Tokyo", "parent": "010300" },
        "016000": { "name": "石狩・空知・後志地方", "enName": "Ishikari" },
        "474000": { "name": "八重山地方", "enName": "Yaeyama" }
    }
}"#;

pub const FORECAST_JSON: &str = r#"[
    {
        "publishingOffice": "銚子地方気象台",
        "reportDatetime": "2026-10-19T11:00:00+09:00",
        "timeSeries": [
            {
                "timeDefines": [
                    "2026-10-19T11:00:00+09:00",
                    "2026-10-20T00:00:00+09:00",
                    "2026-10-21T00:00:00+09:00"
                ],
                "areas": [
                    {
                        "area": { "name": "北西部", "code": "120010" },
                        "weatherCodes": ["100", "300", "200"],
                        "weathers": ["晴れ　夜　くもり", "雨　所により　雷を伴う"]
                    },
                    {
                        "area": { "name": "南部", "code": "120020" },
                        "weathers": ["くもり", "くもり", "くもり"]
                    }
                ]
            },
            {
                "timeDefines": ["2026-10-19T12:00:00+09:00"],
                "areas": [{ "area": { "name": "北西部" }, "pops": ["10"] }]
            }
        ]
    },
    {
        "publishingOffice": "銚子地方気象台",
        "reportDatetime": "2026-10-19T11:00:00+09:00",
        "timeSeries": []
    }
]"#;

/// Returns a fresh test database using the production schema.
pub fn make_db(label: &str) -> Database {
    let db = unmigrated_db(label);
    init_db(&db).expect("Failed to initialize DB");
    db
}

/// A database file with no `properties` table at all.
pub fn unmigrated_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "rental_weather_{label}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    Database::new(path.to_string_lossy().into_owned())
}

pub fn listing(name: &str, station: &str, price: i64, age: i64, plan: &str) -> Listing {
    Listing {
        name: name.to_string(),
        station: station.to_string(),
        price,
        age,
        floor_plan: plan.to_string(),
    }
}

pub fn seed(db: &Database, rows: &[Listing]) {
    db.with_conn(|conn| {
        for l in rows {
            conn.execute(
                "INSERT INTO properties (name, station, price, age, floor_plan) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![l.name, l.station, l.price, l.age, l.floor_plan],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }
        Ok(())
    })
    .expect("Failed to seed listings");
}

pub fn kisarazu_rows() -> Vec<Listing> {
    vec![
        listing("木更津レジデンス", "木更津", 85000, 12, "1LDK"),
        listing("袖ケ浦ハイツ", "袖ケ浦", 62000, 25, "2DK"),
        listing("Station Court", "Iwane", 50000, 3, "1K"),
        listing("100% Villa", "巌根", 70000, 8, "1R"),
        listing("メゾン木更津", "巌根", 58000, 30, "1DK"),
        listing("coast_house", "長浦", 91000, 1, "2LDK"),
    ]
}

/// Scripted `ForecastSource` that counts how often it is hit.
pub struct FakeSource {
    pub areas: Result<AreaCatalog, FetchError>,
    pub forecast: Result<Vec<ForecastReport>, FetchError>,
    pub area_calls: Arc<AtomicUsize>,
    pub forecast_calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            areas: Ok(serde_json::from_str(AREA_JSON).unwrap()),
            forecast: Ok(serde_json::from_str(FORECAST_JSON).unwrap()),
            area_calls: Arc::new(AtomicUsize::new(0)),
            forecast_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ForecastSource for FakeSource {
    fn fetch_area_catalog(&self) -> Result<AreaCatalog, FetchError> {
        self.area_calls.fetch_add(1, Ordering::SeqCst);
        self.areas.clone()
    }

    fn fetch_forecast(&self, _code: &str) -> Result<Vec<ForecastReport>, FetchError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.forecast.clone()
    }
}

pub fn app_state(db: Database, source: FakeSource) -> AppState {
    let cfg = Config::default();
    let weather = WeatherService::new(Box::new(source), cfg.forecast_ttl_secs);
    AppState::new(&cfg, db, weather)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// `/path?k=v` with the value percent-encoded.
pub fn uri_with(path: &str, pairs: &[(&str, &str)]) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        qs.append_pair(k, v);
    }
    format!("{path}?{}", qs.finish())
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Status of a handler error; panics if the handler succeeded.
pub fn err_status(result: crate::responses::ResultResp) -> u16 {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(e) => e.status(),
    }
}
