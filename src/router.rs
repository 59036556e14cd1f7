use crate::app::AppState;
use crate::db::{count_properties, search_properties};
use crate::domain::listing::SearchStatus;
use crate::domain::weather::ForecastView;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect_response, text_response, ResultResp};
use crate::templates::pages::{listings_page, weather_page, DetailPane, ListingsVm, WeatherVm};
use astra::Request;
use chrono::{Local, TimeZone};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    log::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") | ("GET", "/listings") => listings(state, &params),
        ("GET", "/weather") => weather(state, &params),
        ("POST", "/weather/refresh") => {
            state.weather.spawn_area_load();
            redirect_response("/weather")
        }
        ("GET", "/healthz") => text_response(200, "ok"),

        (_, "/" | "/listings" | "/weather" | "/weather/refresh" | "/healthz") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn listings(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let keyword = params.get("q").map(String::as_str).unwrap_or("");

    let result = search_properties(&state.db, keyword, state.search_case_sensitive)
        .and_then(|rows| {
            let total = if keyword.is_empty() {
                count_properties(&state.db)?
            } else {
                0
            };
            Ok((rows, total))
        });

    // A failed query is shown as such, never as an empty result.
    let (rows, status) = match result {
        Ok((rows, total)) => {
            let status = SearchStatus::for_results(keyword, rows.len(), total);
            (rows, status)
        }
        Err(e) => {
            log::error!("listings query failed: {e}");
            (Vec::new(), SearchStatus::Failed(e.to_string()))
        }
    };

    html_response(listings_page(&ListingsVm {
        keyword,
        listings: &rows,
        status,
    }))
}

fn weather(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let code = params
        .get("code")
        .map(|c| c.trim())
        .filter(|c| !c.is_empty());

    if let Some(c) = code {
        if !is_region_code(c) {
            return Err(ServerError::BadRequest(format!("invalid region code: {c}")));
        }
    }

    let areas = state.weather.area_state();

    let mut last_update = String::new();
    let detail = match code {
        None => DetailPane::Placeholder,
        Some(c) => match state.weather.load_forecast(c, now_unix()) {
            Ok(load) => {
                log::debug!(
                    "forecast {c} from_cache={} cached_regions={}",
                    load.from_cache,
                    state.weather.cached_regions()
                );
                last_update = format!("最終取得: {}", format_clock(load.fetched_at));
                let name = state.weather.area_name(c);
                DetailPane::Forecast(ForecastView::from_report(&load.report, &name))
            }
            Err(e) => DetailPane::Error(e.to_string()),
        },
    };

    html_response(weather_page(&WeatherVm {
        query,
        selected_code: code,
        areas: &areas,
        detail,
        last_update,
    }))
}

/// JMA codes are short ASCII digit strings; anything else never reaches the URL template.
fn is_region_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= 16 && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn format_clock(unix: i64) -> String {
    Local
        .timestamp_opt(unix, 0)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
