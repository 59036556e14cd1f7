use crate::jma::FetchError;
use crate::router::handle;
use crate::tests::utils::{
    app_state, body_string, err_status, get, make_db, post, uri_with, FakeSource,
};
use std::sync::atomic::Ordering;

#[test]
fn weather_page_before_areas_load_shows_loading() {
    let state = app_state(make_db("weather_idle"), FakeSource::new());

    let body = body_string(handle(get("/weather"), &state).unwrap());
    assert!(body.contains("読み込み中..."));
    assert!(body.contains("地域を選択してください"));
}

#[test]
fn weather_page_lists_areas_and_filters() {
    let state = app_state(make_db("weather_list"), FakeSource::new());
    state.weather.load_areas();

    let body = body_string(handle(get("/weather"), &state).unwrap());
    assert!(body.contains("千葉県"));
    assert!(body.contains("東京都"));
    assert!(body.contains("/weather?code=120000"));

    let filtered = body_string(handle(get(&uri_with("/weather", &[("q", "千葉")])), &state).unwrap());
    assert!(filtered.contains("千葉県"));
    assert!(!filtered.contains("東京都"));
}

#[test]
fn selecting_an_area_renders_forecast_and_caches_it() {
    let source = FakeSource::new();
    let calls = source.forecast_calls.clone();
    let state = app_state(make_db("weather_detail"), source);
    state.weather.load_areas();

    let resp = handle(get("/weather?code=120000"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("千葉県 の予報"));
    assert!(body.contains("発表: 銚子地方気象台"));
    assert!(body.contains("☀️"));
    assert!(body.contains("🌧️"));
    assert!(body.contains("最終取得: "));
    assert!(body.contains(r#"class="selected""#));

    handle(get("/weather?code=120000"), &state).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn report_without_time_series_shows_header_only() {
    let mut source = FakeSource::new();
    source.forecast = Ok(vec![serde_json::from_str(
        r#"{"publishingOffice": "気象庁", "reportDatetime": "2026-10-19T05:00:00+09:00"}"#,
    )
    .unwrap()]);
    let state = app_state(make_db("weather_header"), source);

    let body = body_string(handle(get("/weather?code=130000"), &state).unwrap());
    // names are unknown until the list loads, so the code stands in
    assert!(body.contains("130000 の予報"));
    assert!(body.contains("発表: 気象庁"));
    assert!(!body.contains(r#"class="day""#));
}

#[test]
fn forecast_failure_is_shown_in_detail_pane() {
    let mut source = FakeSource::new();
    source.forecast = Err(FetchError::Network("connection refused".into()));
    let state = app_state(make_db("weather_error"), source);

    let resp = handle(get("/weather?code=120000"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("エラー: "));
    assert!(body.contains("connection refused"));
}

#[test]
fn area_load_failure_is_shown_in_list_pane() {
    let mut source = FakeSource::new();
    source.areas = Err(FetchError::Status(500));
    let state = app_state(make_db("weather_area_error"), source);
    state.weather.load_areas();

    let body = body_string(handle(get("/weather"), &state).unwrap());
    assert!(body.contains("地域リストの取得に失敗: HTTP status 500"));
}

#[test]
fn invalid_region_code_is_bad_request() {
    let state = app_state(make_db("weather_bad_code"), FakeSource::new());
    let req = get(&uri_with("/weather", &[("code", "../../etc")]));
    assert_eq!(err_status(handle(req, &state)), 400);
}

#[test]
fn refresh_redirects_back_to_weather() {
    let state = app_state(make_db("weather_refresh"), FakeSource::new());

    let resp = handle(post("/weather/refresh"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").and_then(|v| v.to_str().ok()),
        Some("/weather")
    );

    assert_eq!(err_status(handle(get("/weather/refresh"), &state)), 405);
}
