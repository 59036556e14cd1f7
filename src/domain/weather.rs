use crate::jma::models::{AreaCatalog, ForecastReport};

/// A forecast office from the JMA area catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub code: String,
    pub name: String,
}

/// Flatten the catalog's `offices` map into areas sorted by display name.
pub fn flatten_offices(catalog: &AreaCatalog) -> Vec<Area> {
    let mut areas: Vec<Area> = catalog
        .offices
        .iter()
        .map(|(code, info)| Area {
            code: code.clone(),
            name: info.name.clone().unwrap_or_default(),
        })
        .collect();

    areas.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
    areas
}

/// Case-insensitive substring filter on the area name. Blank query keeps all.
pub fn filter_areas<'a>(areas: &'a [Area], query: &str) -> Vec<&'a Area> {
    let q = query.trim().to_lowercase();
    areas
        .iter()
        .filter(|a| q.is_empty() || a.name.to_lowercase().contains(&q))
        .collect()
}

/// Map a Japanese weather description to a single symbol.
///
/// Checks run in a fixed order and the first hit wins, so "晴れ時々雨"
/// is sunny, not rainy.
pub fn weather_to_emoji(text: &str) -> &'static str {
    const RULES: &[(&[&str], &str)] = &[
        (&["晴"], "☀️"),
        (&["雨", "降"], "🌧️"),
        (&["雪"], "❄️"),
        (&["曇", "くも"], "☁️"),
        (&["雷", "かみなり"], "⚡️"),
    ];

    if text.is_empty() {
        return "❓";
    }
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| text.contains(n)))
        .map(|(_, emoji)| *emoji)
        .unwrap_or("🌈")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayForecast {
    pub date: String,
    pub weather: String,
    pub emoji: &'static str,
}

/// What the detail pane shows for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastView {
    pub title: String,
    pub subtitle: String,
    pub days: Vec<DayForecast>,
}

impl ForecastView {
    /// Header is always present; day rows only when the first time series
    /// carries dates and at least one area.
    pub fn from_report(report: &ForecastReport, display_name: &str) -> Self {
        let office = report.publishing_office.as_deref().unwrap_or("不明");
        let report_time = report.report_datetime.as_deref().unwrap_or("");

        let days = report
            .time_series
            .as_ref()
            .and_then(|ts| ts.first())
            .and_then(|weather_ts| {
                let area0 = weather_ts.areas.first()?;
                Some(
                    weather_ts
                        .time_defines
                        .iter()
                        .enumerate()
                        .map(|(i, date)| {
                            let weather = area0
                                .weathers
                                .get(i)
                                .cloned()
                                .unwrap_or_else(|| "-".to_string());
                            DayForecast {
                                date: date.clone(),
                                emoji: weather_to_emoji(&weather),
                                weather,
                            }
                        })
                        .collect(),
                )
            })
            .unwrap_or_default();

        Self {
            title: format!("{display_name} の予報"),
            subtitle: format!("発表: {office}  {report_time}"),
            days,
        }
    }
}
