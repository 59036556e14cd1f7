// templates/pages/weather.rs

use crate::domain::weather::{filter_areas, ForecastView};
use crate::templates::components::{card, error_banner};
use crate::templates::{desktop_layout, NavTab};
use crate::weather::AreaListState;
use maud::{html, Markup};

/// Right-hand pane of the weather page.
pub enum DetailPane {
    Placeholder,
    Forecast(ForecastView),
    Error(String),
}

pub struct WeatherVm<'a> {
    pub query: &'a str,
    pub selected_code: Option<&'a str>,
    pub areas: &'a AreaListState,
    pub detail: DetailPane,
    /// "最終取得: HH:MM:SS", empty until a forecast has been shown.
    pub last_update: String,
}

pub fn weather_page(vm: &WeatherVm) -> Markup {
    desktop_layout(
        "天気予報アプリ (気象庁 API)",
        NavTab::Weather,
        html! {
            div style="display: flex; align-items: center; gap: 1rem;" {
                h1 { "天気予報 (気象庁API)" }
                form action="/weather/refresh" method="post" {
                    button type="submit" title="地域リストを再取得" { "↻ 更新" }
                }
                span id="last-update" { (vm.last_update) }
            }

            div class="split" {
                div style="width: 360px;" {
                    form action="/weather" method="get" style="display: flex; gap: 6px;" {
                        input
                            type="search"
                            name="q"
                            value=(vm.query)
                            placeholder="検索（地域名でフィルタ）"
                            style="flex: 1; padding: 6px;";
                        @if let Some(code) = vm.selected_code {
                            input type="hidden" name="code" value=(code);
                        }
                        button type="submit" { "🔍" }
                    }
                    (area_list(vm))
                }

                div class="detail card" id="detail" {
                    (detail_pane(&vm.detail))
                }
            }
        },
    )
}

fn area_list(vm: &WeatherVm) -> Markup {
    html! {
        @match vm.areas {
            AreaListState::Idle | AreaListState::Loading => {
                // Reload until the background load lands.
                meta http-equiv="refresh" content="2";
                p class="status" { "読み込み中..." }
            }
            AreaListState::Failed(msg) => {
                p class="error" { (msg) }
            }
            AreaListState::Loaded(areas) => {
                ul class="area-list" id="areas" {
                    @for area in filter_areas(areas, vm.query) {
                        li.selected[vm.selected_code == Some(area.code.as_str())] {
                            a href=(area_href(&area.code, vm.query)) {
                                "📍 " strong { (area.name) }
                                br;
                                span class="area-code" { (area.code) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn detail_pane(detail: &DetailPane) -> Markup {
    match detail {
        DetailPane::Placeholder => html! { p { "地域を選択してください" } },
        DetailPane::Error(msg) => error_banner(msg),
        DetailPane::Forecast(view) => html! {
            (card(&view.title, html! {
                p class="area-code" { (view.subtitle) }
            }))
            @for day in &view.days {
                div class="day" {
                    span style="font-size: 12px; color: #333;" { (day.date) }
                    span class="emoji" { (day.emoji) }
                    span { (day.weather) }
                }
            }
        },
    }
}

fn area_href(code: &str, query: &str) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    qs.append_pair("code", code);
    if !query.trim().is_empty() {
        qs.append_pair("q", query);
    }
    format!("/weather?{}", qs.finish())
}
