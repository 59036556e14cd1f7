use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
header { display: flex; align-items: center; gap: 2rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 4px #0002; }
header nav a { margin-right: 1rem; text-decoration: none; color: #475569; }
header nav a.active { color: #0d9488; font-weight: bold; }
main { padding: 20px; max-width: 1000px; }
.card { border: 1px solid #ccc; border-radius: 10px; padding: 10px; margin-bottom: 10px; }
.status { color: grey; }
.status.error { color: red; }
.scroll { height: 500px; overflow-y: auto; border: 1px solid #999; border-radius: 10px; padding: 10px; }
table { border-collapse: collapse; width: 100%; }
th { background: #eceff1; }
th, td { border: 1px solid grey; padding: 4px 8px; font-size: 12px; }
td.price { color: blue; text-align: right; }
td.num { text-align: right; }
.split { display: flex; gap: 1rem; justify-content: space-between; }
.area-list { width: 360px; height: 600px; overflow-y: auto; list-style: none; padding: 0; margin: 0; }
.area-list li a { display: block; padding: 6px; border-radius: 6px; text-decoration: none; color: inherit; }
.area-list li.selected a { background: #e8f2ff; }
.area-code { font-size: 12px; color: #666; }
.detail { flex: 1; }
.day { display: flex; justify-content: space-between; padding: 6px; border-bottom: 1px solid #ddd; }
.emoji { font-size: 20px; }
.error { color: red; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Listings,
    Weather,
}

pub fn desktop_layout(title: &str, active: NavTab, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "木更津ダッシュボード" }
                    nav {
                        a.active[active == NavTab::Listings] href="/" { "賃貸検索" }
                        a.active[active == NavTab::Weather] href="/weather" { "天気予報" }
                    }
                }
                main { (content) }
            }
        }
    }
}
