use maud::{html, Markup, DOCTYPE};

/// Bare error page; does not use the app layout so it renders even when
/// the failure came from layout data.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style { "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; } p { color: #444; }" }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}
