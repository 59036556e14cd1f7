use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn status_line(message: &str, is_error: bool) -> Markup {
    html! {
        p.status.error[is_error] #status { (message) }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="card" {
            p class="error" { "エラー: " (message) }
        }
    }
}
