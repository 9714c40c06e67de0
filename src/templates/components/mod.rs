use maud::{html, Markup};

pub mod error;
pub mod language_switcher;

pub use error::html_error_response;
pub use language_switcher::language_switcher;

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
