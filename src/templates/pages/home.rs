// templates/pages/home.rs

use crate::templates::{card, desktop_layout, PageCtx};
use maud::{html, Markup};

const FEATURES: [(&str, &str); 3] = [
    ("home-feature-safe-title", "home-feature-safe-body"),
    ("home-feature-fast-title", "home-feature-fast-body"),
    ("home-feature-fair-title", "home-feature-fair-body"),
];

pub fn home_page(ctx: &PageCtx) -> Markup {
    let msgs = ctx.msgs;

    desktop_layout(
        ctx,
        &msgs.t("home-title"),
        html! {
            main class="container" {
                section class="hero" {
                    h1 { (msgs.t("home-hero-title")) }
                    p class="lead" { (msgs.t("home-hero-subtitle")) }
                    a href="/drive" class="btn" { (msgs.t("home-cta-drive")) }
                }

                section class="features" {
                    @for (title, body) in FEATURES {
                        (card(&msgs.t(title), html! { p { (msgs.t(body)) } }))
                    }
                }
            }
        },
    )
}
