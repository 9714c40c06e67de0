use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

pub fn about_page(ctx: &PageCtx) -> Markup {
    let msgs = ctx.msgs;

    desktop_layout(
        ctx,
        &msgs.t("about-title"),
        html! {
            main class="container narrow" {
                h1 { (msgs.t("about-title")) }
                p class="lead" { (msgs.t("about-body")) }
                p { (msgs.t("about-mission")) }
            }
        },
    )
}
