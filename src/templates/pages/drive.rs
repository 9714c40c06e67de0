use crate::templates::{card, desktop_layout, PageCtx};
use maud::{html, Markup};

pub fn drive_page(ctx: &PageCtx) -> Markup {
    let msgs = ctx.msgs;

    desktop_layout(
        ctx,
        &msgs.t("drive-title"),
        html! {
            main class="container" {
                h1 { (msgs.t("drive-title")) }
                p class="lead" { (msgs.t("drive-intro")) }

                (card(&msgs.t("drive-requirements"), html! {
                    ul {
                        li { (msgs.t("drive-req-license")) }
                        li { (msgs.t("drive-req-vehicle")) }
                        li { (msgs.t("drive-req-age")) }
                    }
                }))

                (card(&msgs.t("drive-steps"), html! {
                    ol {
                        li { (msgs.t("drive-step-apply")) }
                        li { (msgs.t("drive-step-review")) }
                        li { (msgs.t("drive-step-start")) }
                    }
                }))
            }
        },
    )
}
