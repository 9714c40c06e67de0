use crate::templates::{language_switcher, PageCtx};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(ctx: &PageCtx, title: &str, content: Markup) -> Markup {
    let msgs = ctx.msgs;

    html! {
        (DOCTYPE)
        html lang=(msgs.locale.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(msgs.t("meta-description"));
                title { (title) " | " (ctx.brand) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { (ctx.brand) }
                    nav {
                        ul {
                            li { a href="/" { (msgs.t("nav-home")) } }
                            li { a href="/about" { (msgs.t("nav-about")) } }
                            li { a href="/drive" { (msgs.t("nav-drive")) } }
                        }
                    }
                    (language_switcher(ctx))
                }

                (content)

                footer class="px-6 py-4" {
                    small { "© " (ctx.year) " " (ctx.brand) ". " (msgs.t("footer-rights")) }
                }
            }
        }
    }
}
