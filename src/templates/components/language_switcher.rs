use crate::i18n::SupportedLocale;
use crate::templates::PageCtx;
use maud::{html, Markup};

/// The fixed four-entry language selector. Submitting posts to `/locale`,
/// which stores the choice and sends the browser back to this page.
pub fn language_switcher(ctx: &PageCtx) -> Markup {
    let current = ctx.msgs.locale;

    html! {
        form action="/locale" method="post" class="language-switcher" {
            input type="hidden" name="return_to" value=(ctx.page_path);
            label for="locale" { (ctx.msgs.t("language-label")) }
            select id="locale" name="locale" onchange="this.form.submit()" {
                @for locale in SupportedLocale::ALL {
                    option value=(locale.as_str()) selected[locale == current] {
                        (locale.native_name())
                    }
                }
            }
            noscript { button type="submit" { "OK" } }
        }
    }
}
