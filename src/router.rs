use crate::errors::ServerError;
use crate::i18n::{resolve_request, set_preference, split_locale_prefix, Messages, SupportedLocale};
use crate::responses::{css_response, html_response, local_path_or_root, see_other, ResultResp};
use crate::state::AppState;
use crate::templates::{pages, PageCtx};
use astra::{Request, ResponseBuilder};
use chrono::{Datelike, Utc};
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

const MAIN_CSS: &str = include_str!("../static/main.css");

// The selector form carries two short fields.
const MAX_FORM_BYTES: u64 = 4096;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let (hint, page_path) = split_locale_prefix(&path);

    match (method.as_str(), page_path) {
        ("POST", "/locale") => select_locale(&mut req),
        ("GET", "/" | "/about" | "/drive") => render_page(&req, state, hint, page_path),
        ("GET", "/static/main.css") if hint.is_none() => css_response(MAIN_CSS),
        (_, "/" | "/about" | "/drive" | "/locale") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn render_page(req: &Request, state: &AppState, hint: Option<&str>, page_path: &str) -> ResultResp {
    let locale = resolve_request(req.headers(), hint);

    let ctx = PageCtx {
        brand: &state.config.brand,
        msgs: Messages::new(&state.catalogs, locale),
        page_path,
        year: Utc::now().year(),
    };

    let markup = match page_path {
        "/about" => pages::about_page(&ctx),
        "/drive" => pages::drive_page(&ctx),
        _ => pages::home_page(&ctx),
    };

    html_response(markup)
}

/// Store the language picked in the selector, then send the browser back to
/// the page it came from so everything re-renders in the new language.
fn select_locale(req: &mut Request) -> ResultResp {
    let form = parse_form(req)?;

    let requested = form.get("locale").map(String::as_str).unwrap_or("");
    let locale: SupportedLocale = requested.parse().map_err(|e| {
        warn!(requested, "rejected language selection");
        ServerError::BadRequest(format!("{e}"))
    })?;

    let return_to = local_path_or_root(form.get("return_to").map(String::as_str));
    debug!(%locale, return_to, "storing language preference");

    let builder = set_preference(ResponseBuilder::new(), locale, Utc::now().timestamp());
    see_other(builder, return_to)
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}
