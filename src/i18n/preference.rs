// src/i18n/preference.rs
use super::locale::SupportedLocale;
use astra::ResponseBuilder;
use chrono::{DateTime, Utc};
use http::header::{COOKIE, SET_COOKIE};
use http::HeaderMap;

pub const COOKIE_NAME: &str = "NEXT_LOCALE";
pub const MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365; // 1 year

/// Build the `Set-Cookie` value that stores `locale` as the user's choice.
///
/// `now` is a unix timestamp; it only feeds the `Expires` attribute, which
/// mirrors `Max-Age` for older user agents.
pub fn preference_cookie(locale: SupportedLocale, now: i64) -> String {
    let expires = DateTime::<Utc>::from_timestamp(now + MAX_AGE_SECS, 0)
        .map(|at| format!("; Expires={}", at.format("%a, %d %b %Y %H:%M:%S GMT")))
        .unwrap_or_default();

    format!("{COOKIE_NAME}={locale}; Path=/; Max-Age={MAX_AGE_SECS}{expires}; SameSite=Lax")
}

/// Record the user's language choice on the outgoing response.
///
/// Callers only pass locales picked from the selector, so nothing is
/// re-validated here.
pub fn set_preference(
    builder: ResponseBuilder,
    locale: SupportedLocale,
    now: i64,
) -> ResponseBuilder {
    builder.header(SET_COOKIE, preference_cookie(locale, now))
}

/// Raw preference token from the request, if any. The value is not checked
/// against the supported set; resolution does that.
pub fn read_preference(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| parse_cookie(header, COOKIE_NAME))
        .map(str::to_string)
}

/// Find `name=value` in a `Cookie` header string.
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.trim() == name {
            Some(value.trim())
        } else {
            None
        }
    })
}
