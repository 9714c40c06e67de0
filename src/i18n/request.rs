// src/i18n/request.rs
use super::preference::read_preference;
use super::resolver::resolve;
use super::SupportedLocale;
use http::header::ACCEPT_LANGUAGE;
use http::HeaderMap;

/// Gather the three resolution inputs from request headers plus the routing
/// hint, then resolve. Headers that cannot be read as text count as absent.
pub fn resolve_request(headers: &HeaderMap, hint: Option<&str>) -> SupportedLocale {
    let token = read_preference(headers);
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    resolve(token.as_deref(), hint, accept_language)
}
