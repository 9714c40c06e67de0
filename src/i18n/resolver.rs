// src/i18n/resolver.rs
use super::accept_language::detect_from_header;
use super::locale::{SupportedLocale, DEFAULT_LOCALE};
use tracing::debug;

/// Which step of the precedence chain produced the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocaleSource {
    Preference,
    RouteHint,
    AcceptLanguage,
    Default,
}

/// Resolve the locale for one request.
///
/// Precedence, first match wins:
/// 1. the stored preference token, if it names a supported locale
/// 2. the routing-layer hint, if it names a supported locale
/// 3. the first supported language listed in `Accept-Language`
/// 4. [`DEFAULT_LOCALE`]
///
/// Unsupported or missing inputs only disqualify their own step.
pub fn resolve(
    token: Option<&str>,
    hint: Option<&str>,
    accept_language: Option<&str>,
) -> SupportedLocale {
    let (locale, source) = resolve_with_source(token, hint, accept_language);
    debug!(%locale, ?source, ?hint, "resolved locale");
    locale
}

fn resolve_with_source(
    token: Option<&str>,
    hint: Option<&str>,
    accept_language: Option<&str>,
) -> (SupportedLocale, LocaleSource) {
    if let Some(locale) = token.and_then(SupportedLocale::from_code) {
        return (locale, LocaleSource::Preference);
    }

    if let Some(locale) = hint.and_then(SupportedLocale::from_code) {
        return (locale, LocaleSource::RouteHint);
    }

    if let Some(locale) = accept_language.and_then(detect_from_header) {
        return (locale, LocaleSource::AcceptLanguage);
    }

    (DEFAULT_LOCALE, LocaleSource::Default)
}
