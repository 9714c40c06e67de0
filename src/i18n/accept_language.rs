// src/i18n/accept_language.rs
use super::locale::SupportedLocale;

/// Split an `Accept-Language` value into base language codes.
///
/// Weights are dropped and the listed order is kept as-is, so
/// `"tr;q=0.5,en;q=0.9"` yields `["tr", "en"]`. Entries that are empty after
/// trimming are skipped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    header
        .split(',')
        .filter_map(|entry| {
            let tag = entry.split(';').next().unwrap_or("").trim().to_lowercase();
            let base = tag.split('-').next().unwrap_or("").trim();
            if base.is_empty() {
                None
            } else {
                Some(base.to_string())
            }
        })
        .collect()
}

/// Maps a base language code from the header onto the site's locales.
/// `cnr` is the ISO 639-3 code for Montenegrin.
pub fn map_language(code: &str) -> Option<SupportedLocale> {
    match code {
        "me" | "cnr" => Some(SupportedLocale::Me),
        "sr" => Some(SupportedLocale::Sr),
        "en" => Some(SupportedLocale::En),
        "tr" => Some(SupportedLocale::Tr),
        _ => None,
    }
}

/// First supported language in header order, if any.
pub fn detect_from_header(header: &str) -> Option<SupportedLocale> {
    parse_accept_language(header)
        .iter()
        .find_map(|code| map_language(code))
}
