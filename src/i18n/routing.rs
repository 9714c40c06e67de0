// src/i18n/routing.rs

/// Leading segments that are read as a locale hint. Matching ignores case;
/// resolution then compares the hint exactly, so `/EN/` is routed but not
/// honoured.
const HINT_SEGMENTS: &[&str] = &["me", "en", "sr", "tr", "cnr"];

/// Split an optional locale prefix off a request path.
///
/// `/tr/about` gives `(Some("tr"), "/about")` and `/tr` gives
/// `(Some("tr"), "/")`. Any other first segment is left in place so that
/// unknown pages such as `/faq` still 404.
pub fn split_locale_prefix(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, "/"),
    };

    if HINT_SEGMENTS
        .iter()
        .any(|code| code.eq_ignore_ascii_case(first))
    {
        (Some(first), rest)
    } else {
        (None, path)
    }
}
