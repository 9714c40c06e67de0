use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn home_defaults_to_montenegrin() {
    let state = test_state();

    let resp = handle(get("/", &[]), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"<html lang="me">"#));
    assert!(body.contains("Vaša vožnja za par minuta"));
}

#[test]
fn accept_language_picks_first_supported_entry() {
    let state = test_state();

    let req = get("/", &[("Accept-Language", "de-DE,en-US;q=0.9,tr;q=0.8")]);
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains("Your ride, in minutes"));
}

#[test]
fn locale_prefix_selects_language_and_page() {
    let state = test_state();

    let req = get("/tr/about", &[("Accept-Language", "en")]);
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"<html lang="tr">"#));
    assert!(body.contains("Şehirler ve sahil için"));
}

#[test]
fn uppercase_prefix_is_not_a_supported_hint() {
    let state = test_state();

    let req = get("/EN/drive", &[("Accept-Language", "sr-RS")]);
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains(r#"<html lang="sr">"#));
    assert!(body.contains("Постани возач"));
}

#[test]
fn stored_preference_beats_prefix_and_header() {
    let state = test_state();

    let req = get(
        "/en/",
        &[("Cookie", "session=abc; NEXT_LOCALE=sr"), ("Accept-Language", "tr-TR")],
    );
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains(r#"<html lang="sr">"#));
}

#[test]
fn unsupported_everywhere_falls_back_to_default() {
    let state = test_state();

    let req = get(
        "/EN/",
        &[("Cookie", "NEXT_LOCALE=yy"), ("Accept-Language", "de-DE,fr;q=0.8")],
    );
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains(r#"<html lang="me">"#));
}

#[test]
fn selector_lists_four_languages_and_marks_current() {
    let state = test_state();

    let body = body_string(handle(get("/sr/about", &[]), &state).unwrap());

    assert!(body.contains(r#"action="/locale""#));
    assert!(body.contains(r#"name="return_to" value="/about""#));
    assert_eq!(body.matches("<option ").count(), 4);
    for name in ["Crnogorski", "English", "Српски", "Türkçe"] {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(body.contains(r#"<option value="sr" selected>"#));
}

#[test]
fn unknown_page_is_not_found() {
    let state = test_state();

    let result = handle(get("/pricing", &[]), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));

    let result = handle(get("/en/pricing", &[]), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn short_unknown_segments_are_not_found() {
    let state = test_state();

    for path in ["/faq", "/api", "/app", "/xx", "/xx/about", "/de/"] {
        let result = handle(get(path, &[]), &state);
        assert!(
            matches!(result, Err(ServerError::NotFound)),
            "{path} should be NotFound"
        );
    }
}

#[test]
fn locale_endpoint_rejects_get() {
    let state = test_state();

    let result = handle(get("/locale", &[]), &state);
    assert!(matches!(result, Err(ServerError::MethodNotAllowed)));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();

    let resp = handle(get("/static/main.css", &[]), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".language-switcher"));
}
