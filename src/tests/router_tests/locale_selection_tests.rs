use crate::errors::ServerError;
use crate::i18n::SupportedLocale;
use crate::router::handle;
use crate::tests::utils::{body_string, cookie_pair, get, post_locale, test_state};

#[test]
fn selecting_a_language_sets_cookie_and_redirects_back() {
    let state = test_state();

    let resp = handle(post_locale("locale=tr&return_to=%2Fdrive"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/drive"
    );

    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("NEXT_LOCALE=tr;"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=31536000"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[test]
fn off_site_return_target_goes_home() {
    let state = test_state();

    let resp = handle(
        post_locale("locale=en&return_to=https%3A%2F%2Fevil.example"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let resp = handle(post_locale("locale=en"), &state).unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
}

#[test]
fn control_characters_in_return_target_go_home() {
    let state = test_state();

    for form in [
        "locale=en&return_to=%2F%09%2Fevil.example",
        "locale=en&return_to=%2F%0D%0AX",
        "locale=en&return_to=%2Fabout%00",
    ] {
        let resp = handle(post_locale(form), &state).expect("Handler failed");
        assert_eq!(resp.status(), 303, "{form}");
        assert_eq!(resp.headers().get("Location").unwrap(), "/", "{form}");
        assert_eq!(cookie_pair(&resp).as_deref(), Some("NEXT_LOCALE=en"));
    }
}

#[test]
fn form_body_is_read_only_up_to_a_limit() {
    let state = test_state();

    let form = format!("pad={}&locale=tr", "a".repeat(8192));
    let result = handle(post_locale(&form), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let resp = handle(post_locale("locale=tr&pad=aaaa"), &state).unwrap();
    assert_eq!(resp.status(), 303);
}

#[test]
fn unsupported_selection_is_rejected_without_cookie() {
    let state = test_state();

    for form in ["locale=xx", "locale=EN", "locale=cnr", "return_to=%2F", ""] {
        match handle(post_locale(form), &state) {
            Err(ServerError::BadRequest(_)) => {}
            Err(other) => panic!("{form:?}: expected BadRequest, got {other:?}"),
            Ok(resp) => panic!("{form:?}: expected BadRequest, got {}", resp.status()),
        }
    }
}

#[test]
fn selecting_the_same_language_twice_keeps_it() {
    let state = test_state();

    let first = handle(post_locale("locale=tr&return_to=%2F"), &state).unwrap();
    let first_cookie = cookie_pair(&first).unwrap();

    let second = handle(post_locale("locale=tr&return_to=%2F"), &state).unwrap();
    let second_cookie = cookie_pair(&second).unwrap();

    assert_eq!(first_cookie, "NEXT_LOCALE=tr");
    assert_eq!(second_cookie, first_cookie);
    assert_eq!(second.headers().get_all("Set-Cookie").iter().count(), 1);
}

#[test]
fn stored_choice_wins_on_every_later_request() {
    let state = test_state();
    let hints = ["/", "/me/", "/en/about", "/sr/drive", "/tr/", "/EN/"];
    let headers = ["", "en-US,en;q=0.9", "cnr-ME", "tr;q=0.5,en;q=0.9", "de-DE"];

    for locale in SupportedLocale::ALL {
        let form = format!("locale={locale}&return_to=%2F");
        let resp = handle(post_locale(&form), &state).unwrap();
        let cookie = cookie_pair(&resp).unwrap();

        for path in hints {
            for accept in headers {
                let req = get(path, &[("Cookie", cookie.as_str()), ("Accept-Language", accept)]);
                let body = body_string(handle(req, &state).unwrap());
                assert!(
                    body.contains(&format!(r#"<html lang="{locale}">"#)),
                    "{locale} lost on {path} with {accept:?}"
                );
            }
        }
    }
}

#[test]
fn changing_the_choice_replaces_it() {
    let state = test_state();

    let resp = handle(post_locale("locale=en&return_to=%2Fabout"), &state).unwrap();
    let cookie = cookie_pair(&resp).unwrap();
    let body = body_string(handle(get("/about", &[("Cookie", cookie.as_str())]), &state).unwrap());
    assert!(body.contains("About us"));

    let resp = handle(post_locale("locale=me&return_to=%2Fabout"), &state).unwrap();
    let cookie = cookie_pair(&resp).unwrap();
    let body = body_string(handle(get("/about", &[("Cookie", cookie.as_str())]), &state).unwrap());
    assert!(body.contains("O nama"));
}
