use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };

    render_error(status, &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; "
                    "margin: 4rem auto; padding: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.to_string())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
