use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.to_string())
        .body(Body::from(body))?;

    Ok(resp)
}

pub fn css_response(css: &'static str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.to_string())
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(css))?;

    Ok(resp)
}
