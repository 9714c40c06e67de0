// responses/redirect.rs
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// `303 See Other` to `location`. The builder may already carry headers
/// such as `Set-Cookie`.
pub fn see_other(builder: ResponseBuilder, location: &str) -> ResultResp {
    let resp = builder
        .status(303)
        .header("Location", location)
        .body(Body::empty())?;

    Ok(resp)
}

/// Only same-site absolute paths are followed; anything else goes home.
pub fn local_path_or_root(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.bytes().any(|b| b.is_ascii_control()) =>
        {
            path
        }
        _ => "/",
    }
}
