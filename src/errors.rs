// errors.rs
use thiserror::Error;

/// Errors a request handler can end in. Each maps to one status code in
/// `templates::components::error`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed => 405,
            ServerError::InternalError => 500,
        }
    }
}

impl From<http::Error> for ServerError {
    fn from(_: http::Error) -> Self {
        ServerError::InternalError
    }
}
