pub mod html;
pub mod redirect;

use crate::errors::ServerError;
use astra::Response;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub use html::{css_response, html_response};
pub use redirect::{local_path_or_root, see_other};
