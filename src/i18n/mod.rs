pub mod accept_language;
pub mod locale;
pub mod messages;
pub mod preference;
pub mod request;
pub mod resolver;
pub mod routing;

pub use locale::SupportedLocale;
pub use messages::{CatalogError, Catalogs, Messages};
pub use preference::set_preference;
pub use request::resolve_request;
pub use routing::split_locale_prefix;
