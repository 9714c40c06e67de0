// src/state.rs
use crate::config::AppConfig;
use crate::i18n::{CatalogError, Catalogs};

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub config: AppConfig,
    pub catalogs: Catalogs,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            config,
            catalogs: Catalogs::embedded()?,
        })
    }
}
