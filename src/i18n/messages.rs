// src/i18n/messages.rs
use super::locale::{SupportedLocale, DEFAULT_LOCALE};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const EMBEDDED: [(SupportedLocale, &str); 4] = [
    (SupportedLocale::Me, include_str!("../../locales/me.ftl")),
    (SupportedLocale::En, include_str!("../../locales/en.ftl")),
    (SupportedLocale::Sr, include_str!("../../locales/sr.ftl")),
    (SupportedLocale::Tr, include_str!("../../locales/tr.ftl")),
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog {locale}: {code:?} is not a valid language identifier")]
    LanguageId { locale: SupportedLocale, code: String },
    #[error("catalog {locale}: ftl parse error: {errors}")]
    Parse { locale: SupportedLocale, errors: String },
    #[error("catalog {locale}: ftl add_resource error: {errors}")]
    AddResource { locale: SupportedLocale, errors: String },
}

/// One Fluent bundle per locale.
#[derive(Default)]
pub struct Catalogs {
    bundles: HashMap<SupportedLocale, FluentBundle<FluentResource>>,
}

impl Catalogs {
    /// Parse the catalogs compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut catalogs = Self::default();
        for (locale, ftl) in EMBEDDED {
            catalogs.load_from_str(locale, ftl)?;
        }
        Ok(catalogs)
    }

    pub fn load_from_str(&mut self, locale: SupportedLocale, ftl: &str) -> Result<(), CatalogError> {
        let langid: LanguageIdentifier =
            locale.as_str().parse().map_err(|_| CatalogError::LanguageId {
                locale,
                code: locale.as_str().to_string(),
            })?;

        let res = FluentResource::try_new(ftl.to_string()).map_err(|(_res, errs)| {
            CatalogError::Parse {
                locale,
                errors: format!("{errs:?}"),
            }
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Plain text output; no bidi isolation marks around placeables.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(res)
            .map_err(|errs| CatalogError::AddResource {
                locale,
                errors: format!("{errs:?}"),
            })?;

        self.bundles.insert(locale, bundle);
        Ok(())
    }

    /// Message for `id`, falling back to the default locale and finally to
    /// the id itself.
    pub fn translate(&self, locale: SupportedLocale, id: &str) -> String {
        self.format(locale, id)
            .or_else(|| self.format(DEFAULT_LOCALE, id))
            .unwrap_or_else(|| id.to_string())
    }

    fn format(&self, locale: SupportedLocale, id: &str) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let pattern = bundle.get_message(id)?.value()?;

        let mut errs = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errs).to_string();
        if !errs.is_empty() {
            tracing::warn!(%locale, message_id = id, errors = ?errs, "Fluent formatting errors");
        }
        Some(text)
    }
}

/// Messages bound to one resolved locale, handed to templates.
#[derive(Clone, Copy)]
pub struct Messages<'a> {
    pub locale: SupportedLocale,
    catalogs: &'a Catalogs,
}

impl<'a> Messages<'a> {
    pub fn new(catalogs: &'a Catalogs, locale: SupportedLocale) -> Self {
        Self { locale, catalogs }
    }

    pub fn t(&self, id: &str) -> String {
        self.catalogs.translate(self.locale, id)
    }
}
