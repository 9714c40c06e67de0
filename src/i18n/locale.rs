// src/i18n/locale.rs
use std::fmt;
use std::str::FromStr;

/// The closed set of languages the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLocale {
    /// Montenegrin
    Me,
    En,
    Sr,
    Tr,
}

pub const DEFAULT_LOCALE: SupportedLocale = SupportedLocale::Me;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnsupportedLocale(pub String);

impl SupportedLocale {
    /// Selector order.
    pub const ALL: [SupportedLocale; 4] = [
        SupportedLocale::Me,
        SupportedLocale::En,
        SupportedLocale::Sr,
        SupportedLocale::Tr,
    ];

    /// Exact, case-sensitive match against the four codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "me" => Some(Self::Me),
            "en" => Some(Self::En),
            "sr" => Some(Self::Sr),
            "tr" => Some(Self::Tr),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::En => "en",
            Self::Sr => "sr",
            Self::Tr => "tr",
        }
    }

    /// Name of the language in the language itself, as shown in the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Me => "Crnogorski",
            Self::En => "English",
            Self::Sr => "Српски",
            Self::Tr => "Türkçe",
        }
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedLocale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}
