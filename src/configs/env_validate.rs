use std::path::PathBuf;
use crate::i18n::{ I18n, Locale };

pub const LOCALE_VAR: &str = "APP_LOCALE";
pub const FALLBACK_LOCALE_VAR: &str = "APP_FALLBACK_LOCALE";
pub const LOCALES_DIR_VAR: &str = "APP_LOCALES_DIR";

#[derive(Clone, Debug, PartialEq)]
pub struct I18nConfig {
    pub locale: Locale,
    pub fallback_locale: Locale,
    pub locales_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            fallback_locale: Locale::En,
            locales_dir: None,
        }
    }
}

impl I18nConfig {
    pub fn from_env() -> Self {
        Self {
            locale: get_locale(LOCALE_VAR),
            fallback_locale: get_locale(FALLBACK_LOCALE_VAR),
            locales_dir: std::env::var_os(LOCALES_DIR_VAR).map(PathBuf::from),
        }
    }

    /// Builds the message tables, preferring `locales_dir` when set. A broken
    /// override directory is logged and the built-in tables are used instead.
    pub fn build(&self) -> I18n {
        let Some(dir) = &self.locales_dir else {
            return I18n::new(self.locale, self.fallback_locale);
        };
        I18n::from_dir(dir, self.locale, self.fallback_locale).unwrap_or_else(|e| {
            log::error!("Failed to load catalogs from {}: {}", dir.display(), e);
            I18n::new(self.locale, self.fallback_locale)
        })
    }
}

pub fn get_locale(var: &str) -> Locale {
    match std::env::var(var) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("{} is invalid ({}), using '{}'", var, e, Locale::En);
            Locale::En
        }),
        Err(_) => Locale::En,
    }
}
