mod catalog;
mod locale;

use std::collections::HashMap;
use std::path::Path;
use regex::{ Captures, Regex };
use crate::error::I18nError;

pub use catalog::Catalog;
pub use locale::Locale;

lazy_static::lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid");
}

/// Message lookup across an active and a fallback locale.
///
/// Resolution order for a key: active locale, fallback locale, then the key
/// itself.
#[derive(Clone, Debug, PartialEq)]
pub struct I18n {
    locale: Locale,
    fallback_locale: Locale,
    catalogs: HashMap<Locale, Catalog>,
}

impl I18n {
    pub fn new(locale: Locale, fallback_locale: Locale) -> Self {
        let catalogs = Locale::ALL
            .iter()
            .map(|&l| (l, Catalog::builtin(l).clone()))
            .collect();
        Self { locale, fallback_locale, catalogs }
    }

    /// Loads `<code>.json` for each locale from `dir`. Locales without a file
    /// keep the built-in table.
    pub fn from_dir(dir: &Path, locale: Locale, fallback_locale: Locale) -> Result<Self, I18nError> {
        let mut i18n = Self::new(locale, fallback_locale);
        for l in Locale::ALL {
            let path = dir.join(format!("{}.json", l.code()));
            if !path.exists() {
                log::debug!("No catalog at {}, using built-in '{}'", path.display(), l);
                continue;
            }
            let catalog = Catalog::from_path(&path)?;
            log::info!("Loaded {} messages for '{}' from {}", catalog.len(), l, path.display());
            i18n.catalogs.insert(l, catalog);
        }
        Ok(i18n)
    }

    pub fn with_catalog(mut self, locale: Locale, catalog: Catalog) -> Self {
        self.catalogs.insert(locale, catalog);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn fallback_locale(&self) -> Locale {
        self.fallback_locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        log::info!("Switching locale {} -> {}", self.locale, locale);
        self.locale = locale;
    }

    pub fn toggle_locale(&mut self) {
        self.set_locale(self.locale.next());
    }

    pub fn t(&self, key: &str) -> String {
        self.lookup(key).to_string()
    }

    /// Like [`I18n::t`], substituting `{name}` placeholders from `args`.
    /// Placeholders without a matching arg are left as written.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.lookup(key);
        PLACEHOLDER.replace_all(template, |caps: &Captures| {
            args.iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        }).into_owned()
    }

    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(message) = self.message(self.locale, key) {
            return message;
        }
        if let Some(message) = self.message(self.fallback_locale, key) {
            log::debug!("'{}' missing in '{}', using '{}'", key, self.locale, self.fallback_locale);
            return message;
        }
        log::debug!("'{}' missing in all locales", key);
        key
    }

    fn message(&self, locale: Locale, key: &str) -> Option<&str> {
        self.catalogs.get(&locale).and_then(|c| c.get(key))
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::En, Locale::En)
    }
}
