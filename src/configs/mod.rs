mod env_validate;

pub use env_validate::{ get_locale, I18nConfig, FALLBACK_LOCALE_VAR, LOCALES_DIR_VAR, LOCALE_VAR };
