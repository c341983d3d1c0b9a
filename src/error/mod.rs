mod i18n;

pub use i18n::I18nError;
