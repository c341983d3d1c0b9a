mod common;
mod i18n;
