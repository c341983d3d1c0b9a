use super::common;
use crate::i18n::{ Catalog, I18n, Locale };

#[test]
fn test_missing_key_in_ru_uses_en_value() {
    common::setup();
    let ru: Catalog = [("nav.home", "Главная")].into_iter().collect();
    let i18n = I18n::new(Locale::Ru, Locale::En).with_catalog(Locale::Ru, ru);
    assert_eq!(i18n.t("nav.home"), "Главная");
    assert_eq!(i18n.t("theme.to_dark"), "Switch to dark mode");
}

#[test]
fn test_from_dir_overrides_only_present_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.json"), r#"{"nav": {"home": "Start"}}"#).unwrap();

    let i18n = I18n::from_dir(dir.path(), Locale::En, Locale::En).unwrap();
    assert_eq!(i18n.t("nav.home"), "Start");
    assert_eq!(i18n.t("theme.to_dark"), "theme.to_dark");

    let mut i18n = i18n;
    i18n.set_locale(Locale::Ru);
    assert_eq!(i18n.t("nav.home"), "Главная");
}

#[test]
fn test_from_dir_reports_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ru.json"), "[1, 2]").unwrap();
    assert!(I18n::from_dir(dir.path(), Locale::En, Locale::En).is_err());
}

#[test]
fn test_builtin_interpolation() {
    let i18n = I18n::default();
    assert_eq!(i18n.t_with("nav.language", &[("language", "English")]), "Language: English");
}
