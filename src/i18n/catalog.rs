use std::collections::HashMap;
use std::path::Path;
use serde_json::Value;
use crate::error::I18nError;
use super::Locale;

const EN_JSON: &str = include_str!("../../locales/en.json");
const RU_JSON: &str = include_str!("../../locales/ru.json");

lazy_static::lazy_static! {
    static ref EMBEDDED_EN: Catalog = Catalog::embedded(Locale::En, EN_JSON);
    static ref EMBEDDED_RU: Catalog = Catalog::embedded(Locale::Ru, RU_JSON);
}

/// Message table for one locale, keyed by dotted path (`nav.home`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Table compiled into the binary from `locales/<code>.json`.
    pub fn builtin(locale: Locale) -> &'static Catalog {
        match locale {
            Locale::En => &EMBEDDED_EN,
            Locale::Ru => &EMBEDDED_RU,
        }
    }

    pub fn from_json(source: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    pub fn from_path(path: &Path) -> Result<Self, I18nError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn from_value(value: &Value) -> Result<Self, I18nError> {
        let Value::Object(root) = value else {
            return Err(I18nError::Parse("catalog root must be a JSON object".to_string()));
        };
        let mut messages = HashMap::new();
        for (key, child) in root {
            flatten(key.clone(), child, &mut messages)?;
        }
        Ok(Self { messages })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn embedded(locale: Locale, source: &str) -> Self {
        Self::from_json(source).unwrap_or_else(|e| {
            log::error!("Embedded '{}' catalog is invalid: {}", locale, e);
            Self::default()
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn flatten(prefix: String, value: &Value, out: &mut HashMap<String, String>) -> Result<(), I18nError> {
    match value {
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten(format!("{}.{}", prefix, key), child, out)?;
            }
        }
        Value::Null | Value::Array(_) => {
            return Err(I18nError::UnsupportedValue { key: prefix });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_objects_flatten_to_dotted_keys() {
        let catalog = Catalog::from_json(r#"{"nav": {"menu": {"open": "Open"}}, "count": 3}"#).unwrap();
        assert_eq!(catalog.get("nav.menu.open"), Some("Open"));
        assert_eq!(catalog.get("count"), Some("3"));
        assert_eq!(catalog.get("nav.menu"), None);
    }

    #[test]
    fn test_arrays_are_rejected_with_key() {
        let err = Catalog::from_json(r#"{"nav": {"items": ["a"]}}"#).unwrap_err();
        match err {
            I18nError::UnsupportedValue { key } => assert_eq!(key, "nav.items"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        assert!(matches!(Catalog::from_json("\"hello\""), Err(I18nError::Parse(_))));
    }

    #[test]
    fn test_builtin_catalogs_share_keys() {
        let en = Catalog::builtin(Locale::En);
        let ru = Catalog::builtin(Locale::Ru);
        assert!(!en.is_empty());
        assert_eq!(en.len(), ru.len());
        assert_eq!(en.get("nav.home"), Some("Home"));
        assert_eq!(ru.get("nav.home"), Some("Главная"));
    }
}
