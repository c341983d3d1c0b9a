use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };
use crate::error::I18nError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Cycles to the next supported locale.
    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::Ru,
            Locale::Ru => Locale::En,
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Accepts `ru`, `RU`, `ru-RU` and `ru_RU` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(I18nError::UnknownLocale(s.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
