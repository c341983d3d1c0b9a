use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum I18nError {
    IO(String),
    Parse(String),
    UnsupportedValue { key: String },
    UnknownLocale(String),
}

impl Display for I18nError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            I18nError::IO(msg) => write!(f, "I/O Error: {}", msg),
            I18nError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            I18nError::UnsupportedValue { key } => {
                write!(f, "Unsupported Value: message '{}' must be a string, number or boolean", key)
            }
            I18nError::UnknownLocale(code) => write!(f, "Unknown Locale: '{}'", code),
        }
    }
}

impl std::error::Error for I18nError {}

impl From<std::io::Error> for I18nError {
    fn from(error: std::io::Error) -> Self {
        I18nError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(error: serde_json::Error) -> Self {
        I18nError::Parse(error.to_string())
    }
}
