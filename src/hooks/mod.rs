mod use_i18n;
mod use_theme;

pub use use_i18n::{ use_i18n, use_i18n_provider };
pub use use_theme::{ use_theme, use_theme_provider };
