use dioxus::prelude::*;
use crate::utils::ThemeState;

/// Creates the page's single theme holder and shares it with descendants.
/// The body class is synced as soon as the holder exists.
pub fn use_theme_provider() -> Signal<ThemeState> {
    use_context_provider(|| Signal::new(ThemeState::default()))
}

pub fn use_theme() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}
