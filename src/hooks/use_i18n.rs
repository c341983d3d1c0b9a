use dioxus::prelude::*;
use crate::configs::I18nConfig;
use crate::i18n::I18n;

/// Builds the message tables on first render and shares them with
/// descendants. `config` is only called once.
pub fn use_i18n_provider(config: impl FnOnce() -> I18nConfig) -> Signal<I18n> {
    use_context_provider(move || {
        let i18n = config().build();
        log::info!("i18n ready: locale '{}', fallback '{}'", i18n.locale(), i18n.fallback_locale());
        Signal::new(i18n)
    })
}

pub fn use_i18n() -> Signal<I18n> {
    use_context::<Signal<I18n>>()
}
