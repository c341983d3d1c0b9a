use dioxus::prelude::*;
use crate::hooks::{ use_i18n, use_theme };

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let i18n = use_i18n();

    let theme_key = if theme.read().is_dark_mode() { "home.dark" } else { "home.light" };
    let (welcome, description, current_theme) = {
        let i18n = i18n.read();
        let title = i18n.t("app.title");
        let theme_name = i18n.t(theme_key);
        (
            i18n.t_with("home.welcome", &[("title", title.as_str())]),
            i18n.t("home.description"),
            i18n.t_with("home.current_theme", &[("theme", theme_name.as_str())]),
        )
    };

    rsx! {
        div {
            class: "page",
            h1 { "{welcome}" }
            p { class: "muted", "{description}" }
            p { "{current_theme}" }
        }
    }
}
