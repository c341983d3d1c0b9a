use dioxus::prelude::*;
use crate::hooks::{ use_i18n, use_theme };
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let mut i18n = use_i18n();

    let is_dark = theme.read().is_dark_mode();
    let i18n_ref = i18n.read();
    let language = i18n_ref.t(&format!("locale.{}", i18n_ref.locale().code()));
    let language_label = i18n_ref.t_with("nav.language", &[("language", language.as_str())]);
    let theme_label = if is_dark { i18n_ref.t("theme.to_light") } else { i18n_ref.t("theme.to_dark") };
    let home_label = i18n_ref.t("nav.home");
    drop(i18n_ref);

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                id: "navbar",
                Link { class: "nav-link", to: Route::Home, "{home_label}" }
                div {
                    class: "nav-actions",
                    button {
                        class: "nav-button",
                        onclick: move |_| i18n.write().toggle_locale(),
                        "{language_label}"
                    }
                    button {
                        class: "nav-button",
                        title: "{theme_label}",
                        onclick: move |_| theme.write().toggle_theme(),
                        if is_dark { "🌞" } else { "🌙" }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
