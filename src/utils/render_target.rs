/// Surface whose CSS classes reflect UI state.
///
/// Both operations are idempotent: adding a present class or removing an
/// absent one is a no-op.
pub trait RenderTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// The document `<body>` of the page or webview hosting the app.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentBody;

#[cfg(target_arch = "wasm32")]
impl DocumentBody {
    fn class_list(&self) -> Option<web_sys::DomTokenList> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.class_list())
    }

    fn apply(&self, class: &str, add: bool) {
        let Some(list) = self.class_list() else {
            log::warn!("document body unavailable, skipping class '{}'", class);
            return;
        };
        let result = if add { list.add_1(class) } else { list.remove_1(class) };
        if let Err(e) = result {
            log::warn!("Failed to update body class '{}': {:?}", class, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::document;

#[cfg(not(target_arch = "wasm32"))]
impl DocumentBody {
    fn apply(&self, class: &str, add: bool) {
        let op = if add { "add" } else { "remove" };
        let script = format!(
            "document.body && document.body.classList.{}({})",
            op,
            serde_json::Value::from(class)
        );
        log::debug!("eval: {}", script);
        let _ = document::eval(&script);
    }
}

impl RenderTarget for DocumentBody {
    fn add_class(&self, class: &str) {
        self.apply(class, true);
    }

    fn remove_class(&self, class: &str) {
        self.apply(class, false);
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for std::rc::Rc<T> {
    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }
}
