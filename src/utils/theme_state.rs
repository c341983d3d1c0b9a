use super::render_target::{ DocumentBody, RenderTarget };

pub const DARK_CLASS: &str = "dark";

/// Dark/light preference bound to a render target.
///
/// The target carries [`DARK_CLASS`] iff `is_dark_mode()` is true. The class
/// is synced once on construction and inline after every toggle.
#[derive(Debug)]
pub struct ThemeState<R: RenderTarget = DocumentBody> {
    is_dark: bool,
    target: R,
}

impl<R: RenderTarget> ThemeState<R> {
    pub fn new(target: R) -> Self {
        let state = Self { is_dark: false, target };
        state.sync();
        state
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark = !self.is_dark;
        log::debug!("Theme toggled, dark mode: {}", self.is_dark);
        self.sync();
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    fn sync(&self) {
        if self.is_dark {
            self.target.add_class(DARK_CLASS);
        } else {
            self.target.remove_class(DARK_CLASS);
        }
    }
}

impl Default for ThemeState<DocumentBody> {
    fn default() -> Self {
        Self::new(DocumentBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Calls(RefCell<Vec<(bool, String)>>);

    impl RenderTarget for Calls {
        fn add_class(&self, class: &str) {
            self.0.borrow_mut().push((true, class.to_string()));
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().push((false, class.to_string()));
        }
    }

    #[test]
    fn test_construction_syncs_once_eagerly() {
        let theme = ThemeState::new(Calls::default());
        assert!(!theme.is_dark_mode());
        assert_eq!(*theme.target().0.borrow(), vec![(false, "dark".to_string())]);
    }

    #[test]
    fn test_each_toggle_syncs_exactly_once() {
        let mut theme = ThemeState::new(Calls::default());
        theme.toggle_theme();
        theme.toggle_theme();
        let calls = theme.target().0.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1], (true, "dark".to_string()));
        assert_eq!(calls[2], (false, "dark".to_string()));
    }
}
