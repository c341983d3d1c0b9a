use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use crate::utils::RenderTarget;

/// In-memory stand-in for the document body.
#[derive(Default)]
pub struct MockBody {
    classes: RefCell<BTreeSet<String>>,
    writes: RefCell<usize>,
}

impl MockBody {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl RenderTarget for MockBody {
    fn add_class(&self, class: &str) {
        *self.writes.borrow_mut() += 1;
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        *self.writes.borrow_mut() += 1;
        self.classes.borrow_mut().remove(class);
    }
}
