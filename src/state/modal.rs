#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    Registration,
    Callback,
}

impl ModalId {
    pub fn dom_id(self) -> &'static str {
        match self {
            ModalId::Registration => "studentModal",
            ModalId::Callback => "callbackModal",
        }
    }
}

/// At most one dialog is open. Opening another replaces it, and the body
/// scroll lock is derived from "something is open", so it can never be left
/// set by a replaced dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<ModalId>,
}

impl ModalState {
    #[cfg(test)]
    pub fn current(&self) -> Option<ModalId> {
        self.open
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open == Some(id)
    }

    pub fn scroll_locked(&self) -> bool {
        self.open.is_some()
    }

    /// Opens `id`, returning the dialog it replaced, if any.
    pub fn open(&mut self, id: ModalId) -> Option<ModalId> {
        self.open.replace(id).filter(|previous| *previous != id)
    }

    /// Closes `id` if it is the open dialog.
    pub fn close(&mut self, id: ModalId) -> bool {
        if self.is_open(id) {
            self.open = None;
            true
        } else {
            false
        }
    }

    pub fn close_current(&mut self) -> Option<ModalId> {
        self.open.take()
    }
}

/// A backdrop click lands on the dialog container itself, not on anything
/// inside it.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, container: Option<&T>) -> bool {
    matches!((target, container), (Some(target), Some(container)) if target == container)
}

pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        "auto"
    }
}
