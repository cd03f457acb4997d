/// Mobile menu visibility. The icon and the panel share this flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.class(), Some("active"));
        assert!(nav.close());
        assert!(!nav.close());
        assert_eq!(nav.class(), None);
    }
}
