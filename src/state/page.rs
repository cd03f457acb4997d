use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::Features;
use crate::state::filter::{Category, FilterState};
use crate::state::modal::{ModalId, ModalState};
use crate::state::nav::NavState;
use crate::state::notification::{NotificationSlot, Severity};
use crate::state::scroll::HeaderLatch;

/// Everything the page shows that is not static content. Components render
/// from this; handlers only dispatch [`PageAction`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub nav: NavState,
    pub header: HeaderLatch,
    /// Last seen vertical offset, kept only while parallax is on.
    pub scroll_offset: f64,
    pub modal: ModalState,
    pub filter: FilterState,
    pub notification: NotificationSlot,
    track_offset: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
    OpenModal(ModalId),
    CloseModal(ModalId),
    CloseCurrentModal,
    SelectFilter(Category),
    EnterFilter,
    SettleFilter,
    Notify { message: String, severity: Severity },
    BeginNotificationExit(u64),
    DismissNotification(u64),
}

impl PageState {
    pub fn new<I, S>(features: &Features, card_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nav: NavState::default(),
            header: HeaderLatch::default(),
            scroll_offset: 0.0,
            modal: ModalState::default(),
            filter: FilterState::new(card_tags),
            notification: NotificationSlot::default(),
            track_offset: features.parallax,
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.modal.scroll_locked()
    }

    /// Applies `action`. Returns false when the state is unchanged.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::ToggleMenu => {
                self.nav.toggle();
                true
            }
            PageAction::CloseMenu => self.nav.close(),
            PageAction::Scrolled(offset) => {
                let crossed = self.header.observe(offset);
                if crossed {
                    debug!("header scrolled: {}", self.header.is_scrolled());
                }
                if self.track_offset && self.scroll_offset != offset {
                    self.scroll_offset = offset;
                    return true;
                }
                crossed
            }
            PageAction::OpenModal(id) => {
                if let Some(replaced) = self.modal.open(id) {
                    debug!("modal {:?} replaced {:?}", id, replaced);
                }
                true
            }
            PageAction::CloseModal(id) => self.modal.close(id),
            PageAction::CloseCurrentModal => self.modal.close_current().is_some(),
            PageAction::SelectFilter(category) => {
                debug!("filter -> {}", category.as_str());
                self.filter.select(category);
                true
            }
            PageAction::EnterFilter => self.filter.enter(),
            PageAction::SettleFilter => self.filter.settle(),
            PageAction::Notify { message, severity } => {
                self.notification.present(message, severity);
                true
            }
            PageAction::BeginNotificationExit(id) => self.notification.begin_exit(id),
            PageAction::DismissNotification(id) => self.notification.dismiss(id),
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter::CardPhase;

    fn page(features: Features) -> Rc<PageState> {
        Rc::new(PageState::new(&features, ["webdev", "electronics", "ai"]))
    }

    #[test]
    fn unchanged_state_keeps_same_rc() {
        let state = page(Features::basic());
        let next = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(PageAction::Scrolled(40.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn scroll_offset_tracked_only_with_parallax() {
        let basic = page(Features::basic()).reduce(PageAction::Scrolled(150.0));
        assert!(basic.header.is_scrolled());
        assert_eq!(basic.scroll_offset, 0.0);

        let enhanced = page(Features::enhanced()).reduce(PageAction::Scrolled(150.0));
        assert_eq!(enhanced.scroll_offset, 150.0);
        let again = enhanced.clone().reduce(PageAction::Scrolled(160.0));
        assert_eq!(again.scroll_offset, 160.0);
        assert!(again.header.is_scrolled());
    }

    #[test]
    fn modal_open_close_restores_scroll() {
        let state = page(Features::enhanced()).reduce(PageAction::OpenModal(ModalId::Callback));
        assert!(state.scroll_locked());
        let state = state.reduce(PageAction::CloseCurrentModal);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn notify_then_dismiss() {
        let state = page(Features::enhanced()).reduce(PageAction::Notify {
            message: "first".into(),
            severity: Severity::Info,
        });
        let state = state.reduce(PageAction::Notify {
            message: "second".into(),
            severity: Severity::Error,
        });
        let current = state.notification.current().unwrap().clone();
        assert_eq!(current.message, "second");
        let state = state.reduce(PageAction::DismissNotification(current.id));
        assert!(state.notification.current().is_none());
    }

    #[test]
    fn filter_select_and_settle() {
        let state = page(Features::enhanced())
            .reduce(PageAction::SelectFilter(Category::parse("electronics")));
        assert_eq!(state.filter.phase(0), CardPhase::Leaving);
        let state = state.reduce(PageAction::SettleFilter);
        assert_eq!(state.filter.phase(0), CardPhase::Hidden);
        assert_eq!(state.filter.phase(1), CardPhase::Shown);
    }

    #[test]
    fn filtered_out_cards_fade_back_in() {
        let state = page(Features::enhanced())
            .reduce(PageAction::SelectFilter(Category::parse("electronics")))
            .reduce(PageAction::SettleFilter)
            .reduce(PageAction::SelectFilter(Category::All));
        assert_eq!(state.filter.phase(0), CardPhase::Entering);
        let entered = state.clone().reduce(PageAction::EnterFilter);
        assert_eq!(entered.filter.phase(0), CardPhase::Shown);
        assert!(Rc::ptr_eq(&entered, &entered.clone().reduce(PageAction::EnterFilter)));
    }

    #[test]
    fn menu_toggle_and_close() {
        let state = page(Features::enhanced()).reduce(PageAction::ToggleMenu);
        assert!(state.nav.is_open());
        let state = state.reduce(PageAction::CloseMenu);
        assert!(!state.nav.is_open());
    }
}
