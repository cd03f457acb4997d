use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use yew::prelude::*;

use crate::config::Features;
use crate::state::modal::ModalId;
use crate::state::notification::Severity;
use crate::state::page::{PageAction, PageState};
use crate::state::tasks::{TaskKey, TaskRegistry};

pub type Tasks = Rc<RefCell<TaskRegistry<Timeout>>>;

/// Shared page controller: state, the active feature set and pending timers.
#[derive(Clone)]
pub struct PageHandle {
    pub state: UseReducerHandle<PageState>,
    pub features: Features,
    pub tasks: Tasks,
}

impl PartialEq for PageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.features == other.features
            && Rc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl PageHandle {
    pub fn dispatch(&self, action: PageAction) {
        self.state.dispatch(action);
    }

    /// Shows a toast, or a blocking alert when toasts are off.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        if self.features.toasts {
            self.dispatch(PageAction::Notify { message, severity });
        } else if let Some(window) = web_sys::window() {
            if window.alert_with_message(&message).is_err() {
                warn!("alert blocked: {}", message);
            }
        }
    }

    /// Dispatches state actions. Notifications go through [`Self::notify`]
    /// so they fall back to alerts when toasts are off.
    pub fn apply(&self, actions: Vec<PageAction>) {
        for action in actions {
            match action {
                PageAction::Notify { message, severity } => self.notify(message, severity),
                action => self.dispatch(action),
            }
        }
    }

    pub fn open_modal(&self, id: ModalId) {
        info!("Opening {}", id.dom_id());
        self.dispatch(PageAction::OpenModal(id));
    }

    pub fn close_modal(&self, id: ModalId) {
        self.dispatch(PageAction::CloseModal(id));
    }

    /// Runs `task` after `millis`, replacing any pending task with the same key.
    pub fn schedule(&self, key: TaskKey, millis: u32, task: impl FnOnce() + 'static) {
        schedule(&self.tasks, key, millis, task);
    }

    pub fn cancel(&self, key: TaskKey) {
        if self.tasks.borrow_mut().cancel(key) {
            debug!("cancelled {:?}", key);
        }
    }
}

pub fn schedule(tasks: &Tasks, key: TaskKey, millis: u32, task: impl FnOnce() + 'static) {
    let registry = tasks.clone();
    let timeout = Timeout::new(millis, move || {
        // The running closure must not be dropped from inside itself.
        if let Some(done) = registry.borrow_mut().finish(key) {
            done.forget();
        }
        task();
    });
    if tasks.borrow_mut().insert(key, timeout) {
        debug!("rescheduled {:?}", key);
    }
}

#[hook]
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>().expect("PageHandle context is provided by App")
}
