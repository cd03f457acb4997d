use std::collections::HashMap;

/// What a deferred callback is for. One pending task per purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKey {
    SubmitRegistration,
    SubmitCallback,
    NotificationExit,
    NotificationRemove,
    ModalFocus,
    FilterEnter,
    FilterSettle,
    FollowUp,
}

/// Pending deferred callbacks keyed by purpose. Handles cancel on drop (as
/// `gloo_timers::callback::Timeout` does), so replacing or removing an entry
/// cancels it.
#[derive(Debug)]
pub struct TaskRegistry<H> {
    pending: HashMap<TaskKey, H>,
}

impl<H> Default for TaskRegistry<H> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<H> TaskRegistry<H> {
    /// Registers `handle` under `key`. Returns true if an earlier task was
    /// cancelled to make room.
    pub fn insert(&mut self, key: TaskKey, handle: H) -> bool {
        self.pending.insert(key, handle).is_some()
    }

    pub fn cancel(&mut self, key: TaskKey) -> bool {
        self.pending.remove(&key).is_some()
    }

    /// Takes the handle of a task whose callback is running, without
    /// cancelling it.
    pub fn finish(&mut self, key: TaskKey) -> Option<H> {
        self.pending.remove(&key)
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.contains_key(&key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a timer handle that records whether it was cancelled.
    struct FakeTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    fn timer() -> (FakeTimer, Rc<Cell<bool>>) {
        let cancelled = Rc::new(Cell::new(false));
        (
            FakeTimer {
                cancelled: cancelled.clone(),
            },
            cancelled,
        )
    }

    #[test]
    fn rescheduling_cancels_previous_task() {
        let mut tasks = TaskRegistry::default();
        let (first, first_cancelled) = timer();
        let (second, second_cancelled) = timer();
        assert!(!tasks.insert(TaskKey::NotificationExit, first));
        assert!(tasks.insert(TaskKey::NotificationExit, second));
        assert!(first_cancelled.get());
        assert!(!second_cancelled.get());
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn cancel_all_clears_every_purpose() {
        let mut tasks = TaskRegistry::default();
        let (a, a_cancelled) = timer();
        let (b, b_cancelled) = timer();
        tasks.insert(TaskKey::SubmitRegistration, a);
        tasks.insert(TaskKey::FilterSettle, b);
        assert_eq!(tasks.cancel_all(), 2);
        assert!(a_cancelled.get() && b_cancelled.get());
        assert!(tasks.is_empty());
    }

    #[test]
    fn finish_hands_back_handle() {
        let mut tasks = TaskRegistry::default();
        let (handle, cancelled) = timer();
        tasks.insert(TaskKey::ModalFocus, handle);
        let taken = tasks.finish(TaskKey::ModalFocus);
        assert!(taken.is_some());
        assert!(!cancelled.get());
        assert!(!tasks.is_pending(TaskKey::ModalFocus));
        assert!(!tasks.cancel(TaskKey::ModalFocus));
        std::mem::forget(taken);
    }
}
