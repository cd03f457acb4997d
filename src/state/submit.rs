//! What a form submission does to the page, decided without a document.
//! The form component validates with [`check`], shows its busy label, and
//! later applies the actions returned by [`finish`].

use chrono::{DateTime, Utc};
use log::{debug, error, info};

use crate::config::ValidationMode;
use crate::error::SiteError;
use crate::state::forms::{errors_message, Draft};
use crate::state::modal::ModalId;
use crate::state::notification::Severity;
use crate::state::page::PageAction;
use crate::state::records::{KeyValueStore, RecordStore};

pub const SAVE_FAILED: &str = "We couldn't save your details. Please try again.";

/// Outcome of completing a submission.
#[derive(Debug, PartialEq)]
pub struct Finished {
    pub actions: Vec<PageAction>,
    /// The record was stored; the form should be reset.
    pub saved: bool,
}

impl Finished {
    /// Storage failed: the dialog and its values stay put for a retry.
    pub fn failed(modal: ModalId, err: &SiteError) -> Self {
        error!("saving {} failed: {}", modal.dom_id(), err);
        Self {
            actions: vec![PageAction::Notify {
                message: SAVE_FAILED.to_string(),
                severity: Severity::Error,
            }],
            saved: false,
        }
    }
}

/// Rejects the draft with one notification listing every broken rule.
pub fn check<D: Draft>(draft: &D, mode: ValidationMode) -> Result<(), PageAction> {
    draft.validate(mode).map_err(|errors| {
        debug!("{} rejected: {:?}", D::MODAL.dom_id(), errors);
        PageAction::Notify {
            message: errors_message(&errors),
            severity: Severity::Error,
        }
    })
}

/// Stores the record and, if that worked, closes the dialog and confirms.
pub fn finish<D, S>(draft: D, store: &RecordStore<S>, now: DateTime<Utc>) -> Finished
where
    D: Draft,
    S: KeyValueStore,
{
    match store.save(&draft.into_record(now)) {
        Ok(()) => {
            info!("{} submitted", D::MODAL.dom_id());
            Finished {
                actions: vec![
                    PageAction::CloseModal(D::MODAL),
                    PageAction::Notify {
                        message: D::SUCCESS.to_string(),
                        severity: Severity::Success,
                    },
                ],
                saved: true,
            }
        }
        Err(err) => Finished::failed(D::MODAL, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    use crate::config::{Features, Persistence, CALLBACKS_KEY, LAST_CALLBACK_KEY, REGISTRATIONS_KEY};
    use crate::state::forms::{CallbackDraft, RegistrationDraft};
    use crate::state::page::PageState;
    use crate::state::records::MemoryStore;

    fn page_with(modal: ModalId) -> PageState {
        let mut page = PageState::new(&Features::enhanced(), ["webdev"]);
        page.apply(PageAction::OpenModal(modal));
        page
    }

    /// Runs the whole submit the way the form does, minus the delay.
    fn submit<D: Draft>(page: &mut PageState, store: &RecordStore<MemoryStore>, draft: D) -> bool {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        match check(&draft, ValidationMode::Strict) {
            Err(rejection) => {
                page.apply(rejection);
                false
            }
            Ok(()) => {
                let finished = finish(draft, store, now);
                for action in finished.actions {
                    page.apply(action);
                }
                finished.saved
            }
        }
    }

    fn callback_example() -> CallbackDraft {
        CallbackDraft {
            name: "Jo".to_string(),
            phone: "98765-43210".to_string(),
            interest: "webdev".to_string(),
            time: "evening".to_string(),
        }
    }

    fn stored(store: &RecordStore<MemoryStore>, key: &str) -> Vec<Value> {
        store
            .store()
            .get_item(key)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
            .unwrap_or_default()
    }

    #[test]
    fn callback_example_end_to_end() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        store
            .store()
            .set_item(CALLBACKS_KEY, r#"[{"name":"Earlier","id":7}]"#)
            .unwrap();
        let mut page = page_with(ModalId::Callback);

        assert!(submit(&mut page, &store, callback_example()));

        let entries = stored(&store, CALLBACKS_KEY);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], serde_json::json!({"name": "Earlier", "id": 7}));
        assert_eq!(entries[1]["name"], "Jo");
        assert_eq!(entries[1]["phone"], "98765-43210");
        assert_eq!(entries[1]["interest"], "webdev");
        assert_eq!(entries[1]["time"], "evening");
        assert_eq!(entries[1]["id"], 1_700_000_000_000i64);

        assert!(!page.modal.is_open(ModalId::Callback));
        assert!(!page.scroll_locked());
        let notification = page.notification.current().unwrap();
        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(notification.message, "Callback requested! We'll call you within 24 hours.");
    }

    #[test]
    fn invalid_submit_stores_nothing_and_lists_every_error() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        let mut page = page_with(ModalId::Registration);
        let draft = RegistrationDraft {
            name: "A".to_string(),
            email: "a@b".to_string(),
            ..Default::default()
        };

        assert!(!submit(&mut page, &store, draft));

        assert!(stored(&store, REGISTRATIONS_KEY).is_empty());
        assert!(page.modal.is_open(ModalId::Registration));
        let notification = page.notification.current().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message.lines().count(), 5);
        assert!(notification.message.contains("Please enter a valid email address"));
    }

    #[test]
    fn storage_failure_keeps_dialog_open() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        store.store().set_item(CALLBACKS_KEY, "{broken").unwrap();
        let mut page = page_with(ModalId::Callback);

        assert!(!submit(&mut page, &store, callback_example()));

        assert!(page.modal.is_open(ModalId::Callback));
        assert!(page.scroll_locked());
        let notification = page.notification.current().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, SAVE_FAILED);
        assert_eq!(store.store().get_item(CALLBACKS_KEY).unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn unavailable_storage_reports_failure() {
        let finished = Finished::failed(ModalId::Registration, &SiteError::StorageUnavailable);
        assert!(!finished.saved);
        assert_eq!(
            finished.actions,
            vec![PageAction::Notify {
                message: SAVE_FAILED.to_string(),
                severity: Severity::Error,
            }]
        );
    }

    #[test]
    fn latest_only_overwrites_single_record() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::LatestOnly);
        let mut page = page_with(ModalId::Callback);
        assert!(submit(&mut page, &store, callback_example()));
        let second = CallbackDraft {
            name: "Sam".to_string(),
            ..callback_example()
        };
        page.apply(PageAction::OpenModal(ModalId::Callback));
        assert!(submit(&mut page, &store, second));

        let raw = store.store().get_item(LAST_CALLBACK_KEY).unwrap().unwrap();
        let latest: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(latest["name"], "Sam");
        assert!(stored(&store, CALLBACKS_KEY).is_empty());
    }
}
