#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{
    Persistence, CALLBACKS_KEY, LAST_CALLBACK_KEY, LAST_REGISTRATION_KEY, REGISTRATIONS_KEY,
};
use crate::error::SiteError;
use crate::state::forms::{CallbackDraft, RegistrationDraft};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub course: String,
    pub id: i64,
    pub timestamp: String,
}

impl Registration {
    pub fn new(draft: RegistrationDraft, now: DateTime<Utc>) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            college: draft.college,
            course: draft.course,
            id: record_id(now),
            timestamp: record_timestamp(now),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub name: String,
    pub phone: String,
    pub interest: String,
    pub time: String,
    pub id: i64,
    pub timestamp: String,
}

impl CallbackRequest {
    pub fn new(draft: CallbackDraft, now: DateTime<Utc>) -> Self {
        Self {
            name: draft.name,
            phone: draft.phone,
            interest: draft.interest,
            time: draft.time,
            id: record_id(now),
            timestamp: record_timestamp(now),
        }
    }
}

/// Milliseconds since the epoch. Two submissions within the same millisecond
/// share an id.
pub fn record_id(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}

pub fn record_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A record kind and the keys it is stored under.
pub trait StoredRecord: Serialize + DeserializeOwned {
    const COLLECTION_KEY: &'static str;
    const LATEST_KEY: &'static str;
}

impl StoredRecord for Registration {
    const COLLECTION_KEY: &'static str = REGISTRATIONS_KEY;
    const LATEST_KEY: &'static str = LAST_REGISTRATION_KEY;
}

impl StoredRecord for CallbackRequest {
    const COLLECTION_KEY: &'static str = CALLBACKS_KEY;
    const LATEST_KEY: &'static str = LAST_CALLBACK_KEY;
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// The browser's `localStorage`.
pub struct BrowserStorage(web_sys::Storage);

impl BrowserStorage {
    pub fn local() -> Result<Self, SiteError> {
        web_sys::window()
            .ok_or(SiteError::StorageUnavailable)?
            .local_storage()
            .map_err(|_| SiteError::StorageUnavailable)?
            .map(Self)
            .ok_or(SiteError::StorageUnavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.0.get_item(key).map_err(|_| SiteError::Storage {
            op: "read",
            key: key.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.0.set_item(key, value).map_err(|_| SiteError::Storage {
            op: "write",
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Writes submitted records. Collections are append-only; nothing here
/// updates or deletes an existing entry.
pub struct RecordStore<S> {
    store: S,
    persistence: Persistence,
}

impl RecordStore<BrowserStorage> {
    pub fn browser(persistence: Persistence) -> Result<Self, SiteError> {
        Ok(Self::new(BrowserStorage::local()?, persistence))
    }
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S, persistence: Persistence) -> Self {
        Self { store, persistence }
    }

    pub fn save<R: StoredRecord>(&self, record: &R) -> Result<(), SiteError> {
        match self.persistence {
            Persistence::History => self.append(record),
            Persistence::LatestOnly => self.replace(record),
        }
    }

    pub fn append<R: StoredRecord>(&self, record: &R) -> Result<(), SiteError> {
        // Existing entries are kept as raw JSON so they are written back untouched.
        let mut entries: Vec<Value> = match self.store.get_item(R::COLLECTION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        entries.push(serde_json::to_value(record)?);
        self.store
            .set_item(R::COLLECTION_KEY, &serde_json::to_string(&entries)?)?;
        debug!("appended record #{} to `{}`", entries.len(), R::COLLECTION_KEY);
        Ok(())
    }

    pub fn replace<R: StoredRecord>(&self, record: &R) -> Result<(), SiteError> {
        self.store
            .set_item(R::LATEST_KEY, &serde_json::to_string(record)?)?;
        debug!("stored latest record under `{}`", R::LATEST_KEY);
        Ok(())
    }

    #[cfg(test)]
    pub fn load<R: StoredRecord>(&self) -> Result<Vec<R>, SiteError> {
        match self.store.get_item(R::COLLECTION_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn latest<R: StoredRecord>(&self) -> Result<Option<R>, SiteError> {
        self.store
            .get_item(R::LATEST_KEY)?
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(SiteError::from)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::state::forms::Draft;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn registration(name: &str) -> RegistrationDraft {
        RegistrationDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "9876543210".to_string(),
            college: "NIT Trichy".to_string(),
            course: "ai".to_string(),
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

    #[test]
    fn id_and_timestamp_come_from_clock() {
        let record = callback_example().into_record(at(1_700_000_000_123));
        assert_eq!(record.id, 1_700_000_000_123);
        assert_eq!(record.timestamp, "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn callback_record_uses_form_field_names() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        store.save(&callback_example().into_record(at(42))).unwrap();

        let raw = store.store().get_item(CALLBACKS_KEY).unwrap().unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "Jo");
        assert_eq!(value[0]["phone"], "98765-43210");
        assert_eq!(value[0]["interest"], "webdev");
        assert_eq!(value[0]["time"], "evening");
        assert_eq!(value[0]["id"], 42);
    }

    #[test]
    fn history_appends_without_touching_prior_entries() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        // An older entry with a shape this code never writes must survive as is.
        store
            .store()
            .set_item(REGISTRATIONS_KEY, r#"[{"legacy":true,"id":1}]"#)
            .unwrap();

        store.save(&registration("Asha").into_record(at(10))).unwrap();
        store.save(&registration("Ravi").into_record(at(20))).unwrap();

        let raw = store.store().get_item(REGISTRATIONS_KEY).unwrap().unwrap();
        let entries: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], serde_json::json!({"legacy": true, "id": 1}));
        assert_eq!(entries[1]["name"], "Asha");
        assert_eq!(entries[2]["name"], "Ravi");
    }

    #[test]
    fn collections_are_separate() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        store.save(&registration("Asha").into_record(at(10))).unwrap();
        store.save(&callback_example().into_record(at(11))).unwrap();
        assert_eq!(store.load::<Registration>().unwrap().len(), 1);
        assert_eq!(store.load::<CallbackRequest>().unwrap().len(), 1);
    }

    #[test]
    fn latest_only_overwrites() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::LatestOnly);
        store.save(&registration("Asha").into_record(at(10))).unwrap();
        store.save(&registration("Ravi").into_record(at(20))).unwrap();

        let latest: Registration = store.latest().unwrap().unwrap();
        assert_eq!(latest.name, "Ravi");
        assert!(store.load::<Registration>().unwrap().is_empty());
    }

    #[test]
    fn corrupt_collection_is_an_error_and_left_alone() {
        let store = RecordStore::new(MemoryStore::default(), Persistence::History);
        store.store().set_item(CALLBACKS_KEY, "not json").unwrap();
        let result = store.save(&callback_example().into_record(at(1)));
        assert!(matches!(result, Err(SiteError::Json(_))));
        assert_eq!(
            store.store().get_item(CALLBACKS_KEY).unwrap().as_deref(),
            Some("not json")
        );
    }
}
