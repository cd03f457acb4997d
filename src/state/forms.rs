use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::ValidationMode;
use crate::state::modal::ModalId;
use crate::state::records::{CallbackRequest, Registration, StoredRecord};
use crate::state::tasks::TaskKey;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

const MIN_TEXT_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    College,
    Course,
    Interest,
    Time,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::College => "College",
            Field::Course => "Course",
            Field::Interest => "Area of interest",
            Field::Time => "Preferred time",
        }
    }
}

/// A rule a submitted field broke. The message is shown to the visitor as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters long")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a valid phone number")]
    Phone,
    #[error("College name is required")]
    College,
    #[error("Please select your course")]
    Course,
    #[error("Please select your area of interest")]
    Interest,
    #[error("Please select preferred call time")]
    Time,
    #[error("{} is required", .0.label())]
    Missing(Field),
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// All messages in one block, one per line.
pub fn errors_message(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn long_enough(value: &str) -> bool {
    value.trim().chars().count() >= MIN_TEXT_LEN
}

/// Collects every broken rule instead of stopping at the first.
struct Checks {
    mode: ValidationMode,
    errors: Vec<FieldError>,
}

impl Checks {
    fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            errors: Vec::new(),
        }
    }

    fn check(&mut self, field: Field, value: &str, valid: impl Fn(&str) -> bool, error: FieldError) {
        match self.mode {
            ValidationMode::Strict if value.is_empty() || !valid(value) => self.errors.push(error),
            ValidationMode::PresenceOnly if value.trim().is_empty() => {
                self.errors.push(FieldError::Missing(field))
            }
            _ => {}
        }
    }

    fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn selected(value: &str) -> bool {
    !value.is_empty()
}

/// A form's field values plus everything the submit flow needs to know
/// about that form.
pub trait Draft: Clone + Default + 'static {
    type Record: StoredRecord;

    /// Dialog the form lives in, closed after a successful submit.
    const MODAL: ModalId;
    /// Purpose key of the delayed completion.
    const TASK: TaskKey;
    const SUCCESS: &'static str;

    fn validate(&self, mode: ValidationMode) -> Result<(), Vec<FieldError>>;
    fn into_record(self, now: DateTime<Utc>) -> Self::Record;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub course: String,
}

impl Draft for RegistrationDraft {
    type Record = Registration;

    const MODAL: ModalId = ModalId::Registration;
    const TASK: TaskKey = TaskKey::SubmitRegistration;
    const SUCCESS: &'static str = "Registration successful! We'll contact you soon.";

    fn validate(&self, mode: ValidationMode) -> Result<(), Vec<FieldError>> {
        let mut checks = Checks::new(mode);
        checks.check(Field::Name, &self.name, long_enough, FieldError::Name);
        checks.check(Field::Email, &self.email, is_valid_email, FieldError::Email);
        checks.check(Field::Phone, &self.phone, is_valid_phone, FieldError::Phone);
        checks.check(Field::College, &self.college, long_enough, FieldError::College);
        checks.check(Field::Course, &self.course, selected, FieldError::Course);
        checks.finish()
    }

    fn into_record(self, now: DateTime<Utc>) -> Registration {
        Registration::new(self, now)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackDraft {
    pub name: String,
    pub phone: String,
    pub interest: String,
    pub time: String,
}

impl Draft for CallbackDraft {
    type Record = CallbackRequest;

    const MODAL: ModalId = ModalId::Callback;
    const TASK: TaskKey = TaskKey::SubmitCallback;
    const SUCCESS: &'static str = "Callback requested! We'll call you within 24 hours.";

    fn validate(&self, mode: ValidationMode) -> Result<(), Vec<FieldError>> {
        let mut checks = Checks::new(mode);
        checks.check(Field::Name, &self.name, long_enough, FieldError::Name);
        checks.check(Field::Phone, &self.phone, is_valid_phone, FieldError::Phone);
        checks.check(Field::Interest, &self.interest, selected, FieldError::Interest);
        checks.check(Field::Time, &self.time, selected, FieldError::Time);
        checks.finish()
    }

    fn into_record(self, now: DateTime<Utc>) -> CallbackRequest {
        CallbackRequest::new(self, now)
    }
}
