use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to its "scrolled" look past this vertical offset.
pub const SCROLL_THRESHOLD: f64 = 100.0;
/// Height of the fixed navbar, subtracted from in-page anchor targets.
pub const HEADER_OFFSET: f64 = 80.0;

pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const MODAL_FOCUS_DELAY_MS: u32 = 100;
pub const FILTER_HIDE_MS: u32 = 300;
/// Gap between a card re-entering layout and its fade-in starting.
pub const FILTER_ENTER_MS: u32 = 20;
pub const FILTER_STAGGER_MS: u32 = 50;
pub const EMPLOYER_FOLLOW_UP_MS: u32 = 1_500;
pub const CARD_FOLLOW_UP_MS: u32 = 1_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_SECS: f64 = 0.1;

pub const REGISTRATIONS_KEY: &str = "registrations";
pub const CALLBACKS_KEY: &str = "callbacks";
pub const LAST_REGISTRATION_KEY: &str = "lastRegistration";
pub const LAST_CALLBACK_KEY: &str = "lastCallback";

pub const CONTACT_PHONE: &str = "+919667964138";
pub const CONTACT_PHONE_DISPLAY: &str = "+91-9667964138";
pub const CONTACT_MESSAGE: &str =
    "Hi! I'm interested in Hackveda Intern Tracker. Can you provide more information?";

/// How submitted records are kept in local storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    /// Append to a JSON array under the collection key.
    History,
    /// Overwrite a single record under the per-form key.
    LatestOnly,
}

/// How strictly form fields are checked before submitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    Strict,
    PresenceOnly,
}

/// Behavior switches for the page. The full page and the reduced page are the
/// same components with different flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    pub toasts: bool,
    pub parallax: bool,
    pub reveal: bool,
    pub filters: bool,
    pub escape_closes_modal: bool,
    pub autofocus: bool,
    pub validation: ValidationMode,
    pub persistence: Persistence,
    /// Simulated request latency before a submission completes. Zero means
    /// the submission completes synchronously.
    pub submit_delay_ms: u32,
}

impl Features {
    pub const fn enhanced() -> Self {
        Self {
            toasts: true,
            parallax: true,
            reveal: true,
            filters: true,
            escape_closes_modal: true,
            autofocus: true,
            validation: ValidationMode::Strict,
            persistence: Persistence::History,
            submit_delay_ms: 2_000,
        }
    }

    pub const fn basic() -> Self {
        Self {
            toasts: false,
            parallax: false,
            reveal: false,
            filters: false,
            escape_closes_modal: false,
            autofocus: false,
            validation: ValidationMode::PresenceOnly,
            persistence: Persistence::LatestOnly,
            submit_delay_ms: 0,
        }
    }

    pub const fn current() -> Self {
        if cfg!(feature = "basic") {
            Self::basic()
        } else {
            Self::enhanced()
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::current()
    }
}
