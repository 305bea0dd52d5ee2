pub mod container;
pub mod store;
pub mod toast;

pub use container::{AppContainer, AppState, RefreshOutcome, SyncOutcome, SyncReportPolicy};
pub use store::{LocalStore, PersistedState, AUTH_TOKEN_KEY, STATE_KEY, THEME_KEY};
pub use toast::{Toast, ToastQueue, ToastTone, TOAST_TTL};
