//! Application state container.
//!
//! Single source of truth for session-scoped state: profile, diary
//! draft, server snapshots, flags, theme, and toasts. Views (the CLI
//! commands) call mutation operations here; the container persists the
//! local subset, talks to the API, and converts every API failure into
//! a toast plus a structured outcome. No API error ever escapes a
//! public operation as an `Err`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use uuid::Uuid;

use super::store::{LocalStore, PersistedState, AUTH_TOKEN_KEY, STATE_KEY, THEME_KEY};
use super::toast::{Toast, ToastQueue, ToastTone};
use crate::api::{ApiError, DiaryPayload, NutritionApi};
use crate::models::{Dashboard, DiaryDraft, NutritionPlan, Profile, ProfilePatch};
use crate::theme::{ColorScheme, ThemeEngine, ThemeMode, ThemeTokens};

/// Whether `sync_diary` reports the inner dashboard refresh as part of
/// its own outcome toast, or leaves the two steps independently
/// reported. `independent` matches the historical behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncReportPolicy {
    #[default]
    Independent,
    Combined,
}

impl fmt::Display for SyncReportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncReportPolicy::Independent => write!(f, "independent"),
            SyncReportPolicy::Combined => write!(f, "combined"),
        }
    }
}

impl FromStr for SyncReportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "independent" => Ok(SyncReportPolicy::Independent),
            "combined" => Ok(SyncReportPolicy::Combined),
            _ => Err(format!(
                "Invalid sync report policy '{}'. Valid options: independent, combined",
                s
            )),
        }
    }
}

/// Structured result of a dashboard refresh.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// Both snapshots replaced.
    Completed,
    /// A newer refresh superseded this one; nothing was committed.
    Stale,
    /// No user name set; nothing was attempted.
    Skipped,
    Failed(ApiError),
}

impl RefreshOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RefreshOutcome::Completed)
    }
}

/// Structured result of a diary sync.
#[derive(Debug)]
pub enum SyncOutcome {
    /// No user name set; nothing was attempted.
    Skipped,
    /// The diary submission itself failed; entries are kept.
    Failed(ApiError),
    /// Entries were submitted and cleared. The nested outcome reports
    /// the follow-up dashboard refresh, which may have failed on its
    /// own.
    Synced {
        entries_sent: usize,
        refresh: RefreshOutcome,
    },
}

/// Session-scoped UI state owned by the container.
#[derive(Debug, Default)]
pub struct AppState {
    pub profile: Profile,
    pub diary: DiaryDraft,
    pub dashboard: Option<Dashboard>,
    pub plan: Option<NutritionPlan>,
    pub loading: bool,
    pub syncing: bool,
}

pub struct AppContainer<A> {
    api: A,
    store: LocalStore,
    state: AppState,
    theme: ThemeEngine,
    toasts: ToastQueue,
    sync_report: SyncReportPolicy,
    /// Monotonic fence: only the most recently started refresh may
    /// commit its snapshots.
    refresh_seq: u64,
}

impl<A: NutritionApi> AppContainer<A> {
    pub fn new(
        api: A,
        store: LocalStore,
        os_preference: ColorScheme,
        sync_report: SyncReportPolicy,
    ) -> Self {
        let mode = store
            .get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self {
            api,
            store,
            state: AppState::default(),
            theme: ThemeEngine::new(mode, os_preference),
            toasts: ToastQueue::new(),
            sync_report,
            refresh_seq: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.theme
    }

    /// Active toasts; anything past its deadline is dropped first.
    pub fn toasts(&mut self) -> &[Toast] {
        self.toasts.prune(Instant::now());
        self.toasts.active()
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.prune(Instant::now());
        self.toasts.drain()
    }

    /// Merges recovered fields from storage into current state. Server
    /// snapshots are untouched: they are excluded from persistence, so
    /// hydration can never replace them with stale values. A corrupt
    /// blob is logged and ignored.
    pub fn hydrate(&mut self) {
        let Some(raw) = self.store.get(STATE_KEY) else {
            return;
        };
        match serde_json::from_str::<PersistedState>(raw) {
            Ok(persisted) => {
                self.state.profile = persisted.profile;
                self.state.diary = persisted.diary;
                self.theme.set_mode(persisted.theme);
            }
            Err(e) => {
                tracing::warn!("Failed to hydrate persisted state: {}", e);
            }
        }
        // The standalone theme key wins over the blob when both exist.
        if let Some(mode) = self.store.get(THEME_KEY).and_then(|raw| raw.parse().ok()) {
            self.theme.set_mode(mode);
        }
    }

    /// Shallow-merges profile fields and persists immediately. Local
    /// only; no API call.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.state.profile.apply(patch);
        self.persist();
    }

    pub fn update_diary_draft(&mut self, text: impl Into<String>) {
        self.state.diary.set_draft(text);
        self.persist();
    }

    /// No-op when the trimmed text is empty.
    pub fn add_diary_entry(&mut self, text: &str) -> bool {
        let added = self.state.diary.add_entry(text);
        if added {
            self.persist();
        }
        added
    }

    /// No-op when the index is out of range.
    pub fn remove_diary_entry(&mut self, index: usize) -> bool {
        let removed = self.state.diary.remove_entry(index);
        if removed {
            self.persist();
        }
        removed
    }

    /// Applies the preference and persists the chosen mode (not the
    /// derived scheme) both standalone and inside the state blob.
    pub fn set_theme(&mut self, mode: ThemeMode) -> &'static ThemeTokens {
        let tokens = self.theme.set_mode(mode);
        if let Err(e) = self.store.set(THEME_KEY, mode.to_string()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
        self.persist();
        tokens
    }

    pub fn cycle_theme(&mut self) -> ThemeMode {
        let next = self.theme.mode().cycled();
        self.set_theme(next);
        next
    }

    pub fn push_toast(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        tone: ToastTone,
    ) -> Uuid {
        self.toasts.push(title, description, tone)
    }

    /// Bearer token management against the fixed storage key.
    pub fn auth_token(&self) -> Option<&str> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    pub fn set_auth_token(&mut self, token: &str) {
        if let Err(e) = self.store.set(AUTH_TOKEN_KEY, token) {
            tracing::warn!("Failed to store auth token: {}", e);
        }
    }

    pub fn clear_auth_token(&mut self) {
        if let Err(e) = self.store.remove(AUTH_TOKEN_KEY) {
            tracing::warn!("Failed to remove auth token: {}", e);
        }
    }

    /// Recalculates the plan from the current profile, then fetches the
    /// dashboard snapshot. The two calls are sequential by design; both
    /// snapshots are replaced together only after both complete, and
    /// only if no newer refresh started in the meantime.
    pub async fn refresh_dashboard(&mut self) -> RefreshOutcome {
        if !self.state.profile.has_user() {
            self.toasts.push(
                "Defina um usuário",
                Some("Informe um nome antes de atualizar o dashboard.".to_string()),
                ToastTone::Warning,
            );
            return RefreshOutcome::Skipped;
        }

        let token = self.begin_refresh();
        let profile = self.state.profile.clone();

        let plan = match self.api.upsert_plan(&profile).await {
            Ok(plan) => plan,
            Err(e) => return self.fail_refresh(token, e),
        };
        let dashboard = match self.api.fetch_dashboard(&profile.name).await {
            Ok(dashboard) => dashboard,
            Err(e) => return self.fail_refresh(token, e),
        };

        if !self.commit_refresh(token, plan, dashboard) {
            return RefreshOutcome::Stale;
        }
        self.toasts.push(
            "Plano recalibrado",
            Some("Dados combinados com a última versão do dashboard.".to_string()),
            ToastTone::Success,
        );
        RefreshOutcome::Completed
    }

    /// Submits all buffered diary entries, then refreshes the dashboard
    /// and clears the local entries. The refresh failure is observable
    /// in the returned outcome; whether it also surfaces in the sync
    /// toast depends on the configured report policy.
    pub async fn sync_diary(&mut self) -> SyncOutcome {
        if !self.state.profile.has_user() {
            self.toasts.push(
                "Defina um usuário",
                Some("Informe um nome antes de sincronizar o diário.".to_string()),
                ToastTone::Warning,
            );
            return SyncOutcome::Skipped;
        }

        let payload = DiaryPayload {
            user: self.state.profile.name.clone(),
            entries: self.state.diary.entries.clone(),
        };
        let entries_sent = payload.entries.len();
        self.state.syncing = true;

        match self.api.sync_diary(&payload).await {
            Ok(_log) => {
                let refresh = self.refresh_dashboard().await;
                self.state.diary.clear_entries();
                self.state.syncing = false;
                self.persist();
                self.report_sync(entries_sent, &refresh);
                SyncOutcome::Synced {
                    entries_sent,
                    refresh,
                }
            }
            Err(e) => {
                self.state.syncing = false;
                self.toasts.push(
                    "Erro ao sincronizar diário",
                    Some(e.to_string()),
                    ToastTone::Error,
                );
                SyncOutcome::Failed(e)
            }
        }
    }

    fn report_sync(&mut self, entries_sent: usize, refresh: &RefreshOutcome) {
        match (self.sync_report, refresh) {
            (SyncReportPolicy::Combined, RefreshOutcome::Failed(e)) => {
                self.toasts.push(
                    "Diário enviado, dashboard desatualizado",
                    Some(format!(
                        "{} entrada(s) enviada(s), mas o dashboard não foi atualizado: {}",
                        entries_sent, e
                    )),
                    ToastTone::Warning,
                );
            }
            _ => {
                self.toasts.push(
                    "Diário sincronizado",
                    Some(format!("{} entrada(s) enviada(s).", entries_sent)),
                    ToastTone::Success,
                );
            }
        }
    }

    fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.state.loading = true;
        self.refresh_seq
    }

    /// Commits snapshots only when `token` is still the newest refresh;
    /// a stale response is discarded and must not touch the loading
    /// flag, which now belongs to the newer request.
    fn commit_refresh(&mut self, token: u64, plan: NutritionPlan, dashboard: Dashboard) -> bool {
        if token != self.refresh_seq {
            tracing::debug!("Discarding stale refresh response (token {})", token);
            return false;
        }
        self.state.plan = Some(plan);
        self.state.dashboard = Some(dashboard);
        self.state.loading = false;
        true
    }

    fn fail_refresh(&mut self, token: u64, error: ApiError) -> RefreshOutcome {
        if token == self.refresh_seq {
            self.state.loading = false;
            self.toasts.push(
                "Não foi possível atualizar",
                Some(error.to_string()),
                ToastTone::Error,
            );
        }
        RefreshOutcome::Failed(error)
    }

    fn persist(&mut self) {
        let persisted = PersistedState {
            profile: self.state.profile.clone(),
            diary: self.state.diary.clone(),
            theme: self.theme.mode(),
        };
        let json = match serde_json::to_string(&persisted) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize state: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(STATE_KEY, json) {
            tracing::warn!("Failed to persist state: {}", e);
        }
    }
}
