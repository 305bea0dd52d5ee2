//! Typed client for the remote nutrition API.
//!
//! Every operation takes a typed payload, serializes to JSON, attaches
//! a bearer token when one is available, and makes exactly one attempt:
//! no retry, no timeout, no backoff. Failures are classified by status
//! code and carry the server-supplied detail message.

pub mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Dashboard, NutritionPlan, Profile};

/// Errors raised by API operations.
///
/// The taxonomy is deliberately message-based: 401 and 403 get distinct
/// prefixes so the user can tell an expired session from a permissions
/// problem, everything else carries the extracted server detail.
#[derive(Debug)]
pub enum ApiError {
    /// Network or connection failure before a status was received.
    Transport(String),
    /// HTTP 401.
    SessionExpired(String),
    /// HTTP 403.
    AccessDenied(String),
    /// Any other non-2xx status.
    Server { status: u16, detail: String },
    /// 2xx response whose body failed to parse.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Erro ao comunicar com a API: {}", e),
            ApiError::SessionExpired(detail) => {
                write!(f, "Sessão inválida ou expirada: {}", detail)
            }
            ApiError::AccessDenied(detail) => write!(f, "Acesso negado: {}", detail),
            ApiError::Server { detail, .. } => write!(f, "{}", detail),
            ApiError::Decode(e) => write!(f, "Resposta inesperada da API: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// Buffered diary entries submitted for one user.
#[derive(Debug, Clone, Serialize)]
pub struct DiaryPayload {
    pub user: String,
    pub entries: Vec<String>,
}

/// Parsed diary returned after submission.
#[derive(Debug, Clone, Deserialize)]
pub struct DiaryLog {
    pub user: String,
    pub date: String,
    pub meals: Vec<LoggedMeal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggedMeal {
    pub description: String,
    pub items: Vec<LoggedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggedItem {
    pub label: String,
    pub quantity: f64,
    pub unit: String,
}

/// Registration payload for the users endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub metadata: serde_json::Value,
}

/// Calorie/protein targets upserted after onboarding.
#[derive(Debug, Clone, Serialize)]
pub struct GoalsPayload {
    pub calories_target: u32,
    pub protein_target: u32,
    pub effective_from: String,
}

/// A single free-text meal log.
#[derive(Debug, Clone, Serialize)]
pub struct MealPayload {
    pub meal_time: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

/// Generic response envelope for the account-facing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

/// Operations the state container depends on.
///
/// `ApiClient` is the HTTP implementation; tests drive the container
/// against an in-memory fake.
#[async_trait]
pub trait NutritionApi {
    /// POST /api/v1/plan: recalculate the nutrition plan.
    async fn upsert_plan(&self, profile: &Profile) -> Result<NutritionPlan, ApiError>;

    /// POST /api/v1/diary: submit buffered diary entries.
    async fn sync_diary(&self, payload: &DiaryPayload) -> Result<DiaryLog, ApiError>;

    /// GET /api/v1/dashboard/{user}: fetch the dashboard snapshot.
    async fn fetch_dashboard(&self, user: &str) -> Result<Dashboard, ApiError>;

    /// POST /api/v1/users: register a user.
    async fn create_user(&self, user: &NewUser) -> Result<Envelope, ApiError>;

    /// POST /api/v1/goals: upsert calorie/protein goals.
    async fn upsert_goals(&self, goals: &GoalsPayload) -> Result<Envelope, ApiError>;

    /// POST /api/v1/meals: log a single meal.
    async fn log_meal(&self, meal: &MealPayload) -> Result<Envelope, ApiError>;
}
