//! HTTP implementation of [`NutritionApi`] backed by reqwest.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    ApiError, DiaryLog, DiaryPayload, Envelope, GoalsPayload, MealPayload, NewUser, NutritionApi,
};
use crate::models::{Dashboard, NutritionPlan, Profile};

/// Fallback message when the server gives no usable error body.
const GENERIC_ERROR: &str = "Erro ao comunicar com a API";

/// Response wrappers for the v1 endpoints.
#[derive(Debug, serde::Deserialize)]
struct PlanResponse {
    plan: NutritionPlan,
}

#[derive(Debug, serde::Deserialize)]
struct DiaryResponse {
    log: DiaryLog,
}

#[derive(Debug, serde::Deserialize)]
struct DashboardResponse {
    dashboard: Dashboard,
}

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!("POST {}", path);
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }
}

#[async_trait]
impl NutritionApi for ApiClient {
    async fn upsert_plan(&self, profile: &Profile) -> Result<NutritionPlan, ApiError> {
        let response: PlanResponse = self.post("/api/v1/plan", profile).await?;
        Ok(response.plan)
    }

    async fn sync_diary(&self, payload: &DiaryPayload) -> Result<DiaryLog, ApiError> {
        let response: DiaryResponse = self.post("/api/v1/diary", payload).await?;
        Ok(response.log)
    }

    async fn fetch_dashboard(&self, user: &str) -> Result<Dashboard, ApiError> {
        let path = format!("/api/v1/dashboard/{}", urlencoding::encode(user));
        let response: DashboardResponse = self.get(&path).await?;
        Ok(response.dashboard)
    }

    async fn create_user(&self, user: &NewUser) -> Result<Envelope, ApiError> {
        self.post("/api/v1/users", user).await
    }

    async fn upsert_goals(&self, goals: &GoalsPayload) -> Result<Envelope, ApiError> {
        self.post("/api/v1/goals", goals).await
    }

    async fn log_meal(&self, meal: &MealPayload) -> Result<Envelope, ApiError> {
        self.post("/api/v1/meals", meal).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_status(status.as_u16(), extract_detail(&body)));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Maps a non-2xx status to the error taxonomy. 401 and 403 get their
/// own variants; everything else keeps the status and detail.
fn classify_status(status: u16, detail: String) -> ApiError {
    match status {
        401 => ApiError::SessionExpired(detail),
        403 => ApiError::AccessDenied(detail),
        _ => ApiError::Server { status, detail },
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Tries the JSON `detail` and `error` fields first, then falls back to
/// the raw text, then to a generic message.
fn extract_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/", None);
        assert_eq!(client.url("/api/v1/plan"), "http://localhost:8000/api/v1/plan");
    }

    #[test]
    fn test_dashboard_path_encodes_user() {
        assert_eq!(
            format!("/api/v1/dashboard/{}", urlencoding::encode("maria clara")),
            "/api/v1/dashboard/maria%20clara"
        );
    }

    #[test]
    fn test_extract_detail_prefers_detail_field() {
        let body = r#"{"detail": "usuário não encontrado", "error": "not_found"}"#;
        assert_eq!(extract_detail(body), "usuário não encontrado");
    }

    #[test]
    fn test_extract_detail_falls_back_to_error_field() {
        let body = r#"{"error": "rate limited"}"#;
        assert_eq!(extract_detail(body), "rate limited");
    }

    #[test]
    fn test_extract_detail_raw_text() {
        assert_eq!(extract_detail("  Bad Gateway  "), "Bad Gateway");
    }

    #[test]
    fn test_extract_detail_empty_body() {
        assert_eq!(extract_detail(""), GENERIC_ERROR);
        assert_eq!(extract_detail("{}"), "{}");
    }

    #[test]
    fn test_classify_status_distinguishes_auth_errors() {
        let err = classify_status(401, "token vencido".to_string());
        assert!(matches!(err, ApiError::SessionExpired(_)));
        assert!(err.to_string().starts_with("Sessão inválida ou expirada"));

        let err = classify_status(403, "sem permissão".to_string());
        assert!(matches!(err, ApiError::AccessDenied(_)));
        assert!(err.to_string().starts_with("Acesso negado"));

        let err = classify_status(500, "internal".to_string());
        match err {
            ApiError::Server { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "internal");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
