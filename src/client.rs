use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::dto::resume_dto::{CreateResumePayload, UpdateResumePayload};
use crate::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use crate::dto::{DeleteReceipt, HealthStatus, SavedEntity};
use crate::error::{Error, Result};
use crate::models::match_analysis::MatchAnalysis;
use crate::models::resume::{CandidateList, Resume, ResumeSummary};
use crate::models::vacancy::{RecommendationList, Vacancy, VacancySummary};

/// Typed HTTP client for the job-matching backend. Every call resolves to
/// parsed JSON or a typed `Error`; nothing escapes this boundary untyped.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| Error::Config(format!("Invalid API_BASE_URL: {}", e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid request path {}: {}", path, e)))
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let detail = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(|body| body.detail)
            .unwrap_or_else(|_| {
                let text = String::from_utf8_lossy(&bytes).trim().to_string();
                if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    text
                }
            });

        debug!(%status, %detail, "Backend rejected request");

        if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound(detail))
        } else {
            Err(Error::Http {
                status: status.as_u16(),
                detail,
            })
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(self.client.get(self.url(path)?)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.dispatch(self.client.post(self.url(path)?).json(body))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.dispatch(self.client.put(self.url(path)?).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(self.client.delete(self.url(path)?)).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }

    pub async fn get_resume(&self, resume_id: i64) -> Result<Resume> {
        self.get(&format!("/api/resumes/{}", resume_id)).await
    }

    pub async fn get_vacancy(&self, vacancy_id: i64) -> Result<Vacancy> {
        self.get(&format!("/api/vacancies/{}", vacancy_id)).await
    }

    pub async fn list_vacancies(&self) -> Result<Vec<VacancySummary>> {
        self.get("/api/vacancies/all").await
    }

    pub async fn list_resumes(&self) -> Result<Vec<ResumeSummary>> {
        self.get("/api/resumes/all").await
    }

    #[instrument(skip(self))]
    pub async fn recommendations(&self, resume_id: i64, limit: u32) -> Result<RecommendationList> {
        self.get(&format!(
            "/api/resumes/{}/recommendations?limit={}",
            resume_id, limit
        ))
        .await
    }

    #[instrument(skip(self))]
    pub async fn candidates(&self, vacancy_id: i64, limit: u32) -> Result<CandidateList> {
        self.get(&format!(
            "/api/vacancies/{}/candidates?limit={}",
            vacancy_id, limit
        ))
        .await
    }

    #[instrument(skip(self))]
    pub async fn match_analysis(&self, resume_id: i64, vacancy_id: i64) -> Result<MatchAnalysis> {
        self.get(&format!(
            "/api/resumes/{}/vacancies/{}/match-analysis",
            resume_id, vacancy_id
        ))
        .await
    }

    pub async fn create_resume(&self, payload: &CreateResumePayload) -> Result<SavedEntity> {
        self.post("/api/resumes", payload).await
    }

    pub async fn update_resume(
        &self,
        resume_id: i64,
        payload: &UpdateResumePayload,
    ) -> Result<SavedEntity> {
        self.put(&format!("/api/resumes/{}", resume_id), payload)
            .await
    }

    pub async fn create_vacancy(&self, payload: &CreateVacancyPayload) -> Result<SavedEntity> {
        self.post("/api/vacancies", payload).await
    }

    pub async fn update_vacancy(
        &self,
        vacancy_id: i64,
        payload: &UpdateVacancyPayload,
    ) -> Result<SavedEntity> {
        self.put(&format!("/api/vacancies/{}", vacancy_id), payload)
            .await
    }

    pub async fn delete_resume(&self, resume_id: i64) -> Result<DeleteReceipt> {
        self.delete(&format!("/api/resumes/{}", resume_id)).await
    }

    pub async fn delete_vacancy(&self, vacancy_id: i64) -> Result<DeleteReceipt> {
        self.delete(&format!("/api/vacancies/{}", vacancy_id)).await
    }
}
