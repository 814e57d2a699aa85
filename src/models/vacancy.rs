use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Shape returned by the list endpoints; the backend trims descriptions and
/// omits timestamps there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub location: Option<String>,
}

/// A vacancy recommended for a resume, carrying the backend's pre-computed
/// similarity score (0-100).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedVacancy {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub similarity: f64,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationList {
    pub resume_id: i64,
    pub recommendations: Vec<RecommendedVacancy>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub message: Option<String>,
}
