use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub desired_salary: Option<i64>,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub desired_salary: Option<i64>,
    pub location: Option<String>,
}

/// A resume suggested for a vacancy (the reverse of vacancy recommendations),
/// with the backend's similarity score attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResume {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub similarity: f64,
    pub desired_salary: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateList {
    pub vacancy_id: i64,
    pub candidates: Vec<CandidateResume>,
    #[serde(default)]
    pub total: Option<usize>,
}
