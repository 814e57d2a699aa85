pub mod resume_dto;
pub mod vacancy_dto;

use serde::{Deserialize, Serialize};

/// Response shape shared by the create/update endpoints: entity JSON with an
/// `id` plus whatever status fields the backend attaches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEntity {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub embedding_generated: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub message: Option<String>,
    pub deleted_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
