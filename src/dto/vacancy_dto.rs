use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_create_salary"))]
pub struct CreateVacancyPayload {
    pub employer_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub requirements: Option<String>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_salary"))]
pub struct UpdateVacancyPayload {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i64>,
    pub location: Option<String>,
}

fn salary_range(min: Option<i64>, max: Option<i64>) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::new("salary_range"));
        }
    }
    Ok(())
}

fn validate_create_salary(payload: &CreateVacancyPayload) -> Result<(), ValidationError> {
    salary_range(payload.salary_min, payload.salary_max)
}

fn validate_update_salary(payload: &UpdateVacancyPayload) -> Result<(), ValidationError> {
    salary_range(payload.salary_min, payload.salary_max)
}
