use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResumePayload {
    pub user_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub desired_position: Option<String>,
    #[validate(range(min = 0))]
    pub desired_salary: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateResumePayload {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub desired_position: Option<String>,
    #[validate(range(min = 0))]
    pub desired_salary: Option<i64>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_rejected() {
        let payload = CreateResumePayload {
            user_id: 1,
            title: String::new(),
            summary: None,
            skills: None,
            experience: None,
            education: None,
            desired_position: None,
            desired_salary: None,
            location: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn negative_desired_salary_is_rejected() {
        let payload = CreateResumePayload {
            user_id: 1,
            title: "Backend Engineer".to_string(),
            summary: None,
            skills: Some("Rust, SQL".to_string()),
            experience: None,
            education: None,
            desired_position: None,
            desired_salary: Some(-100),
            location: None,
        };
        assert!(payload.validate().is_err());
    }
}
