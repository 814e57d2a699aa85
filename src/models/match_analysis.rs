use serde::{Deserialize, Serialize};

/// Backend-computed comparison of one resume against one vacancy. Never
/// persisted here; cached at most for the duration of one page view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub resume_id: i64,
    pub vacancy_id: i64,
    pub match_percentage: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub critical_missing_skills: Vec<String>,
    #[serde(default)]
    pub extra_skills: Vec<String>,
    #[serde(default)]
    pub extra_skills_bonus: Option<i64>,
    #[serde(default)]
    pub recommendations: Option<String>,
}

impl MatchAnalysis {
    pub fn rounded_percentage(&self) -> i64 {
        self.match_percentage.round() as i64
    }

    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.match_percentage)
    }
}

/// Quality bucket for a match percentage. Ranges are closed and
/// non-overlapping with inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Medium,
    Low,
}

impl Tier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Tier::Excellent
        } else if percentage >= 70.0 {
            Tier::Good
        } else if percentage >= 50.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(Tier::from_percentage(100.0), Tier::Excellent);
        assert_eq!(Tier::from_percentage(90.0), Tier::Excellent);
        assert_eq!(Tier::from_percentage(89.0), Tier::Good);
        assert_eq!(Tier::from_percentage(70.0), Tier::Good);
        assert_eq!(Tier::from_percentage(69.0), Tier::Medium);
        assert_eq!(Tier::from_percentage(50.0), Tier::Medium);
        assert_eq!(Tier::from_percentage(49.0), Tier::Low);
        assert_eq!(Tier::from_percentage(0.0), Tier::Low);
    }

    #[test]
    fn percentage_rounds_for_display() {
        let analysis = MatchAnalysis {
            resume_id: 1,
            vacancy_id: 2,
            match_percentage: 87.46,
            matched_skills: vec![],
            missing_skills: vec![],
            critical_missing_skills: vec![],
            extra_skills: vec![],
            extra_skills_bonus: None,
            recommendations: None,
        };
        assert_eq!(analysis.rounded_percentage(), 87);
        assert_eq!(analysis.tier(), Tier::Good);
    }
}
