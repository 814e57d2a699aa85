use crate::models::match_analysis::{MatchAnalysis, Tier};
use crate::models::resume::{CandidateResume, Resume, ResumeSummary};
use crate::models::vacancy::{RecommendedVacancy, Vacancy, VacancySummary};
use crate::render::format::{format_date, format_salary, truncate};

const SKILLS_PREVIEW_COUNT: usize = 3;
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// View model for one resolved card in a ranking batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub vacancy_id: i64,
    pub percentage: i64,
    pub tier: Tier,
    pub skills_preview: Option<String>,
    pub critical_missing: Vec<String>,
    pub recommendations: Option<String>,
}

pub fn match_card(analysis: &MatchAnalysis) -> MatchCard {
    MatchCard {
        vacancy_id: analysis.vacancy_id,
        percentage: analysis.rounded_percentage(),
        tier: analysis.tier(),
        skills_preview: skills_preview(&analysis.matched_skills),
        critical_missing: analysis.critical_missing_skills.clone(),
        recommendations: analysis.recommendations.clone(),
    }
}

/// First three skills plus an overflow count.
pub fn skills_preview(skills: &[String]) -> Option<String> {
    if skills.is_empty() {
        return None;
    }
    let shown = skills
        .iter()
        .take(SKILLS_PREVIEW_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let overflow = skills.len().saturating_sub(SKILLS_PREVIEW_COUNT);
    if overflow > 0 {
        Some(format!("{} (+{} more)", shown, overflow))
    } else {
        Some(shown)
    }
}

pub fn pending_line(vacancy: &RecommendedVacancy) -> String {
    format!(
        "[ pending ] #{} {} — {}",
        vacancy.id,
        vacancy.title,
        format_salary(vacancy.salary_min, vacancy.salary_max)
    )
}

pub fn resolved_line(title: &str, card: &MatchCard) -> String {
    match &card.skills_preview {
        Some(skills) => format!(
            "[ {}% {} ] #{} {} — matched: {}",
            card.percentage,
            card.tier.label(),
            card.vacancy_id,
            title,
            skills
        ),
        None => format!(
            "[ {}% {} ] #{} {}",
            card.percentage,
            card.tier.label(),
            card.vacancy_id,
            title
        ),
    }
}

pub fn failed_line(vacancy_id: i64, title: &str, message: &str) -> String {
    format!(
        "[ unknown ] #{} {} — match analysis failed: {}",
        vacancy_id, title, message
    )
}

fn meta_line(location: Option<&str>, salary: String, created_at: Option<String>) -> String {
    let mut parts = vec![location.unwrap_or("location not specified").to_string(), salary];
    if let Some(date) = created_at {
        parts.push(format!("created {}", date));
    }
    parts.join(" • ")
}

pub fn vacancy_view(vacancy: &Vacancy) -> Vec<String> {
    let mut lines = vec![
        vacancy.title.clone(),
        meta_line(
            vacancy.location.as_deref(),
            format_salary(vacancy.salary_min, vacancy.salary_max),
            vacancy.created_at.as_ref().map(format_date),
        ),
    ];
    if let Some(description) = &vacancy.description {
        lines.push(String::new());
        lines.push(description.trim().to_string());
    }
    if let Some(requirements) = &vacancy.requirements {
        lines.push(String::new());
        lines.push("Requirements:".to_string());
        lines.push(requirements.trim().to_string());
    }
    lines
}

pub fn vacancy_summary_card(vacancy: &VacancySummary) -> Vec<String> {
    let mut lines = vec![
        format!("#{} {}", vacancy.id, vacancy.title),
        meta_line(
            vacancy.location.as_deref(),
            format_salary(vacancy.salary_min, vacancy.salary_max),
            None,
        ),
    ];
    if let Some(description) = &vacancy.description {
        lines.push(truncate(description, DESCRIPTION_PREVIEW_CHARS));
    }
    lines
}

pub fn resume_view(resume: &Resume) -> Vec<String> {
    let mut lines = vec![
        resume.title.clone(),
        meta_line(
            resume.location.as_deref(),
            format_salary(resume.desired_salary, None),
            resume.created_at.as_ref().map(format_date),
        ),
    ];
    for (heading, value) in [
        ("About", &resume.summary),
        ("Skills", &resume.skills),
        ("Experience", &resume.experience),
        ("Education", &resume.education),
    ] {
        if let Some(text) = value {
            lines.push(String::new());
            lines.push(format!("{}:", heading));
            lines.push(text.trim().to_string());
        }
    }
    lines
}

pub fn resume_summary_card(resume: &ResumeSummary) -> Vec<String> {
    let mut lines = vec![
        format!("#{} {}", resume.id, resume.title),
        meta_line(
            resume.location.as_deref(),
            format_salary(resume.desired_salary, None),
            None,
        ),
    ];
    if let Some(skills) = &resume.skills {
        lines.push(format!("Skills: {}", truncate(skills, DESCRIPTION_PREVIEW_CHARS)));
    }
    lines
}

pub fn candidate_line(candidate: &CandidateResume) -> String {
    format!(
        "[ {}% ] #{} {} — {}",
        candidate.similarity.round() as i64,
        candidate.id,
        candidate.title,
        candidate.location.as_deref().unwrap_or("location not specified")
    )
}

/// Full match breakdown for a single (resume, vacancy) pair.
pub fn match_panel(analysis: &MatchAnalysis) -> Vec<String> {
    let mut lines = vec![format!(
        "Match: {}% ({})",
        analysis.rounded_percentage(),
        analysis.tier().label()
    )];
    if let Some(matched) = skills_preview(&analysis.matched_skills) {
        lines.push(format!("Matched skills: {}", matched));
    }
    if !analysis.missing_skills.is_empty() {
        lines.push(format!("Missing skills: {}", analysis.missing_skills.join(", ")));
    }
    if !analysis.critical_missing_skills.is_empty() {
        lines.push(format!(
            "Critical gaps: {}",
            analysis.critical_missing_skills.join(", ")
        ));
    }
    if !analysis.extra_skills.is_empty() {
        let bonus = analysis
            .extra_skills_bonus
            .map(|b| format!(" (+{} bonus)", b))
            .unwrap_or_default();
        lines.push(format!(
            "Extra skills: {}{}",
            analysis.extra_skills.join(", "),
            bonus
        ));
    }
    if let Some(recommendations) = &analysis.recommendations {
        lines.push(format!("Advice: {}", recommendations.trim()));
    }
    lines
}

/// Blocking failure state for a whole view, always with a way back.
pub fn error_panel(message: &str, way_back: &str) -> Vec<String> {
    vec![
        "--------------------------------------------".to_string(),
        format!("Error: {}", message),
        way_back.to_string(),
        "--------------------------------------------".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preview_shows_first_three_and_overflow() {
        assert_eq!(skills_preview(&[]), None);
        assert_eq!(
            skills_preview(&skills(&["Rust", "SQL"])).unwrap(),
            "Rust, SQL"
        );
        assert_eq!(
            skills_preview(&skills(&["Rust", "SQL", "Tokio"])).unwrap(),
            "Rust, SQL, Tokio"
        );
        assert_eq!(
            skills_preview(&skills(&["Rust", "SQL", "Tokio", "Docker", "K8s"])).unwrap(),
            "Rust, SQL, Tokio (+2 more)"
        );
    }

    #[test]
    fn match_card_rounds_and_classifies() {
        let analysis = MatchAnalysis {
            resume_id: 7,
            vacancy_id: 2,
            match_percentage: 91.6,
            matched_skills: skills(&["Rust"]),
            missing_skills: skills(&["Go"]),
            critical_missing_skills: vec![],
            extra_skills: vec![],
            extra_skills_bonus: None,
            recommendations: None,
        };
        let card = match_card(&analysis);
        assert_eq!(card.percentage, 92);
        assert_eq!(card.tier, Tier::Excellent);
        assert_eq!(card.skills_preview.as_deref(), Some("Rust"));
    }

    #[test]
    fn vacancy_view_includes_requirements_section_only_when_present() {
        let vacancy = Vacancy {
            id: 3,
            title: "Rust Developer".to_string(),
            description: Some("Build things".to_string()),
            requirements: None,
            salary_min: Some(100_000),
            salary_max: None,
            location: Some("Remote".to_string()),
            created_at: None,
        };
        let lines = vacancy_view(&vacancy);
        assert_eq!(lines[0], "Rust Developer");
        assert_eq!(lines[1], "Remote • from 100,000");
        assert!(!lines.iter().any(|l| l.starts_with("Requirements")));
    }
}
