use std::collections::HashMap;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::Result;
use crate::models::vacancy::RecommendedVacancy;
use crate::render::cards::{self, MatchCard};
use crate::services::match_service::MatchService;
use crate::services::ranking_service::{CardSink, RankingService};
use crate::AppContext;

/// Prints card state changes as the batch ranker produces them.
struct TerminalSink {
    titles: HashMap<i64, String>,
}

impl TerminalSink {
    fn new(vacancies: &[RecommendedVacancy]) -> Self {
        Self {
            titles: vacancies
                .iter()
                .map(|v| (v.id, v.title.clone()))
                .collect(),
        }
    }

    fn title(&self, vacancy_id: i64) -> &str {
        self.titles
            .get(&vacancy_id)
            .map(String::as_str)
            .unwrap_or("(unknown vacancy)")
    }
}

impl CardSink for TerminalSink {
    fn card_pending(&mut self, vacancy: &RecommendedVacancy) {
        println!("{}", cards::pending_line(vacancy));
    }

    fn card_resolved(&mut self, vacancy_id: i64, card: &MatchCard) {
        println!("{}", cards::resolved_line(self.title(vacancy_id), card));
    }

    fn card_failed(&mut self, vacancy_id: i64, message: &str) {
        println!("{}", cards::failed_line(vacancy_id, self.title(vacancy_id), message));
    }

    fn apply_order(&mut self, order: &[i64]) {
        println!();
        println!("Final ranking:");
        for (position, vacancy_id) in order.iter().enumerate() {
            println!("{:>3}. #{} {}", position + 1, vacancy_id, self.title(*vacancy_id));
        }
    }
}

/// The recommendations view: resolves the resume, fetches its recommended
/// vacancies, then ranks them by per-pair match analysis.
pub async fn show(
    ctx: &AppContext,
    resume_id: i64,
    limit: u32,
    cancel: &CancellationToken,
) -> Result<()> {
    let resume = match ctx.api.get_resume(resume_id).await {
        Ok(resume) => resume,
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Resume #{}: {}", resume_id, err.detail()),
                "Back: run `jobmatch resumes` to list existing resumes",
            ));
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    println!("Recommendations for resume #{} ({})", resume.id, resume.title);
    println!();

    let list = ctx.api.recommendations(resume_id, limit).await?;
    if list.recommendations.is_empty() {
        println!("No matching vacancies yet. Try a resume with different skills.");
        return Ok(());
    }

    info!(
        count = list.recommendations.len(),
        cache = ctx.config.cache_matches,
        "Ranking recommended vacancies"
    );

    let matches = MatchService::new(ctx.api.clone(), ctx.config.cache_matches);
    let ranker = RankingService::new(matches);
    let mut sink = TerminalSink::new(&list.recommendations);
    let outcome = ranker
        .rank(resume_id, &list.recommendations, &mut sink, cancel)
        .await;

    if outcome.cancelled {
        println!();
        println!(
            "Ranking cancelled; {} of {} cards settled.",
            outcome.items.len(),
            list.recommendations.len()
        );
    }

    Ok(())
}
