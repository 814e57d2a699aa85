use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::models::vacancy::RecommendedVacancy;
use crate::render::cards::{self, MatchCard};
use crate::services::match_service::MatchSource;

/// Score assigned to items whose match fetch failed; sorts after every real
/// percentage.
const UNKNOWN_SCORE: f64 = -1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub vacancy_id: i64,
    pub percentage: f64,
    pub success: bool,
}

impl RankedItem {
    fn score(&self) -> f64 {
        if self.success {
            self.percentage
        } else {
            UNKNOWN_SCORE
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingOutcome {
    /// Items in final order: score descending, ties and unknowns keep their
    /// original relative order, unknowns last.
    pub items: Vec<RankedItem>,
    pub cancelled: bool,
}

/// Receives card state changes as the batch progresses. Implemented by the
/// terminal renderer; the ranker itself never touches the display.
pub trait CardSink {
    fn card_pending(&mut self, vacancy: &RecommendedVacancy);
    fn card_resolved(&mut self, vacancy_id: i64, card: &MatchCard);
    fn card_failed(&mut self, vacancy_id: i64, message: &str);
    /// Final permutation of vacancy ids. Cards are moved, not re-rendered.
    fn apply_order(&mut self, order: &[i64]);
}

pub struct RankingService<S: MatchSource> {
    source: S,
}

impl<S: MatchSource> RankingService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Ranks `vacancies` against one resume. Requests go out one at a time so
    /// each card resolves independently and backend load stays bounded. A
    /// failed item is marked unknown and the batch continues; only
    /// cancellation stops the loop, abandoning the items not yet fetched.
    #[instrument(skip(self, vacancies, sink, cancel), fields(batch = vacancies.len()))]
    pub async fn rank(
        &self,
        resume_id: i64,
        vacancies: &[RecommendedVacancy],
        sink: &mut dyn CardSink,
        cancel: &CancellationToken,
    ) -> RankingOutcome {
        for vacancy in vacancies {
            sink.card_pending(vacancy);
        }

        let mut items: Vec<RankedItem> = Vec::with_capacity(vacancies.len());

        for vacancy in vacancies {
            if cancel.is_cancelled() {
                info!(
                    settled = items.len(),
                    remaining = vacancies.len() - items.len(),
                    "Ranking cancelled, abandoning remaining requests"
                );
                return RankingOutcome {
                    items,
                    cancelled: true,
                };
            }

            match self.source.fetch_match(resume_id, vacancy.id).await {
                Ok(analysis) => {
                    let card = cards::match_card(&analysis);
                    sink.card_resolved(vacancy.id, &card);
                    items.push(RankedItem {
                        vacancy_id: vacancy.id,
                        percentage: analysis.match_percentage,
                        success: true,
                    });
                }
                Err(err) => {
                    warn!(
                        vacancy_id = vacancy.id,
                        error = %err,
                        "Match fetch failed, card stays unknown"
                    );
                    sink.card_failed(vacancy.id, &err.detail());
                    items.push(RankedItem {
                        vacancy_id: vacancy.id,
                        percentage: UNKNOWN_SCORE,
                        success: false,
                    });
                }
            }
        }

        // Stable: equal scores and the unknown group keep input order.
        items.sort_by(|a, b| b.score().total_cmp(&a.score()));

        let order: Vec<i64> = items.iter().map(|item| item.vacancy_id).collect();
        sink.apply_order(&order);

        RankingOutcome {
            items,
            cancelled: false,
        }
    }
}
