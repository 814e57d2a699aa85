use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::match_analysis::MatchAnalysis;

/// Source of match analyses for (resume, vacancy) pairs. The seam lets the
/// ranker run against the real backend or a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchSource: Send + Sync {
    async fn fetch_match(&self, resume_id: i64, vacancy_id: i64) -> Result<MatchAnalysis>;
}

#[async_trait]
impl MatchSource for ApiClient {
    async fn fetch_match(&self, resume_id: i64, vacancy_id: i64) -> Result<MatchAnalysis> {
        self.match_analysis(resume_id, vacancy_id).await
    }
}

/// Fetches one match analysis per call. Single attempt, no retry: the batch
/// decides how to represent an unknown score. With `cache_matches` enabled,
/// successful results are memoized for this instance's lifetime (one page
/// view); failures are never cached.
pub struct MatchService<S: MatchSource> {
    source: S,
    cache: Option<Mutex<HashMap<(i64, i64), MatchAnalysis>>>,
}

impl<S: MatchSource> MatchService<S> {
    pub fn new(source: S, cache_matches: bool) -> Self {
        Self {
            source,
            cache: cache_matches.then(|| Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl<S: MatchSource> MatchSource for MatchService<S> {
    #[instrument(skip(self))]
    async fn fetch_match(&self, resume_id: i64, vacancy_id: i64) -> Result<MatchAnalysis> {
        let key = (resume_id, vacancy_id);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lock().await.get(&key) {
                debug!("Match analysis served from page cache");
                return Ok(hit.clone());
            }
        }

        let analysis = self.source.fetch_match(resume_id, vacancy_id).await?;

        if let Some(cache) = &self.cache {
            cache.lock().await.insert(key, analysis.clone());
        }

        Ok(analysis)
    }
}
