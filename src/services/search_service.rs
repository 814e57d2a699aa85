use crate::models::vacancy::VacancySummary;

/// Minimum query length before the dropdown search fires.
const MIN_QUERY_CHARS: usize = 2;

/// Client-side filter over an already-fetched vacancy list, used by the quick
/// search dropdown. The backend owns real search; this only narrows what the
/// page has.
pub struct SearchService {
    limit: usize,
}

impl SearchService {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn filter<'a>(
        &self,
        vacancies: &'a [VacancySummary],
        query: &str,
    ) -> Vec<&'a VacancySummary> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        vacancies
            .iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&query)
                    || v.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
                    || v.location
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&query))
            })
            .take(self.limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(id: i64, title: &str, description: Option<&str>, location: Option<&str>) -> VacancySummary {
        VacancySummary {
            id,
            title: title.to_string(),
            description: description.map(str::to_string),
            salary_min: None,
            salary_max: None,
            location: location.map(str::to_string),
        }
    }

    fn fixture() -> Vec<VacancySummary> {
        vec![
            vacancy(1, "Rust Developer", Some("Tokio services"), Some("Moscow")),
            vacancy(2, "Python Engineer", Some("FastAPI backend"), Some("Remote")),
            vacancy(3, "Data Engineer", None, Some("Moscow")),
            vacancy(4, "Frontend Developer", Some("rust wasm tooling"), None),
        ]
    }

    #[test]
    fn short_queries_return_nothing() {
        let service = SearchService::new(3);
        let vacancies = fixture();
        assert!(service.filter(&vacancies, "").is_empty());
        assert!(service.filter(&vacancies, "r").is_empty());
        assert!(service.filter(&vacancies, "  r  ").is_empty());
    }

    #[test]
    fn matches_title_description_and_location() {
        let service = SearchService::new(10);
        let vacancies = fixture();

        let by_title: Vec<i64> = service.filter(&vacancies, "rust").iter().map(|v| v.id).collect();
        assert_eq!(by_title, vec![1, 4]);

        let by_description: Vec<i64> =
            service.filter(&vacancies, "fastapi").iter().map(|v| v.id).collect();
        assert_eq!(by_description, vec![2]);

        let by_location: Vec<i64> =
            service.filter(&vacancies, "moscow").iter().map(|v| v.id).collect();
        assert_eq!(by_location, vec![1, 3]);
    }

    #[test]
    fn result_count_is_capped() {
        let service = SearchService::new(1);
        let vacancies = fixture();
        assert_eq!(service.filter(&vacancies, "developer").len(), 1);
    }
}
