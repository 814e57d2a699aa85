use crate::error::Result;
use crate::render::cards;
use crate::services::search_service::SearchService;
use crate::AppContext;

/// The vacancy list view, with the quick-search filter applied client-side
/// when a query is given.
pub async fn show(ctx: &AppContext, query: Option<&str>) -> Result<()> {
    let vacancies = ctx.api.list_vacancies().await?;

    if let Some(query) = query {
        let search = SearchService::new(ctx.config.search_limit);
        let hits = search.filter(&vacancies, query);
        if hits.is_empty() {
            println!("Nothing found for \"{}\"", query.trim());
            return Ok(());
        }
        for hit in hits {
            super::print_lines(&cards::vacancy_summary_card(hit));
            println!();
        }
        return Ok(());
    }

    if vacancies.is_empty() {
        println!("No vacancies yet");
        return Ok(());
    }

    for vacancy in &vacancies {
        super::print_lines(&cards::vacancy_summary_card(vacancy));
        println!();
    }

    Ok(())
}
