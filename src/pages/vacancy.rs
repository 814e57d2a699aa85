use crate::error::Result;
use crate::render::cards;
use crate::AppContext;

pub async fn show(
    ctx: &AppContext,
    vacancy_id: i64,
    with_candidates: bool,
    limit: u32,
) -> Result<()> {
    let vacancy = match ctx.api.get_vacancy(vacancy_id).await {
        Ok(vacancy) => vacancy,
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Vacancy #{}: {}", vacancy_id, err.detail()),
                "Back: run `jobmatch vacancies` to browse open vacancies",
            ));
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    super::print_lines(&cards::vacancy_view(&vacancy));

    if with_candidates {
        let list = ctx.api.candidates(vacancy_id, limit).await?;
        println!();
        println!("Suggested candidates:");
        if list.candidates.is_empty() {
            println!("No suitable resumes yet");
        }
        for candidate in &list.candidates {
            println!("{}", cards::candidate_line(candidate));
        }
    }

    Ok(())
}

/// Full match breakdown of one resume against one vacancy.
pub async fn show_match(ctx: &AppContext, resume_id: i64, vacancy_id: i64) -> Result<()> {
    let vacancy = match ctx.api.get_vacancy(vacancy_id).await {
        Ok(vacancy) => vacancy,
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Vacancy #{}: {}", vacancy_id, err.detail()),
                "Back: run `jobmatch vacancies` to browse open vacancies",
            ));
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    println!("{}", vacancy.title);
    println!();

    match ctx.api.match_analysis(resume_id, vacancy_id).await {
        Ok(analysis) => {
            super::print_lines(&cards::match_panel(&analysis));
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Match for resume #{}: {}", resume_id, err.detail()),
                "Back: run `jobmatch resumes` to list existing resumes",
            ));
            Ok(())
        }
        Err(err) => Err(err),
    }
}
