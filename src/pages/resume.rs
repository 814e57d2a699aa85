use crate::error::Result;
use crate::render::cards;
use crate::AppContext;

pub async fn show(ctx: &AppContext, resume_id: i64) -> Result<()> {
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

    super::print_lines(&cards::resume_view(&resume));
    Ok(())
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let resumes = ctx.api.list_resumes().await?;
    if resumes.is_empty() {
        println!("No resumes yet");
        return Ok(());
    }
    for resume in &resumes {
        super::print_lines(&cards::resume_summary_card(resume));
        println!();
    }
    Ok(())
}
