use tracing::info;
use validator::Validate;

use crate::dto::resume_dto::{CreateResumePayload, UpdateResumePayload};
use crate::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use crate::error::Result;
use crate::render::cards;
use crate::AppContext;

pub async fn create_resume(ctx: &AppContext, payload: CreateResumePayload) -> Result<()> {
    payload.validate()?;
    let saved = ctx.api.create_resume(&payload).await?;
    info!(id = saved.id, "Resume created");
    println!("Resume created with id {}", saved.id);
    println!(
        "Next: `jobmatch recommend {}` to see matching vacancies",
        saved.id
    );
    Ok(())
}

pub async fn update_resume(
    ctx: &AppContext,
    resume_id: i64,
    payload: UpdateResumePayload,
) -> Result<()> {
    payload.validate()?;
    match ctx.api.update_resume(resume_id, &payload).await {
        Ok(saved) => {
            println!("Resume {} updated", saved.id);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Resume #{}: {}", resume_id, err.detail()),
                "Back: run `jobmatch resumes` to list existing resumes",
            ));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

pub async fn create_vacancy(ctx: &AppContext, payload: CreateVacancyPayload) -> Result<()> {
    payload.validate()?;
    let saved = ctx.api.create_vacancy(&payload).await?;
    info!(id = saved.id, "Vacancy created");
    println!("Vacancy created with id {}", saved.id);
    Ok(())
}

pub async fn update_vacancy(
    ctx: &AppContext,
    vacancy_id: i64,
    payload: UpdateVacancyPayload,
) -> Result<()> {
    payload.validate()?;
    match ctx.api.update_vacancy(vacancy_id, &payload).await {
        Ok(saved) => {
            println!("Vacancy {} updated", saved.id);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Vacancy #{}: {}", vacancy_id, err.detail()),
                "Back: run `jobmatch vacancies` to browse open vacancies",
            ));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

pub async fn delete_resume(ctx: &AppContext, resume_id: i64) -> Result<()> {
    match ctx.api.delete_resume(resume_id).await {
        Ok(receipt) => {
            println!("Resume {} deleted", receipt.deleted_id);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Resume #{}: {}", resume_id, err.detail()),
                "Back: run `jobmatch resumes` to list existing resumes",
            ));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

pub async fn delete_vacancy(ctx: &AppContext, vacancy_id: i64) -> Result<()> {
    match ctx.api.delete_vacancy(vacancy_id).await {
        Ok(receipt) => {
            println!("Vacancy {} deleted", receipt.deleted_id);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            super::print_lines(&cards::error_panel(
                &format!("Vacancy #{}: {}", vacancy_id, err.detail()),
                "Back: run `jobmatch vacancies` to browse open vacancies",
            ));
            Ok(())
        }
        Err(err) => Err(err),
    }
}
