use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use jobmatch_client::config::{get_config, init_config};
use jobmatch_client::dto::resume_dto::{CreateResumePayload, UpdateResumePayload};
use jobmatch_client::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use jobmatch_client::{pages, AppContext};

#[derive(Parser)]
#[command(name = "jobmatch", about = "Front-end client for the job-matching API", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all vacancies, optionally narrowed by a quick-search query
    Vacancies {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one vacancy
    Vacancy {
        id: i64,
        /// Also show suggested candidate resumes
        #[arg(long)]
        candidates: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List all resumes
    Resumes,
    /// Show one resume
    Resume { id: i64 },
    /// Rank recommended vacancies for a resume by match analysis
    Recommend {
        resume_id: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the full match breakdown for one resume/vacancy pair
    Match { resume_id: i64, vacancy_id: i64 },
    CreateResume(CreateResumeArgs),
    UpdateResume {
        id: i64,
        #[command(flatten)]
        args: UpdateResumeArgs,
    },
    CreateVacancy(CreateVacancyArgs),
    UpdateVacancy {
        id: i64,
        #[command(flatten)]
        args: UpdateVacancyArgs,
    },
    DeleteResume { id: i64 },
    DeleteVacancy { id: i64 },
    /// Check backend availability
    Health,
}

#[derive(Args)]
struct CreateResumeArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    summary: Option<String>,
    #[arg(long)]
    skills: Option<String>,
    #[arg(long)]
    experience: Option<String>,
    #[arg(long)]
    education: Option<String>,
    #[arg(long)]
    desired_salary: Option<i64>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long, default_value_t = 1)]
    user_id: i64,
}

impl From<CreateResumeArgs> for CreateResumePayload {
    fn from(args: CreateResumeArgs) -> Self {
        Self {
            user_id: args.user_id,
            desired_position: Some(args.title.clone()),
            title: args.title,
            summary: args.summary,
            skills: args.skills,
            experience: args.experience,
            education: args.education,
            desired_salary: args.desired_salary,
            location: args.location,
        }
    }
}

#[derive(Args)]
struct UpdateResumeArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    summary: Option<String>,
    #[arg(long)]
    skills: Option<String>,
    #[arg(long)]
    experience: Option<String>,
    #[arg(long)]
    education: Option<String>,
    #[arg(long)]
    desired_salary: Option<i64>,
    #[arg(long)]
    location: Option<String>,
}

impl From<UpdateResumeArgs> for UpdateResumePayload {
    fn from(args: UpdateResumeArgs) -> Self {
        Self {
            desired_position: args.title.clone(),
            title: args.title,
            summary: args.summary,
            skills: args.skills,
            experience: args.experience,
            education: args.education,
            desired_salary: args.desired_salary,
            location: args.location,
        }
    }
}

#[derive(Args)]
struct CreateVacancyArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    requirements: Option<String>,
    #[arg(long)]
    salary_min: Option<i64>,
    #[arg(long)]
    salary_max: Option<i64>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long, default_value_t = 1)]
    employer_id: i64,
}

impl From<CreateVacancyArgs> for CreateVacancyPayload {
    fn from(args: CreateVacancyArgs) -> Self {
        Self {
            employer_id: args.employer_id,
            title: args.title,
            description: args.description,
            requirements: args.requirements,
            salary_min: args.salary_min,
            salary_max: args.salary_max,
            location: args.location,
        }
    }
}

#[derive(Args)]
struct UpdateVacancyArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    requirements: Option<String>,
    #[arg(long)]
    salary_min: Option<i64>,
    #[arg(long)]
    salary_max: Option<i64>,
    #[arg(long)]
    location: Option<String>,
}

impl From<UpdateVacancyArgs> for UpdateVacancyPayload {
    fn from(args: UpdateVacancyArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            requirements: args.requirements,
            salary_min: args.salary_min,
            salary_max: args.salary_max,
            location: args.location,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    init_config()?;
    let config = get_config().clone();
    let ctx = AppContext::new(config)?;

    // Leaving the page (Ctrl-C) stops the ranker from issuing further
    // requests; in-flight ones are simply abandoned.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    match cli.command {
        Command::Vacancies { search } => pages::home::show(&ctx, search.as_deref()).await?,
        Command::Vacancy {
            id,
            candidates,
            limit,
        } => {
            let limit = limit.unwrap_or(ctx.config.recommendations_limit);
            pages::vacancy::show(&ctx, id, candidates, limit).await?
        }
        Command::Resumes => pages::resume::list(&ctx).await?,
        Command::Resume { id } => pages::resume::show(&ctx, id).await?,
        Command::Recommend { resume_id, limit } => {
            let limit = limit.unwrap_or(ctx.config.recommendations_limit);
            pages::recommendations::show(&ctx, resume_id, limit, &cancel).await?
        }
        Command::Match {
            resume_id,
            vacancy_id,
        } => pages::vacancy::show_match(&ctx, resume_id, vacancy_id).await?,
        Command::CreateResume(args) => pages::forms::create_resume(&ctx, args.into()).await?,
        Command::UpdateResume { id, args } => {
            pages::forms::update_resume(&ctx, id, args.into()).await?
        }
        Command::CreateVacancy(args) => pages::forms::create_vacancy(&ctx, args.into()).await?,
        Command::UpdateVacancy { id, args } => {
            pages::forms::update_vacancy(&ctx, id, args.into()).await?
        }
        Command::DeleteResume { id } => pages::forms::delete_resume(&ctx, id).await?,
        Command::DeleteVacancy { id } => pages::forms::delete_vacancy(&ctx, id).await?,
        Command::Health => {
            let status = ctx.api.health().await?;
            println!("Backend status: {}", status.status);
        }
    }

    Ok(())
}
