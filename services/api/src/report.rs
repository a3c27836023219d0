use crate::infra::load_fixtures;
use chrono::{NaiveDateTime, Utc};
use clap::{Args, ValueEnum};
use hiring_dashboard::error::AppError;
use hiring_dashboard::gateway::QueryGateway;
use hiring_dashboard::recruitment::domain::parse_timestamp;
use hiring_dashboard::recruitment::{RecruitmentService, RecruitmentServiceError};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Dashboard views available offline, named after their routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DashboardView {
    Summary,
    JobStats,
    ApplicationProgression,
    OfferAcceptance,
    SourceOfHire,
    LgbtqInclusion,
    CandidatesByLocation,
    AverageCandidateScore,
    JobsByCompany,
    TopSkills,
    GenderDiversity,
    RecruiterPerformance,
    TimeToHire,
    ApplicationFunnel,
    JobPopularity,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Dashboard view to compute
    #[arg(value_enum)]
    pub(crate) view: DashboardView,
    /// JSON document mapping table names to row arrays
    #[arg(long)]
    pub(crate) fixtures: PathBuf,
    /// Reference time for time-to-hire (defaults to now, UTC)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<NaiveDateTime>,
}

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        view,
        fixtures,
        now,
    } = args;

    let gateway = load_fixtures(&fixtures)?;
    let service = RecruitmentService::new(Arc::new(gateway));
    let now = now.unwrap_or_else(|| Utc::now().naive_utc());

    let payload = render_view(&service, view, now).await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub(crate) async fn render_view<G>(
    service: &RecruitmentService<G>,
    view: DashboardView,
    now: NaiveDateTime,
) -> Result<Value, AppError>
where
    G: QueryGateway + 'static,
{
    let payload = match view {
        DashboardView::Summary => to_json(service.summary().await)?,
        DashboardView::JobStats => to_json(service.job_stats().await)?,
        DashboardView::ApplicationProgression => {
            to_json(service.application_progression().await)?
        }
        DashboardView::OfferAcceptance => to_json(service.offer_acceptance().await)?,
        DashboardView::SourceOfHire => to_json(service.source_of_hire().await)?,
        DashboardView::LgbtqInclusion => serde_json::to_value(service.lgbtq_inclusion())?,
        DashboardView::CandidatesByLocation => to_json(service.candidates_by_location().await)?,
        DashboardView::AverageCandidateScore => {
            to_json(service.average_candidate_score().await)?
        }
        DashboardView::JobsByCompany => to_json(service.jobs_by_company().await)?,
        DashboardView::TopSkills => to_json(service.top_skills().await)?,
        DashboardView::GenderDiversity => to_json(service.gender_diversity().await)?,
        DashboardView::RecruiterPerformance => to_json(service.recruiter_performance().await)?,
        DashboardView::TimeToHire => to_json(service.time_to_hire_at(now).await)?,
        DashboardView::ApplicationFunnel => to_json(service.application_funnel().await)?,
        DashboardView::JobPopularity => to_json(service.job_popularity().await)?,
    };
    Ok(payload)
}

fn to_json<T: serde::Serialize>(
    result: Result<T, RecruitmentServiceError>,
) -> Result<Value, AppError> {
    Ok(serde_json::to_value(result?)?)
}
