use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::dashboard::views::{
    ApplicationFunnel, ApplicationProgression, AverageCandidateScore, CompanyJobCount,
    DashboardSummary, GenderShare, InclusionSnapshot, JobPopularity, LocationCount, MonthStats,
    OfferAcceptance, RecruiterPerformance, SkillCount, SourceShare, TimeToHire,
};
use super::service::RecruitmentService;
use crate::error::ApiError;
use crate::gateway::{QueryGateway, Row};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Router exposing the catalog listings, job offers, and every dashboard view.
pub fn recruitment_router<G>(service: Arc<RecruitmentService<G>>) -> Router
where
    G: QueryGateway + 'static,
{
    Router::new()
        .route("/companies", get(companies_handler::<G>))
        .route("/interviews", get(interviews_handler::<G>))
        .route("/recruiters", get(recruiters_handler::<G>))
        .route("/offers", get(offers_handler::<G>))
        .route("/offers/by-recruiter", get(offers_by_recruiter_handler::<G>))
        .route("/dashboard/summary", get(summary_handler::<G>))
        .route("/dashboard/job-stats", get(job_stats_handler::<G>))
        .route(
            "/dashboard/application-progression",
            get(application_progression_handler::<G>),
        )
        .route(
            "/dashboard/offer-acceptance",
            get(offer_acceptance_handler::<G>),
        )
        .route("/dashboard/source-of-hire", get(source_of_hire_handler::<G>))
        .route("/dashboard/lgbtq-inclusion", get(lgbtq_inclusion_handler::<G>))
        .route(
            "/dashboard/candidates-by-location",
            get(candidates_by_location_handler::<G>),
        )
        .route(
            "/dashboard/average-candidate-score",
            get(average_candidate_score_handler::<G>),
        )
        .route(
            "/dashboard/jobs-by-company",
            get(jobs_by_company_handler::<G>),
        )
        .route("/dashboard/top-skills", get(top_skills_handler::<G>))
        .route(
            "/dashboard/gender-diversity",
            get(gender_diversity_handler::<G>),
        )
        .route(
            "/dashboard/recruiter-performance",
            get(recruiter_performance_handler::<G>),
        )
        .route("/dashboard/time-to-hire", get(time_to_hire_handler::<G>))
        .route(
            "/dashboard/application-funnel",
            get(application_funnel_handler::<G>),
        )
        .route("/dashboard/job-popularity", get(job_popularity_handler::<G>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct OffersResponse {
    pub offers: Vec<Row>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OffersByRecruiterParams {
    #[serde(default)]
    pub recruiter_id: Option<String>,
}

pub(crate) async fn companies_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<Row>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.companies().await?))
}

pub(crate) async fn interviews_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<Row>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.interviews().await?))
}

pub(crate) async fn recruiters_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<Row>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.recruiters().await?))
}

pub(crate) async fn offers_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<OffersResponse>
where
    G: QueryGateway + 'static,
{
    let offers = service.offers().await.map_err(ApiError::Store)?;
    Ok(Json(OffersResponse { offers }))
}

pub(crate) async fn offers_by_recruiter_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
    Query(params): Query<OffersByRecruiterParams>,
) -> ApiResult<OffersResponse>
where
    G: QueryGateway + 'static,
{
    let recruiter_id = params
        .recruiter_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ApiError::MissingParameter("recruiter_id"))?;

    let offers = service
        .offers_by_recruiter(&recruiter_id)
        .await
        .map_err(ApiError::Store)?;
    Ok(Json(OffersResponse { offers }))
}

pub(crate) async fn summary_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<DashboardSummary>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.summary().await?))
}

pub(crate) async fn job_stats_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<MonthStats>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.job_stats().await?))
}

pub(crate) async fn application_progression_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<ApplicationProgression>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.application_progression().await?))
}

pub(crate) async fn offer_acceptance_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<OfferAcceptance>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.offer_acceptance().await?))
}

pub(crate) async fn source_of_hire_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<SourceShare>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.source_of_hire().await?))
}

pub(crate) async fn lgbtq_inclusion_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> Json<InclusionSnapshot>
where
    G: QueryGateway + 'static,
{
    Json(service.lgbtq_inclusion())
}

pub(crate) async fn candidates_by_location_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<LocationCount>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.candidates_by_location().await?))
}

pub(crate) async fn average_candidate_score_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<AverageCandidateScore>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.average_candidate_score().await?))
}

pub(crate) async fn jobs_by_company_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<CompanyJobCount>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.jobs_by_company().await?))
}

pub(crate) async fn top_skills_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<SkillCount>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.top_skills().await?))
}

pub(crate) async fn gender_diversity_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<GenderShare>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.gender_diversity().await?))
}

pub(crate) async fn recruiter_performance_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<RecruiterPerformance>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.recruiter_performance().await?))
}

pub(crate) async fn time_to_hire_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<TimeToHire>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.time_to_hire().await?))
}

pub(crate) async fn application_funnel_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<ApplicationFunnel>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.application_funnel().await?))
}

pub(crate) async fn job_popularity_handler<G>(
    State(service): State<Arc<RecruitmentService<G>>>,
) -> ApiResult<Vec<JobPopularity>>
where
    G: QueryGateway + 'static,
{
    Ok(Json(service.job_popularity().await?))
}
