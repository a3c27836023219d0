use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use super::dashboard::views::{
    ApplicationFunnel, ApplicationProgression, AverageCandidateScore, CompanyJobCount,
    DashboardSummary, GenderShare, InclusionSnapshot, JobPopularity, LocationCount, MonthStats,
    OfferAcceptance, RecruiterPerformance, SkillCount, SourceShare, TimeToHire,
};
use super::dashboard;
use super::domain::{Application, CandidateProfile, Company, Job, Recruiter, TimestampError};
use crate::gateway::{fetch, GatewayError, Query, QueryGateway, Row};

const APPLICATIONS: &str = "applications";
const CANDIDATE_PROFILES: &str = "candidate_profiles";
const COMPANIES: &str = "companies";
const INTERVIEWS: &str = "interviews";
const JOBS: &str = "jobs";
const RECRUITERS: &str = "recruiters";

/// Issues the store queries behind each endpoint and hands the rows to the matching aggregator.
///
/// Queries within one call run strictly one after another.
pub struct RecruitmentService<G> {
    gateway: Arc<G>,
}

impl<G> RecruitmentService<G>
where
    G: QueryGateway + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    async fn rows<T: serde::de::DeserializeOwned>(
        &self,
        query: Query,
    ) -> Result<Vec<T>, GatewayError> {
        fetch(&*self.gateway, &query).await
    }

    async fn count(&self, query: Query) -> Result<usize, GatewayError> {
        Ok(self.gateway.execute(&query).await?.len())
    }

    pub async fn companies(&self) -> Result<Vec<Row>, RecruitmentServiceError> {
        Ok(self.gateway.execute(&Query::select(COMPANIES, &["*"])).await?)
    }

    pub async fn interviews(&self) -> Result<Vec<Row>, RecruitmentServiceError> {
        Ok(self.gateway.execute(&Query::select(INTERVIEWS, &["*"])).await?)
    }

    pub async fn recruiters(&self) -> Result<Vec<Row>, RecruitmentServiceError> {
        Ok(self.gateway.execute(&Query::select(RECRUITERS, &["*"])).await?)
    }

    /// Every job posting.
    pub async fn offers(&self) -> Result<Vec<Row>, RecruitmentServiceError> {
        Ok(self.gateway.execute(&Query::select(JOBS, &["*"])).await?)
    }

    /// Job postings of every company the recruiter manages.
    pub async fn offers_by_recruiter(
        &self,
        recruiter_id: &str,
    ) -> Result<Vec<Row>, RecruitmentServiceError> {
        let companies: Vec<Company> = self
            .rows(Query::select(COMPANIES, &["id"]).eq("recruiter_id", recruiter_id))
            .await?;
        if companies.is_empty() {
            return Ok(Vec::new());
        }

        let company_ids: Vec<String> = companies
            .into_iter()
            .filter_map(|company| company.id)
            .map(|id| id.0)
            .collect();

        Ok(self
            .gateway
            .execute(&Query::select(JOBS, &["*"]).in_("company_id", company_ids))
            .await?)
    }

    pub async fn summary(&self) -> Result<DashboardSummary, RecruitmentServiceError> {
        let applied = self.count(Query::select(APPLICATIONS, &["id"])).await?;
        let hired = self
            .count(Query::select(APPLICATIONS, &["id"]).eq("status", "hired"))
            .await?;
        let open_positions = self.count(Query::select(JOBS, &["id"])).await?;
        Ok(dashboard::dashboard_summary(applied, hired, open_positions))
    }

    pub async fn job_stats(&self) -> Result<Vec<MonthStats>, RecruitmentServiceError> {
        let applications: Vec<Application> = self
            .rows(Query::select(APPLICATIONS, &["created_at", "status"]))
            .await?;
        Ok(dashboard::job_stats(&applications)?)
    }

    pub async fn application_progression(
        &self,
    ) -> Result<ApplicationProgression, RecruitmentServiceError> {
        let applications = self.statuses().await?;
        Ok(dashboard::application_progression(&applications))
    }

    pub async fn offer_acceptance(&self) -> Result<OfferAcceptance, RecruitmentServiceError> {
        let applications = self.statuses().await?;
        Ok(dashboard::offer_acceptance(&applications))
    }

    pub async fn application_funnel(&self) -> Result<ApplicationFunnel, RecruitmentServiceError> {
        let applications = self.statuses().await?;
        Ok(dashboard::application_funnel(&applications))
    }

    async fn statuses(&self) -> Result<Vec<Application>, GatewayError> {
        self.rows(Query::select(APPLICATIONS, &["status"])).await
    }

    pub async fn source_of_hire(&self) -> Result<Vec<SourceShare>, RecruitmentServiceError> {
        let profiles = self.profiles(&["source"]).await?;
        Ok(dashboard::source_of_hire(&profiles))
    }

    pub fn lgbtq_inclusion(&self) -> InclusionSnapshot {
        dashboard::lgbtq_inclusion()
    }

    pub async fn candidates_by_location(
        &self,
    ) -> Result<Vec<LocationCount>, RecruitmentServiceError> {
        let profiles = self.profiles(&["location"]).await?;
        Ok(dashboard::candidates_by_location(&profiles))
    }

    pub async fn average_candidate_score(
        &self,
    ) -> Result<AverageCandidateScore, RecruitmentServiceError> {
        let profiles = self.profiles(&["skills_score", "context_score"]).await?;
        Ok(dashboard::average_candidate_score(&profiles))
    }

    pub async fn top_skills(&self) -> Result<Vec<SkillCount>, RecruitmentServiceError> {
        let profiles = self.profiles(&["skills"]).await?;
        Ok(dashboard::top_skills(&profiles))
    }

    pub async fn gender_diversity(&self) -> Result<Vec<GenderShare>, RecruitmentServiceError> {
        let profiles = self.profiles(&["gender"]).await?;
        Ok(dashboard::gender_diversity(&profiles))
    }

    async fn profiles(&self, columns: &[&str]) -> Result<Vec<CandidateProfile>, GatewayError> {
        self.rows(Query::select(CANDIDATE_PROFILES, columns)).await
    }

    pub async fn jobs_by_company(&self) -> Result<Vec<CompanyJobCount>, RecruitmentServiceError> {
        let jobs: Vec<Job> = self.rows(Query::select(JOBS, &["company_id"])).await?;
        let companies: Vec<Company> = self.rows(Query::select(COMPANIES, &["id", "name"])).await?;
        Ok(dashboard::jobs_by_company(&jobs, &companies))
    }

    pub async fn recruiter_performance(
        &self,
    ) -> Result<Vec<RecruiterPerformance>, RecruitmentServiceError> {
        let recruiters: Vec<Recruiter> = self
            .rows(Query::select(RECRUITERS, &["id", "full_name"]))
            .await?;
        let companies: Vec<Company> = self
            .rows(Query::select(COMPANIES, &["id", "recruiter_id"]))
            .await?;
        let jobs: Vec<Job> = self.rows(Query::select(JOBS, &["id", "company_id"])).await?;
        let applications: Vec<Application> = self
            .rows(Query::select(APPLICATIONS, &["job_id", "status"]))
            .await?;
        Ok(dashboard::recruiter_performance(
            &recruiters,
            &companies,
            &jobs,
            &applications,
        ))
    }

    pub async fn time_to_hire(&self) -> Result<TimeToHire, RecruitmentServiceError> {
        self.time_to_hire_at(Utc::now().naive_utc()).await
    }

    pub async fn time_to_hire_at(
        &self,
        now: NaiveDateTime,
    ) -> Result<TimeToHire, RecruitmentServiceError> {
        let applications: Vec<Application> = self
            .rows(Query::select(APPLICATIONS, &["created_at", "status"]))
            .await?;
        Ok(dashboard::time_to_hire(&applications, now))
    }

    pub async fn job_popularity(&self) -> Result<Vec<JobPopularity>, RecruitmentServiceError> {
        let applications: Vec<Application> =
            self.rows(Query::select(APPLICATIONS, &["job_id"])).await?;
        let jobs: Vec<Job> = self.rows(Query::select(JOBS, &["id", "title"])).await?;
        Ok(dashboard::job_popularity(&applications, &jobs))
    }
}

/// Error raised while producing a recruitment view.
#[derive(Debug, thiserror::Error)]
pub enum RecruitmentServiceError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}
