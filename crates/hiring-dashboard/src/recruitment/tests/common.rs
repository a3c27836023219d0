use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::gateway::{GatewayError, InMemoryGateway, Query, QueryGateway, Row};
use crate::recruitment::domain::{
    Application, ApplicationStatus, CandidateProfile, Company, Job, RecordId, Recruiter,
};
use crate::recruitment::{recruitment_router, RecruitmentService};

pub(super) fn application(status: &str) -> Application {
    Application {
        status: Some(ApplicationStatus::from(status.to_string())),
        ..Application::default()
    }
}

pub(super) fn applications(statuses: &[(&str, usize)]) -> Vec<Application> {
    statuses
        .iter()
        .flat_map(|(status, count)| {
            std::iter::repeat_with(move || application(status)).take(*count)
        })
        .collect()
}

pub(super) fn created(status: &str, created_at: &str) -> Application {
    Application {
        created_at: Some(created_at.to_string()),
        ..application(status)
    }
}

pub(super) fn applying_to(job_id: &str, status: &str) -> Application {
    Application {
        job_id: Some(RecordId::from(job_id)),
        ..application(status)
    }
}

pub(super) fn job(id: &str, company_id: Option<&str>, title: &str) -> Job {
    Job {
        id: Some(RecordId::from(id)),
        company_id: company_id.map(RecordId::from),
        title: Some(title.to_string()),
    }
}

pub(super) fn company(id: &str, recruiter_id: Option<&str>, name: &str) -> Company {
    Company {
        id: Some(RecordId::from(id)),
        recruiter_id: recruiter_id.map(RecordId::from),
        name: Some(name.to_string()),
    }
}

pub(super) fn recruiter(id: &str, full_name: &str) -> Recruiter {
    Recruiter {
        id: Some(RecordId::from(id)),
        full_name: Some(full_name.to_string()),
    }
}

pub(super) fn sourced(source: Option<&str>) -> CandidateProfile {
    CandidateProfile {
        source: source.map(str::to_string),
        ..CandidateProfile::default()
    }
}

pub(super) fn skilled(skills: &[&str]) -> CandidateProfile {
    CandidateProfile {
        skills: Some(skills.iter().map(|skill| skill.to_string()).collect()),
        ..CandidateProfile::default()
    }
}

pub(super) fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 11)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid reference time")
}

/// A small but complete recruitment dataset exercising every dashboard view.
pub(super) fn fixture_gateway() -> InMemoryGateway {
    InMemoryGateway::new()
        .with_table(
            "recruiters",
            vec![
                json!({ "id": 1, "full_name": "Ada Lovelace" }),
                json!({ "id": 2, "full_name": "Grace Hopper" }),
            ],
        )
        .with_table(
            "companies",
            vec![
                json!({ "id": 10, "recruiter_id": 1, "name": "Acme" }),
                json!({ "id": 11, "recruiter_id": 2, "name": "Globex" }),
                json!({ "id": 12, "recruiter_id": null, "name": "Initech" }),
            ],
        )
        .with_table(
            "jobs",
            vec![
                json!({ "id": 100, "company_id": 10, "title": "Backend Engineer" }),
                json!({ "id": 101, "company_id": 11, "title": "Data Analyst" }),
                json!({ "id": 102, "company_id": 12, "title": "Designer" }),
                json!({ "id": 103, "company_id": 99, "title": "Orphan" }),
            ],
        )
        .with_table(
            "applications",
            vec![
                json!({ "id": 1, "job_id": 100, "created_at": "2024-01-15T09:00:00.000000", "status": "applied" }),
                json!({ "id": 2, "job_id": 100, "created_at": "2024-01-20T09:00:00.000000", "status": "hired" }),
                json!({ "id": 3, "job_id": 101, "created_at": "2024-02-03T09:00:00.000000", "status": "shortlisted_round1" }),
                json!({ "id": 4, "job_id": 102, "created_at": "2024-02-10T09:00:00.000000", "status": "rejected" }),
                json!({ "id": 5, "job_id": 103, "created_at": "2024-03-01T09:00:00.000000", "status": "hired" }),
            ],
        )
        .with_table(
            "interviews",
            vec![json!({ "id": 7, "application_id": 3, "round": 1 })],
        )
        .with_table(
            "candidate_profiles",
            vec![
                json!({
                    "source": "linkedin", "location": "Paris", "gender": "female",
                    "skills_score": 80, "context_score": 70, "skills": ["Rust", "SQL"]
                }),
                json!({
                    "source": "referral", "location": "Lyon", "gender": "male",
                    "skills_score": 60, "context_score": null, "skills": ["rust"]
                }),
                json!({
                    "location": "Paris", "gender": "female",
                    "skills_score": null, "context_score": 90, "skills": null
                }),
            ],
        )
}

pub(super) fn fixture_service() -> RecruitmentService<InMemoryGateway> {
    RecruitmentService::new(Arc::new(fixture_gateway()))
}

pub(super) fn router_with<G: QueryGateway + 'static>(gateway: G) -> axum::Router {
    recruitment_router(Arc::new(RecruitmentService::new(Arc::new(gateway))))
}

/// Gateway that answers every query with a transport failure.
pub(super) struct OfflineGateway;

#[async_trait]
impl QueryGateway for OfflineGateway {
    async fn execute(&self, _query: &Query) -> Result<Vec<Row>, GatewayError> {
        Err(GatewayError::Transport("store offline".to_string()))
    }
}

/// Wraps another gateway and records every query it forwards, in order.
pub(super) struct RecordingGateway<G> {
    inner: G,
    queries: Mutex<Vec<Query>>,
}

impl<G> RecordingGateway<G> {
    pub(super) fn new(inner: G) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn queries(&self) -> Vec<Query> {
        self.queries.lock().expect("query log poisoned").clone()
    }
}

#[async_trait]
impl<G: QueryGateway> QueryGateway for RecordingGateway<G> {
    async fn execute(&self, query: &Query) -> Result<Vec<Row>, GatewayError> {
        self.queries
            .lock()
            .expect("query log poisoned")
            .push(query.clone());
        self.inner.execute(query).await
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}
