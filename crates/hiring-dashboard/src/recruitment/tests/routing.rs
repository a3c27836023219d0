use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;

use crate::gateway::InMemoryGateway;
use crate::recruitment::router::{offers_by_recruiter_handler, OffersByRecruiterParams};
use crate::recruitment::RecruitmentService;

#[tokio::test]
async fn offers_by_recruiter_requires_a_recruiter_id() {
    let response = router_with(fixture_gateway())
        .oneshot(get("/offers/by-recruiter"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "recruiter_id is required" })
    );
}

#[tokio::test]
async fn blank_recruiter_id_is_treated_as_missing() {
    let service = Arc::new(RecruitmentService::new(Arc::new(fixture_gateway())));
    let params = OffersByRecruiterParams {
        recruiter_id: Some("  ".to_string()),
    };

    let response = offers_by_recruiter_handler::<InMemoryGateway>(State(service), Query(params))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn offers_by_recruiter_returns_wrapped_jobs() {
    let response = router_with(fixture_gateway())
        .oneshot(get("/offers/by-recruiter?recruiter_id=2"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({ "offers": [{ "id": 101, "company_id": 11, "title": "Data Analyst" }] })
    );
}

#[tokio::test]
async fn unknown_recruiter_has_an_empty_offer_list() {
    let response = router_with(fixture_gateway())
        .oneshot(get("/offers/by-recruiter?recruiter_id=42"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "offers": [] }));
}

#[tokio::test]
async fn offers_surface_the_store_message_on_failure() {
    let response = router_with(OfflineGateway)
        .oneshot(get("/offers"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "data store request failed: store offline" })
    );
}

#[tokio::test]
async fn dashboard_failures_hide_store_details() {
    for uri in [
        "/companies",
        "/dashboard/summary",
        "/dashboard/recruiter-performance",
        "/dashboard/top-skills",
    ] {
        let response = router_with(OfflineGateway)
            .oneshot(get(uri))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(
            read_json_body(response).await,
            json!({ "error": "internal server error" }),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn inclusion_snapshot_is_served_without_the_store() {
    let response = router_with(OfflineGateway)
        .oneshot(get("/dashboard/lgbtq-inclusion"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({ "applied": 40, "interviewed": 24, "hired": 16 })
    );
}

#[tokio::test]
async fn job_stats_fail_on_unparsable_timestamps() {
    let gateway = InMemoryGateway::new().with_table(
        "applications",
        vec![json!({ "created_at": "soon", "status": "applied" })],
    );

    let response = router_with(gateway)
        .oneshot(get("/dashboard/job-stats"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn summary_uses_camel_case_keys() {
    let response = router_with(fixture_gateway())
        .oneshot(get("/dashboard/summary"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "appliedCandidates": 5,
            "hiredCandidates": 2,
            "openPositions": 4,
            "avgCostPerHire": 12
        })
    );
}

#[tokio::test]
async fn funnel_and_company_views_serialize_their_wire_names() {
    let router = router_with(fixture_gateway());

    let funnel = read_json_body(
        router
            .clone()
            .oneshot(get("/dashboard/application-funnel"))
            .await
            .expect("route executes"),
    )
    .await;
    assert_eq!(
        funnel,
        json!({
            "applied": 1,
            "shortlisted_round1": 1,
            "shortlisted_round2": 0,
            "hired": 2,
            "applied_percent": 20,
            "shortlisted_round1_percent": 20,
            "shortlisted_round2_percent": 0,
            "hired_percent": 40
        })
    );

    let companies = read_json_body(
        router
            .oneshot(get("/dashboard/jobs-by-company"))
            .await
            .expect("route executes"),
    )
    .await;
    assert_eq!(companies[0], json!({ "company": "Acme", "jobCount": 1 }));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let response = router_with(fixture_gateway())
        .oneshot(get("/dashboard/nope"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
