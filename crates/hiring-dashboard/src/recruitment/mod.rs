//! Recruitment pipeline analytics: typed store rows, dashboard aggregators, and the HTTP
//! surface that serves them.

pub mod dashboard;
pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationStatus, CandidateProfile, Company, Job, RecordId, Recruiter,
    TimestampError,
};
pub use router::recruitment_router;
pub use service::{RecruitmentService, RecruitmentServiceError};
