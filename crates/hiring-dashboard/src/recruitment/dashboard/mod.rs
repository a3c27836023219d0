//! Aggregators behind the analytics dashboard.
//!
//! Every function here is pure: it takes decoded rows and returns a serializable view. Fetching
//! rows is the service's job.

mod grouping;
mod join;
mod joins;
mod rates;
mod tally;
pub mod views;

pub use grouping::{
    application_progression, candidates_by_location, gender_diversity, job_stats,
    source_of_hire, top_skills, TOP_SKILLS_LIMIT,
};
pub use joins::{job_popularity, jobs_by_company, recruiter_performance, JOB_POPULARITY_LIMIT};
pub use rates::{
    application_funnel, average_candidate_score, dashboard_summary, lgbtq_inclusion,
    offer_acceptance, time_to_hire, AVG_COST_PER_HIRE,
};
