use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub applied_candidates: usize,
    pub hired_candidates: usize,
    pub open_positions: usize,
    pub avg_cost_per_hire: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthStats {
    pub month: String,
    pub applications: usize,
    pub hired: usize,
}

/// Counts per named pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationProgression {
    pub applied: usize,
    pub shortlisted_round1: usize,
    pub shortlisted_round2: usize,
    pub hired: usize,
}

/// Stage counts plus each stage's share of every application, whatever its status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationFunnel {
    pub applied: usize,
    pub shortlisted_round1: usize,
    pub shortlisted_round2: usize,
    pub hired: usize,
    pub applied_percent: u32,
    pub shortlisted_round1_percent: u32,
    pub shortlisted_round2_percent: u32,
    pub hired_percent: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OfferAcceptance {
    pub accepted: u32,
    pub rejected: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceShare {
    pub source: String,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderShare {
    pub gender: String,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InclusionSnapshot {
    pub applied: u32,
    pub interviewed: u32,
    pub hired: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageCandidateScore {
    pub avg_skills_score: f64,
    pub avg_context_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyJobCount {
    pub company: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecruiterPerformance {
    pub recruiter: String,
    pub applied: usize,
    pub hired: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeToHire {
    pub average_days: f64,
    pub min_days: i64,
    pub max_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPopularity {
    pub job: String,
    pub applications: usize,
}
