use chrono::NaiveDateTime;
use tracing::debug;

use super::super::domain::{Application, ApplicationStatus, CandidateProfile};
use super::grouping::application_progression;
use super::tally::{percentage, round_to};
use super::views::{
    ApplicationFunnel, AverageCandidateScore, DashboardSummary, InclusionSnapshot,
    OfferAcceptance, TimeToHire,
};

/// Flat cost figure shown on the summary card until cost tracking exists in the store.
pub const AVG_COST_PER_HIRE: u32 = 12;

const SECONDS_PER_DAY: i64 = 86_400;

pub fn dashboard_summary(
    applied_candidates: usize,
    hired_candidates: usize,
    open_positions: usize,
) -> DashboardSummary {
    DashboardSummary {
        applied_candidates,
        hired_candidates,
        open_positions,
        avg_cost_per_hire: AVG_COST_PER_HIRE,
    }
}

/// Share of hired and rejected applications. Other statuses count toward neither, so the two
/// figures need not add up to 100.
pub fn offer_acceptance(applications: &[Application]) -> OfferAcceptance {
    let total = applications.len();
    let count = |status: ApplicationStatus| {
        applications
            .iter()
            .filter(|application| application.has_status(&status))
            .count()
    };

    OfferAcceptance {
        accepted: percentage(count(ApplicationStatus::Hired), total),
        rejected: percentage(count(ApplicationStatus::Rejected), total),
    }
}

pub fn application_funnel(applications: &[Application]) -> ApplicationFunnel {
    let total = applications.len();
    let stages = application_progression(applications);

    ApplicationFunnel {
        applied: stages.applied,
        shortlisted_round1: stages.shortlisted_round1,
        shortlisted_round2: stages.shortlisted_round2,
        hired: stages.hired,
        applied_percent: percentage(stages.applied, total),
        shortlisted_round1_percent: percentage(stages.shortlisted_round1, total),
        shortlisted_round2_percent: percentage(stages.shortlisted_round2, total),
        hired_percent: percentage(stages.hired, total),
    }
}

/// Days elapsed since each hired application was created, measured at `now`.
///
/// Whole days are floored, so a creation time later than `now` yields a negative count. Hired
/// applications with a missing or unparsable timestamp are skipped.
pub fn time_to_hire(applications: &[Application], now: NaiveDateTime) -> TimeToHire {
    let durations: Vec<i64> = applications
        .iter()
        .filter(|application| application.is_hired())
        .filter_map(|application| match application.created_at() {
            Ok(created) => Some((now - created).num_seconds().div_euclid(SECONDS_PER_DAY)),
            Err(err) => {
                debug!(error = %err, "skipping hire without usable timestamp");
                None
            }
        })
        .collect();

    let (Some(min_days), Some(max_days)) = (durations.iter().min(), durations.iter().max()) else {
        return TimeToHire::default();
    };

    let average = durations.iter().sum::<i64>() as f64 / durations.len() as f64;
    TimeToHire {
        average_days: round_to(average, 1),
        min_days: *min_days,
        max_days: *max_days,
    }
}

/// Mean scores over every profile; a missing score counts as zero but still counts as a profile.
pub fn average_candidate_score(profiles: &[CandidateProfile]) -> AverageCandidateScore {
    if profiles.is_empty() {
        return AverageCandidateScore::default();
    }

    let count = profiles.len() as f64;
    let skills: f64 = profiles
        .iter()
        .map(CandidateProfile::skills_score_or_zero)
        .sum();
    let context: f64 = profiles
        .iter()
        .map(CandidateProfile::context_score_or_zero)
        .sum();

    AverageCandidateScore {
        avg_skills_score: round_to(skills / count, 2),
        avg_context_score: round_to(context / count, 2),
    }
}

/// Placeholder figures until inclusion data is captured in the store.
pub fn lgbtq_inclusion() -> InclusionSnapshot {
    InclusionSnapshot {
        applied: 40,
        interviewed: 24,
        hired: 16,
    }
}
