use super::super::domain::{Application, ApplicationStatus, CandidateProfile, TimestampError};
use super::tally::{percentage, Grouping, Tally};
use super::views::{
    ApplicationProgression, GenderShare, LocationCount, MonthStats, SkillCount, SourceShare,
};

pub const TOP_SKILLS_LIMIT: usize = 10;

pub fn application_progression(applications: &[Application]) -> ApplicationProgression {
    applications
        .iter()
        .fold(ApplicationProgression::default(), |mut counts, application| {
            match application.status {
                Some(ApplicationStatus::Applied) => counts.applied += 1,
                Some(ApplicationStatus::ShortlistedRound1) => counts.shortlisted_round1 += 1,
                Some(ApplicationStatus::ShortlistedRound2) => counts.shortlisted_round2 += 1,
                Some(ApplicationStatus::Hired) => counts.hired += 1,
                _ => {}
            }
            counts
        })
}

fn shares<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize, u32)> {
    let tally: Tally<&str> = labels.collect();
    let total = tally.total();
    tally
        .into_entries()
        .into_iter()
        .map(|(label, count)| (label.to_string(), count, percentage(count, total)))
        .collect()
}

pub fn source_of_hire(profiles: &[CandidateProfile]) -> Vec<SourceShare> {
    shares(profiles.iter().map(CandidateProfile::source_label))
        .into_iter()
        .map(|(source, count, percentage)| SourceShare {
            source,
            count,
            percentage,
        })
        .collect()
}

pub fn gender_diversity(profiles: &[CandidateProfile]) -> Vec<GenderShare> {
    shares(profiles.iter().map(CandidateProfile::gender_label))
        .into_iter()
        .map(|(gender, count, percentage)| GenderShare {
            gender,
            count,
            percentage,
        })
        .collect()
}

pub fn candidates_by_location(profiles: &[CandidateProfile]) -> Vec<LocationCount> {
    let tally: Tally<&str> = profiles
        .iter()
        .map(CandidateProfile::location_label)
        .collect();
    tally
        .into_entries()
        .into_iter()
        .map(|(location, count)| LocationCount {
            location: location.to_string(),
            count,
        })
        .collect()
}

/// Skill mentions across all profiles, case-folded, most frequent first.
pub fn top_skills(profiles: &[CandidateProfile]) -> Vec<SkillCount> {
    let tally: Tally<String> = profiles
        .iter()
        .flat_map(CandidateProfile::skills)
        .map(|skill| skill.to_lowercase())
        .collect();
    tally
        .top(TOP_SKILLS_LIMIT)
        .into_iter()
        .map(|(skill, count)| SkillCount { skill, count })
        .collect()
}

/// Applications and hires per calendar month name. Months from different years share a bucket.
pub fn job_stats(applications: &[Application]) -> Result<Vec<MonthStats>, TimestampError> {
    let mut months: Grouping<String, (usize, usize)> = Grouping::default();
    for application in applications {
        let month = application.created_at()?.format("%b").to_string();
        let (total, hired) = months.slot(month);
        *total += 1;
        if application.is_hired() {
            *hired += 1;
        }
    }

    Ok(months
        .into_entries()
        .into_iter()
        .map(|(month, (applications, hired))| MonthStats {
            month,
            applications,
            hired,
        })
        .collect())
}
