use super::super::domain::{
    Application, Company, Job, RecordId, Recruiter, UNKNOWN_COMPANY, UNKNOWN_JOB,
    UNKNOWN_RECRUITER,
};
use super::join::lookup;
use super::tally::{Grouping, Tally};
use super::views::{CompanyJobCount, JobPopularity, RecruiterPerformance};

pub const JOB_POPULARITY_LIMIT: usize = 10;

/// Applications and hires per recruiter, following
/// `application.job_id -> job.company_id -> company.recruiter_id -> recruiter.full_name`.
///
/// Applications whose chain breaks before reaching a recruiter id are left out entirely. A
/// recruiter id with no matching recruiter row is reported under `"unknown"`.
pub fn recruiter_performance(
    recruiters: &[Recruiter],
    companies: &[Company],
    jobs: &[Job],
    applications: &[Application],
) -> Vec<RecruiterPerformance> {
    let recruiter_names = lookup(recruiters, |r| r.id.clone(), |r| r.full_name.clone());
    let company_recruiters = lookup(
        companies,
        |company| company.id.clone(),
        |company| company.recruiter_id.clone().filter(|id| !id.is_blank()),
    );
    let job_companies = lookup(jobs, |job| job.id.clone(), |job| job.company_id.clone());

    let mut performance: Grouping<&RecordId, (usize, usize)> = Grouping::default();
    for application in applications {
        let recruiter_id = application
            .job_id
            .as_ref()
            .and_then(|job_id| job_companies.get(job_id))
            .and_then(|company_id| company_recruiters.get(company_id));

        if let Some(recruiter_id) = recruiter_id {
            let (applied, hired) = performance.slot(recruiter_id);
            *applied += 1;
            if application.is_hired() {
                *hired += 1;
            }
        }
    }

    performance
        .into_entries()
        .into_iter()
        .map(|(recruiter_id, (applied, hired))| RecruiterPerformance {
            recruiter: recruiter_names
                .get(recruiter_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_RECRUITER.to_string()),
            applied,
            hired,
        })
        .collect()
}

/// Job count per company name. Jobs whose company cannot be resolved count toward `"unknown"`.
pub fn jobs_by_company(jobs: &[Job], companies: &[Company]) -> Vec<CompanyJobCount> {
    let company_names = lookup(
        companies,
        |company| company.id.clone(),
        |company| company.name.clone(),
    );

    let tally: Tally<&str> = jobs
        .iter()
        .map(|job| {
            job.company_id
                .as_ref()
                .and_then(|company_id| company_names.get(company_id))
                .map(String::as_str)
                .unwrap_or(UNKNOWN_COMPANY)
        })
        .collect();

    tally
        .into_entries()
        .into_iter()
        .map(|(company, job_count)| CompanyJobCount {
            company: company.to_string(),
            job_count,
        })
        .collect()
}

/// The most applied-to jobs, by title. Applications without a job reference are ignored.
pub fn job_popularity(applications: &[Application], jobs: &[Job]) -> Vec<JobPopularity> {
    let titles = lookup(jobs, |job| job.id.clone(), |job| job.title.clone());

    let tally: Tally<&RecordId> = applications.iter().filter_map(Application::job_ref).collect();

    tally
        .top(JOB_POPULARITY_LIMIT)
        .into_iter()
        .map(|(job_id, applications)| JobPopularity {
            job: titles
                .get(job_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_JOB.to_string()),
            applications,
        })
        .collect()
}
