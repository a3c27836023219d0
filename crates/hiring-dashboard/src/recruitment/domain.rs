//! Typed views over the rows the store returns.
//!
//! Queries project column subsets, so every field is optional. Fallback labels for absent or
//! `null` values are defined here once and read through accessor methods by the aggregators.

use chrono::{DateTime, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_SOURCE: &str = "other";
pub const UNKNOWN_LOCATION: &str = "unknown";
pub const UNKNOWN_GENDER: &str = "unknown";
pub const UNKNOWN_COMPANY: &str = "unknown";
pub const UNKNOWN_RECRUITER: &str = "unknown";
pub const UNKNOWN_JOB: &str = "Unknown";

/// Primary or foreign key value. The store may hand these out as integers or strings, so they
/// are normalized to their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(Self(text)),
            Value::Number(number) => Ok(Self(number.to_string())),
            other => Err(de::Error::custom(format!(
                "expected a string or numeric id, found {other}"
            ))),
        }
    }
}

/// Pipeline stage of an application. Statuses outside the named set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ApplicationStatus {
    Applied,
    ShortlistedRound1,
    ShortlistedRound2,
    Hired,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Applied => "applied",
            Self::ShortlistedRound1 => "shortlisted_round1",
            Self::ShortlistedRound2 => "shortlisted_round2",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "applied" => Self::Applied,
            "shortlisted_round1" => Self::ShortlistedRound1,
            "shortlisted_round2" => Self::ShortlistedRound2,
            "hired" => Self::Hired,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub job_id: Option<RecordId>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

impl Application {
    pub fn has_status(&self, status: &ApplicationStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    pub fn is_hired(&self) -> bool {
        self.has_status(&ApplicationStatus::Hired)
    }

    /// Job reference, treating a blank id like a missing one.
    pub fn job_ref(&self) -> Option<&RecordId> {
        self.job_id.as_ref().filter(|id| !id.is_blank())
    }

    pub fn created_at(&self) -> Result<NaiveDateTime, TimestampError> {
        let raw = self.created_at.as_deref().ok_or(TimestampError::Missing)?;
        parse_timestamp(raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub company_id: Option<RecordId>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub recruiter_id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recruiter {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub skills_score: Option<f64>,
    #[serde(default)]
    pub context_score: Option<f64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl CandidateProfile {
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(UNKNOWN_SOURCE)
    }

    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }

    pub fn gender_label(&self) -> &str {
        self.gender.as_deref().unwrap_or(UNKNOWN_GENDER)
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn skills_score_or_zero(&self) -> f64 {
        self.skills_score.unwrap_or(0.0)
    }

    pub fn context_score_or_zero(&self) -> f64 {
        self.context_score.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("application is missing created_at")]
    Missing,
    #[error("unparsable timestamp '{0}'")]
    Invalid(String),
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a store timestamp as a UTC wall-clock value. Offsets, when present, are folded into
/// UTC; naive values are taken as already being UTC.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TimestampError::Invalid(raw.to_string()))
}
