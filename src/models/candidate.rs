use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::parse::leading_integer;

/// A candidate profile as the matching engine reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct CandidateProfile {
    pub id: i32,
    pub name: String,
    pub skills: Vec<String>,
    #[sqlx(json)]
    pub experience: Vec<ExperienceEntry>,
    /// Ordered oldest to highest; the last entry is the highest qualification.
    #[sqlx(json)]
    pub qualifications: Vec<Qualification>,
    pub expected_salary: Option<i64>,
    pub address: String,
    pub updated_at: DateTime<Utc>,
}

impl CandidateProfile {
    /// Sum of all experience durations in whole years.
    pub fn total_experience_years(&self) -> i64 {
        self.experience
            .iter()
            .map(ExperienceEntry::years)
            .fold(0, i64::saturating_add)
    }

    pub fn highest_degree(&self) -> Option<&str> {
        self.qualifications.last().map(|q| q.degree.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<DurationValue>,
}

impl ExperienceEntry {
    pub fn years(&self) -> i64 {
        self.duration.as_ref().map_or(0, DurationValue::years)
    }
}

/// Experience duration as profiles store it: a number of years or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl DurationValue {
    /// Whole years; the leading integer of text, truncation of numbers, 0 otherwise.
    pub fn years(&self) -> i64 {
        match self {
            DurationValue::Number(n) if n.is_finite() => n.trunc() as i64,
            DurationValue::Number(_) => 0,
            DurationValue::Text(text) => leading_integer(text).unwrap_or(0),
            DurationValue::Other(_) => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Qualification {
    pub degree: String,
    pub institution: Option<String>,
}
