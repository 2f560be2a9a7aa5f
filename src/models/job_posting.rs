use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as the matching engine reads it.
///
/// Text fields are free-form and parsed heuristically at scoring time, so a
/// missing field deserializes to an empty string rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct JobPosting {
    pub id: i32,
    pub title: String,
    /// Comma-separated skill tokens, e.g. `"react, node, sql"`.
    pub skills: String,
    /// Prose such as `"3-5 years"`; the first integer is the requirement.
    pub experience_required: String,
    /// Prose such as `"6-10 LPA"`; the last integer is the upper bound.
    pub salary_range: String,
    pub location: String,
    pub min_qualification: String,
    pub is_active: bool,
    pub fulfilled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// Open for candidate-facing recommendation.
    pub fn is_open(&self) -> bool {
        self.is_active && !self.fulfilled
    }
}
