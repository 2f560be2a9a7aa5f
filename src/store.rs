use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{CandidateProfile, JobPosting};

/// Read-only access to the records the matching engine consumes.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Readiness probe for the backing store.
    async fn ping(&self) -> Result<(), AppError>;

    async fn job(&self, id: i32) -> Result<JobPosting, AppError>;

    async fn candidate(&self, id: i32) -> Result<CandidateProfile, AppError>;

    /// Active, unfulfilled jobs created at or after `since`.
    async fn open_jobs(&self, since: DateTime<Utc>) -> Result<Vec<JobPosting>, AppError>;

    /// Active, unfulfilled jobs of any age.
    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn candidates(&self) -> Result<Vec<CandidateProfile>, AppError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        let _: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn job(&self, id: i32) -> Result<JobPosting, AppError> {
        sqlx::query_as::<_, JobPosting>(
            "SELECT id, title, skills, experience_required, salary_range, location, min_qualification, is_active, fulfilled, created_at, updated_at FROM job_postings WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }

    async fn candidate(&self, id: i32) -> Result<CandidateProfile, AppError> {
        sqlx::query_as::<_, CandidateProfile>(
            "SELECT id, name, skills, experience, qualifications, expected_salary, address, updated_at FROM candidate_profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
    }

    async fn open_jobs(&self, since: DateTime<Utc>) -> Result<Vec<JobPosting>, AppError> {
        let jobs = sqlx::query_as::<_, JobPosting>(
            "SELECT id, title, skills, experience_required, salary_range, location, min_qualification, is_active, fulfilled, created_at, updated_at FROM job_postings WHERE is_active AND NOT fulfilled AND created_at >= $1 ORDER BY created_at DESC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let jobs = sqlx::query_as::<_, JobPosting>(
            "SELECT id, title, skills, experience_required, salary_range, location, min_qualification, is_active, fulfilled, created_at, updated_at FROM job_postings WHERE is_active AND NOT fulfilled ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    async fn candidates(&self) -> Result<Vec<CandidateProfile>, AppError> {
        let candidates = sqlx::query_as::<_, CandidateProfile>(
            "SELECT id, name, skills, experience, qualifications, expected_salary, address, updated_at FROM candidate_profiles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }
}
