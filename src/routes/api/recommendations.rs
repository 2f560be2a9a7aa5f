use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;

use crate::error::AppError;
use crate::matching::{CompatibilityResult, JobRanker, RankedJob, Scorer};
use crate::state::AppState;

/// GET /api/v1/candidates/{id}/recommendations
pub async fn for_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<RankedJob>>, AppError> {
    let now = Utc::now();
    let candidate = state.store.candidate(id).await?;
    let jobs = state.store.open_jobs(state.ranker.cutoff(now)).await?;

    let ranked =
        JobRanker::new(state.scorer.as_ref(), state.ranker).recommend(&candidate, &jobs, now);
    tracing::info!(
        "Recommended {} of {} open jobs to candidate {id}",
        ranked.len(),
        jobs.len()
    );
    Ok(Json(ranked))
}

/// GET /api/v1/jobs/{job_id}/compatibility/{candidate_id}
pub async fn compatibility(
    State(state): State<AppState>,
    Path((job_id, candidate_id)): Path<(i32, i32)>,
) -> Result<Json<CompatibilityResult>, AppError> {
    let job = state.store.job(job_id).await?;
    let candidate = state.store.candidate(candidate_id).await?;
    Ok(Json(state.scorer.score(&job, &candidate)))
}
