use axum::Json;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::matching::{AdminMatchFinder, CandidateMatch, JobMatch};
use crate::state::AppState;

/// GET /api/v1/admin/jobs/{id}/matches
///
/// Scores every candidate on file against the job.
pub async fn job_matches(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<CandidateMatch>>, AppError> {
    let job = state.store.job(id).await?;
    let candidates = state.store.candidates().await?;

    let finder = AdminMatchFinder::new(state.scorer.as_ref(), state.admin_match_limit);
    Ok(Json(finder.matches_for_job(&job, &candidates)))
}

/// GET /api/v1/admin/candidates/{id}/matches
///
/// Scores every active, unfulfilled job against the candidate.
pub async fn candidate_matches(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let candidate = state.store.candidate(id).await?;
    let jobs = state.store.active_jobs().await?;

    let finder = AdminMatchFinder::new(state.scorer.as_ref(), state.admin_match_limit);
    Ok(Json(finder.matches_for_candidate(&candidate, &jobs)))
}
