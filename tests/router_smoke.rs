use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;
use tower::ServiceExt;

use jobmatch::auth::hash_token;
use jobmatch::error::AppError;
use jobmatch::matching::{CompatibilityScorer, RankerSettings};
use jobmatch::models::{CandidateProfile, DurationValue, ExperienceEntry, JobPosting, Qualification};
use jobmatch::routes::build_router;
use jobmatch::state::AppState;
use jobmatch::store::MatchStore;

const ADMIN_TOKEN: &str = "admin-test-token";

struct MemoryStore {
    jobs: Vec<JobPosting>,
    candidates: Vec<CandidateProfile>,
    healthy: bool,
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::Internal("store offline".into()))
        }
    }

    async fn job(&self, id: i32) -> Result<JobPosting, AppError> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }

    async fn candidate(&self, id: i32) -> Result<CandidateProfile, AppError> {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
    }

    async fn open_jobs(&self, since: DateTime<Utc>) -> Result<Vec<JobPosting>, AppError> {
        Ok(self
            .jobs
            .iter()
            .filter(|j| j.is_open() && j.created_at >= since)
            .cloned()
            .collect())
    }

    async fn active_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.iter().filter(|j| j.is_open()).cloned().collect())
    }

    async fn candidates(&self) -> Result<Vec<CandidateProfile>, AppError> {
        Ok(self.candidates.clone())
    }
}

fn job(id: i32, skills: &str, days_old: i64) -> JobPosting {
    let created_at = Utc::now() - TimeDelta::days(days_old);
    JobPosting {
        id,
        title: format!("Job {id}"),
        skills: skills.into(),
        experience_required: "3-5 years".into(),
        salary_range: "6-10 LPA".into(),
        location: "Remote".into(),
        min_qualification: "Bachelor's Degree".into(),
        is_active: true,
        fulfilled: false,
        created_at,
        updated_at: created_at,
    }
}

fn seeker() -> CandidateProfile {
    CandidateProfile {
        id: 1,
        name: "Asha".into(),
        skills: vec!["react".into(), "sql".into()],
        experience: vec![ExperienceEntry {
            duration: Some(DurationValue::Number(4.0)),
            ..Default::default()
        }],
        qualifications: vec![Qualification {
            degree: "Bachelor".into(),
            institution: None,
        }],
        expected_salary: Some(9),
        address: "Remote".into(),
        updated_at: Utc::now(),
    }
}

fn app_with(healthy: bool) -> axum::Router {
    let mut stale = job(3, "react, node, sql", 120);
    stale.title = "Stale".into();
    let store = MemoryStore {
        jobs: vec![
            job(1, "react,node,sql", 2),
            job(2, "java, spring", 1),
            stale,
        ],
        candidates: vec![seeker()],
        healthy,
    };

    build_router(AppState {
        store: Arc::new(store),
        scorer: Arc::new(CompatibilityScorer::default()),
        ranker: RankerSettings::default(),
        admin_match_limit: 10,
        admin_token_sha256: Some(hash_token(ADMIN_TOKEN)),
    })
}

fn app() -> axum::Router {
    app_with(true)
}

async fn get(app: axum::Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn probes_report_store_health() {
    let (status, _) = get(app(), "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app(), "/readyz", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app_with(false), "/readyz", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn recommendations_keep_the_best_recent_job() {
    let (status, body) = get(app(), "/api/v1/candidates/1/recommendations", None).await;
    assert_eq!(status, StatusCode::OK);

    let ranked = body.as_array().unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0]["id"], 1);
    assert_eq!(ranked[0]["compatibility_score"], 89);
    assert_eq!(ranked[0]["match_factors"]["skills_score"], 67);
    assert_eq!(ranked[0]["match_factors"]["salary_score"], 90);
}

#[tokio::test]
async fn compatibility_for_one_pair() {
    let (status, body) = get(app(), "/api/v1/jobs/2/compatibility/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["factors"]["skills_score"], 0);
    assert_eq!(body["factors"]["location_score"], 100);

    let (status, body) = get(app(), "/api/v1/jobs/99/compatibility/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job 99 not found");
}

#[tokio::test]
async fn admin_routes_require_token() {
    let (status, _) = get(app(), "/api/v1/admin/jobs/1/matches", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get(app(), "/api/v1/admin/jobs/1/matches", Some("wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_job_matches_include_breakdown() {
    let (status, body) = get(app(), "/api/v1/admin/jobs/1/matches", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);

    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["candidate_id"], 1);
    assert_eq!(matches[0]["score"], 89);
    assert_eq!(matches[0]["skills_match"][0]["skill"], "react");
    assert_eq!(matches[0]["skills_match"][0]["matched"], true);
    assert_eq!(matches[0]["experience_match"], true);
    assert_eq!(matches[0]["salary_match"], true);
}

#[tokio::test]
async fn admin_candidate_matches_ignore_the_window() {
    let (status, body) =
        get(app(), "/api/v1/admin/candidates/1/matches", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["job_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[2], 2);
}
