use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::db;
use crate::matching::cache::DEFAULT_CACHE_ENTRIES;
use crate::matching::{CompatibilityScorer, JobRanker, ScoreCache, Scorer};
use crate::models::{CandidateProfile, JobPosting};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

/// Run the HTTP API until the process receives Ctrl-C.
pub async fn serve(config: &Config, listen_addr: &str) -> anyhow::Result<()> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required to serve")?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(database_url).await?;

    if config.run_migrations {
        tracing::info!("Running database migrations...");
        db::run_migrations(&pool).await?;
        tracing::info!("Migrations complete");
    }

    if config.admin_token_sha256.is_none() {
        tracing::warn!("ADMIN_TOKEN_SHA256 not set; admin match routes will reject every request");
    }

    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        scorer: build_scorer(config.score_cache),
        ranker: config.ranking.ranker_settings(),
        admin_match_limit: config.ranking.admin_match_limit,
        admin_token_sha256: config.admin_token_sha256.clone(),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!("Listening on {listen_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received, exiting gracefully");
        })
        .await?;

    Ok(())
}

pub fn build_scorer(cached: bool) -> Arc<dyn Scorer> {
    let scorer = CompatibilityScorer::default();
    if cached {
        tracing::info!("Score cache enabled ({DEFAULT_CACHE_ENTRIES} entries)");
        Arc::new(ScoreCache::new(scorer, DEFAULT_CACHE_ENTRIES))
    } else {
        Arc::new(scorer)
    }
}

/// Print the score breakdown for one job/candidate pair.
pub async fn score(job: &Path, candidate: &Path) -> anyhow::Result<()> {
    let job: JobPosting = read_json(job).await?;
    let candidate: CandidateProfile = read_json(candidate).await?;

    let result = CompatibilityScorer::default().score(&job, &candidate);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Print the ranked recommendations for one candidate over a job list.
pub async fn recommend(config: &Config, candidate: &Path, jobs: &Path) -> anyhow::Result<()> {
    let candidate: CandidateProfile = read_json(candidate).await?;
    let jobs: Vec<JobPosting> = read_json(jobs).await?;

    let scorer = CompatibilityScorer::default();
    let ranked = JobRanker::new(&scorer, config.ranking.ranker_settings()).recommend(
        &candidate,
        &jobs,
        Utc::now(),
    );
    tracing::info!("Kept {} of {} jobs", ranked.len(), jobs.len());
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_json_reports_missing_file() {
        let err = read_json::<JobPosting>(Path::new("/nonexistent/job.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[tokio::test]
    async fn read_json_parses_records() {
        let path = std::env::temp_dir().join(format!("jobmatch-job-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"id": 3, "skills": "rust"}"#)
            .await
            .unwrap();
        let job: JobPosting = read_json(&path).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;
        assert_eq!(job.id, 3);
        assert_eq!(job.skills, "rust");
    }

    #[test]
    fn cached_and_plain_scorers_agree() {
        let job = JobPosting {
            skills: "go".into(),
            ..Default::default()
        };
        let candidate = CandidateProfile {
            skills: vec!["go".into()],
            ..Default::default()
        };
        assert_eq!(
            build_scorer(true).score(&job, &candidate),
            build_scorer(false).score(&job, &candidate)
        );
    }
}
