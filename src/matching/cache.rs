//! Memoized scoring.
//!
//! Results are keyed by both record ids and both `updated_at` stamps, so any
//! edit to either record lands on a fresh key and stale scores are never
//! returned. The scorer underneath stays pure; this layer only remembers.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::Scorer;
use super::scorer::{CompatibilityResult, CompatibilityScorer};
use crate::models::{CandidateProfile, JobPosting};

pub const DEFAULT_CACHE_ENTRIES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreKey {
    pub job_id: i32,
    pub candidate_id: i32,
    pub job_updated_at: DateTime<Utc>,
    pub candidate_updated_at: DateTime<Utc>,
}

impl ScoreKey {
    pub fn new(job: &JobPosting, candidate: &CandidateProfile) -> Self {
        Self {
            job_id: job.id,
            candidate_id: candidate.id,
            job_updated_at: job.updated_at,
            candidate_updated_at: candidate.updated_at,
        }
    }
}

pub struct ScoreCache {
    scorer: CompatibilityScorer,
    entries: DashMap<ScoreKey, CompatibilityResult>,
    max_entries: usize,
}

impl ScoreCache {
    pub fn new(scorer: CompatibilityScorer, max_entries: usize) -> Self {
        Self {
            scorer,
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn get(&self, key: &ScoreKey) -> Option<CompatibilityResult> {
        self.entries.get(key).map(|hit| *hit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Scorer for ScoreCache {
    fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> CompatibilityResult {
        let key = ScoreKey::new(job, candidate);
        if let Some(hit) = self.get(&key) {
            return hit;
        }

        let result = self.scorer.score(job, candidate);
        // Superseded keys are never read again; a full flush bounds memory.
        if self.entries.len() >= self.max_entries {
            tracing::debug!(entries = self.entries.len(), "score cache full, flushing");
            self.entries.clear();
        }
        self.entries.insert(key, result);
        result
    }
}
