use std::cmp::Reverse;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::Scorer;
use super::scorer::MatchFactors;
use crate::models::{CandidateProfile, JobPosting};

pub const DEFAULT_WINDOW_DAYS: i64 = 90;
pub const DEFAULT_TOP_PERCENT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankerSettings {
    /// Jobs older than this many days are not recommended.
    pub window_days: i64,
    /// Share of the ranked list kept, by count, rounded up.
    pub top_percent: u32,
}

impl Default for RankerSettings {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            top_percent: DEFAULT_TOP_PERCENT,
        }
    }
}

impl RankerSettings {
    /// Number of results kept from `ranked` eligible jobs; at least one unless empty.
    pub fn keep_count(&self, ranked: usize) -> usize {
        if ranked == 0 {
            return 0;
        }
        let percent = self.top_percent.min(100) as usize;
        ranked.saturating_mul(percent).div_ceil(100).max(1)
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        TimeDelta::try_days(self.window_days)
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A recommended job with its score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub compatibility_score: u8,
    pub match_factors: MatchFactors,
}

/// Candidate-facing recommendation: eligibility window, scoring, ordering
/// and percentile truncation.
pub struct JobRanker<'a> {
    scorer: &'a dyn Scorer,
    settings: RankerSettings,
}

impl<'a> JobRanker<'a> {
    pub fn new(scorer: &'a dyn Scorer, settings: RankerSettings) -> Self {
        Self { scorer, settings }
    }

    pub fn is_eligible(&self, job: &JobPosting, now: DateTime<Utc>) -> bool {
        job.is_open() && job.created_at >= self.settings.cutoff(now)
    }

    /// Top share of eligible `jobs` for `candidate`, best first.
    ///
    /// Ties on score go to the more recently created job. `now` anchors the
    /// eligibility window.
    pub fn recommend(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        now: DateTime<Utc>,
    ) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .filter(|job| self.is_eligible(job, now))
            .map(|job| {
                let result = self.scorer.score(job, candidate);
                RankedJob {
                    job: job.clone(),
                    compatibility_score: result.overall_score,
                    match_factors: result.factors,
                }
            })
            .collect();

        ranked.sort_by_key(|r| (Reverse(r.compatibility_score), Reverse(r.job.created_at)));

        let eligible = ranked.len();
        ranked.truncate(self.settings.keep_count(eligible));

        tracing::debug!(
            candidate_id = candidate.id,
            offered = jobs.len(),
            eligible,
            kept = ranked.len(),
            "ranked job recommendations"
        );
        ranked
    }
}
