// Compatibility scoring engine: one scorer shared by candidate recommendations,
// admin shortlisting and the HTTP/CLI callers. Pure and synchronous.

pub mod admin;
pub mod cache;
pub mod parse;
pub mod ranker;
pub mod scorer;
pub mod weights;

pub use admin::{AdminMatchFinder, CandidateMatch, JobMatch, SkillMatch};
pub use cache::{ScoreCache, ScoreKey};
pub use ranker::{JobRanker, RankedJob, RankerSettings};
pub use scorer::{CompatibilityResult, CompatibilityScorer, MatchFactors};
pub use weights::{ScoringConfig, Weights};

use crate::models::{CandidateProfile, JobPosting};

/// Anything that can score a job against a candidate.
///
/// Implemented by the plain scorer and by the memoizing [`ScoreCache`], so
/// rankers accept either.
pub trait Scorer: Send + Sync {
    fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> CompatibilityResult;
}

impl Scorer for CompatibilityScorer {
    fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> CompatibilityResult {
        CompatibilityScorer::score(self, job, candidate)
    }
}
