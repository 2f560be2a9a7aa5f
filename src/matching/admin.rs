use std::cmp::Reverse;

use serde::Serialize;

use super::Scorer;
use super::scorer::{max_salary, required_experience};
use crate::models::{CandidateProfile, JobPosting};

pub const DEFAULT_MATCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMatch {
    pub skill: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    pub candidate_id: i32,
    pub candidate: CandidateProfile,
    pub score: u8,
    pub skills_match: Vec<SkillMatch>,
    pub experience_match: bool,
    pub salary_match: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch {
    pub job_id: i32,
    pub job: JobPosting,
    pub score: u8,
}

/// For each candidate skill, whether the posting lists it verbatim.
pub fn skill_breakdown(job: &JobPosting, candidate: &CandidateProfile) -> Vec<SkillMatch> {
    let listed: Vec<&str> = job
        .skills
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    candidate
        .skills
        .iter()
        .map(|skill| SkillMatch {
            skill: skill.clone(),
            matched: listed.contains(&skill.as_str()),
        })
        .collect()
}

/// No stated requirement, or the summed experience covers it.
pub fn meets_experience(job: &JobPosting, candidate: &CandidateProfile) -> bool {
    let required = required_experience(job);
    required <= 0 || candidate.total_experience_years() >= required
}

/// Either side unknown, or the expectation fits under the posted maximum.
pub fn fits_salary(job: &JobPosting, candidate: &CandidateProfile) -> bool {
    let max = max_salary(job);
    match candidate.expected_salary {
        Some(expected) if expected > 0 && max > 0 => expected <= max,
        _ => true,
    }
}

/// Top-N lookups for manual shortlisting, in both directions.
///
/// Unlike [`JobRanker`](super::ranker::JobRanker) this applies no
/// eligibility window; callers pass whatever list they want scored.
pub struct AdminMatchFinder<'a> {
    scorer: &'a dyn Scorer,
    limit: usize,
}

impl<'a> AdminMatchFinder<'a> {
    pub fn new(scorer: &'a dyn Scorer, limit: usize) -> Self {
        Self { scorer, limit }
    }

    pub fn matches_for_job(
        &self,
        job: &JobPosting,
        candidates: &[CandidateProfile],
    ) -> Vec<CandidateMatch> {
        let mut matches: Vec<CandidateMatch> = candidates
            .iter()
            .map(|candidate| CandidateMatch {
                candidate_id: candidate.id,
                candidate: candidate.clone(),
                score: self.scorer.score(job, candidate).overall_score,
                skills_match: skill_breakdown(job, candidate),
                experience_match: meets_experience(job, candidate),
                salary_match: fits_salary(job, candidate),
            })
            .collect();

        matches.sort_by_key(|m| Reverse(m.score));
        matches.truncate(self.limit);

        tracing::debug!(
            job_id = job.id,
            scored = candidates.len(),
            kept = matches.len(),
            "matched candidates for job"
        );
        matches
    }

    pub fn matches_for_candidate(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
    ) -> Vec<JobMatch> {
        let mut matches: Vec<JobMatch> = jobs
            .iter()
            .map(|job| JobMatch {
                job_id: job.id,
                job: job.clone(),
                score: self.scorer.score(job, candidate).overall_score,
            })
            .collect();

        matches.sort_by_key(|m| Reverse(m.score));
        matches.truncate(self.limit);

        tracing::debug!(
            candidate_id = candidate.id,
            scored = jobs.len(),
            kept = matches.len(),
            "matched jobs for candidate"
        );
        matches
    }
}
