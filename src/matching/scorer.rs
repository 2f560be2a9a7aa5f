use serde::{Deserialize, Serialize};

use super::parse::{first_integer, last_integer};
use super::weights::{ScoringConfig, Weights};
use crate::models::{CandidateProfile, JobPosting};

/// Score used whenever a factor lacks the data to be judged.
pub const NEUTRAL_SCORE: f64 = 50.0;
const LOCATION_MISMATCH_SCORE: f64 = 30.0;
const QUALIFICATION_STEP_PENALTY: f64 = 25.0;
const MAX_SCORE: f64 = 100.0;

/// The five sub-scores, rounded for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchFactors {
    pub skills_score: u8,
    pub experience_score: u8,
    pub salary_score: u8,
    pub location_score: u8,
    pub qualification_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub overall_score: u8,
    pub factors: MatchFactors,
}

/// Sub-scores at full precision, each already within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub skills: f64,
    pub experience: f64,
    pub salary: f64,
    pub location: f64,
    pub qualification: f64,
}

impl FactorScores {
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        self.skills * weights.skills
            + self.experience * weights.experience
            + self.qualification * weights.qualification
            + self.salary * weights.salary
            + self.location * weights.location
    }

    pub fn into_result(self, weights: &Weights) -> CompatibilityResult {
        CompatibilityResult {
            overall_score: round_score(self.weighted_total(weights)),
            factors: MatchFactors {
                skills_score: round_score(self.skills),
                experience_score: round_score(self.experience),
                salary_score: round_score(self.salary),
                location_score: round_score(self.location),
                qualification_score: round_score(self.qualification),
            },
        }
    }
}

fn round_score(value: f64) -> u8 {
    value.clamp(0.0, MAX_SCORE).round() as u8
}

fn bounded(value: f64) -> f64 {
    value.clamp(0.0, MAX_SCORE)
}

/// Required years of experience: the first integer in the posting's text, 0 if absent.
pub fn required_experience(job: &JobPosting) -> i64 {
    first_integer(&job.experience_required).unwrap_or(0)
}

/// Upper salary bound: the last integer in the posting's range, 0 if absent.
pub fn max_salary(job: &JobPosting) -> i64 {
    last_integer(&job.salary_range).unwrap_or(0)
}

/// Comma-split, trimmed, lowercased skill tokens; empty tokens dropped.
pub fn job_skill_tokens(job: &JobPosting) -> Vec<String> {
    job.skills
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Deterministic, side-effect free compatibility scorer.
///
/// Every factor falls back to [`NEUTRAL_SCORE`] when its inputs are missing,
/// so scoring never fails.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    config: ScoringConfig,
}

impl CompatibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> CompatibilityResult {
        self.factor_scores(job, candidate).into_result(&self.config.weights)
    }

    pub fn factor_scores(&self, job: &JobPosting, candidate: &CandidateProfile) -> FactorScores {
        FactorScores {
            skills: self.score_skills(job, candidate),
            experience: self.score_experience(job, candidate),
            salary: self.score_salary(job, candidate),
            location: self.score_location(job, candidate),
            qualification: self.score_qualification(job, candidate),
        }
    }

    fn score_skills(&self, job: &JobPosting, candidate: &CandidateProfile) -> f64 {
        let tokens = job_skill_tokens(job);
        if tokens.is_empty() {
            return NEUTRAL_SCORE;
        }

        let matched = candidate
            .skills
            .iter()
            .map(|skill| skill.trim().to_lowercase())
            .filter(|skill| !skill.is_empty())
            .filter(|skill| tokens.iter().any(|token| token.contains(skill.as_str())))
            .count();

        bounded(matched as f64 / tokens.len() as f64 * MAX_SCORE)
    }

    fn score_experience(&self, job: &JobPosting, candidate: &CandidateProfile) -> f64 {
        let total = candidate.total_experience_years();
        let required = required_experience(job);

        if required > 0 {
            bounded(total as f64 / required as f64 * MAX_SCORE)
        } else if total > 0 {
            MAX_SCORE
        } else {
            NEUTRAL_SCORE
        }
    }

    fn score_salary(&self, job: &JobPosting, candidate: &CandidateProfile) -> f64 {
        let max = max_salary(job);
        let expected = candidate.expected_salary.unwrap_or(0);
        if expected <= 0 || max <= 0 {
            return NEUTRAL_SCORE;
        }

        let (expected, max) = (expected as f64, max as f64);
        bounded(MAX_SCORE - (expected - max).abs() / max * MAX_SCORE)
    }

    fn score_location(&self, job: &JobPosting, candidate: &CandidateProfile) -> f64 {
        let address = candidate.address.trim().to_lowercase();
        let location = job.location.trim().to_lowercase();

        if address.is_empty() || location.is_empty() {
            NEUTRAL_SCORE
        } else if address.contains(&location) || location.contains(&address) {
            MAX_SCORE
        } else {
            LOCATION_MISMATCH_SCORE
        }
    }

    fn score_qualification(&self, job: &JobPosting, candidate: &CandidateProfile) -> f64 {
        let candidate_level = candidate
            .highest_degree()
            .and_then(|degree| self.config.qualification_level(degree));
        let required_level = self.config.qualification_level(&job.min_qualification);

        match (candidate_level, required_level) {
            (Some(have), Some(need)) if have >= need => MAX_SCORE,
            (Some(have), Some(need)) => {
                let short = (need - have) as f64;
                bounded(MAX_SCORE - short * QUALIFICATION_STEP_PENALTY)
            }
            _ => NEUTRAL_SCORE,
        }
    }
}
