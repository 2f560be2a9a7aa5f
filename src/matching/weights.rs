use serde::{Deserialize, Serialize};

/// Factor weights for the overall compatibility score.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 0.30,
    experience: 0.25,
    qualification: 0.20,
    salary: 0.15,
    location: 0.10,
};

/// Education levels, lowest first. Matching is by substring, first hit wins.
pub const QUALIFICATION_LADDER: [&str; 5] = ["high school", "diploma", "bachelor", "master", "phd"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub qualification: f64,
    pub salary: f64,
    pub location: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.qualification + self.salary + self.location
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Tunables for [`CompatibilityScorer`](super::scorer::CompatibilityScorer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub qualification_ladder: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            qualification_ladder: QUALIFICATION_LADDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScoringConfig {
    /// Position of the first ladder term contained in `text` (case-insensitive).
    pub fn qualification_level(&self, text: &str) -> Option<usize> {
        let text = text.to_lowercase();
        self.qualification_ladder
            .iter()
            .position(|term| text.contains(&term.to_lowercase()))
    }
}
