pub mod candidate;
pub mod job_posting;

pub use candidate::{CandidateProfile, DurationValue, ExperienceEntry, Qualification};
pub use job_posting::JobPosting;
