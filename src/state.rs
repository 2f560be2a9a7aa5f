use std::sync::Arc;

use crate::matching::{RankerSettings, Scorer};
use crate::store::MatchStore;

/// Shared state injected into every route handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MatchStore>,
    /// Plain scorer, or the memoizing cache when `SCORE_CACHE` is on.
    pub scorer: Arc<dyn Scorer>,
    pub ranker: RankerSettings,
    pub admin_match_limit: usize,
    /// Hex SHA-256 of the admin bearer token.
    pub admin_token_sha256: Option<String>,
}
