pub mod admin;
pub mod recommendations;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::auth::require_admin_token;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/jobs/{id}/matches", get(admin::job_matches))
        .route("/candidates/{id}/matches", get(admin::candidate_matches))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_token,
        ));

    let api = Router::new()
        .route(
            "/candidates/{id}/recommendations",
            get(recommendations::for_candidate),
        )
        .route(
            "/jobs/{job_id}/compatibility/{candidate_id}",
            get(recommendations::compatibility),
        )
        .nest("/admin", admin)
        .with_state(state);

    Router::new().nest("/api/v1", api)
}
