//! Browser-facing HTTP shell.
//!
//! | Route              | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `GET /`            | capture form (soil photo, sky photo)         |
//! | `POST /advise`     | run the pipeline, render the result page     |
//! | `POST /api/advise` | run the pipeline, answer with JSON           |
//! | `GET /health`      | liveness + version                           |

pub mod page;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub use state::{AppState, SharedState};

/// Build the router.  The upload limit comes from `server.max_upload_mb`.
pub fn router(state: SharedState) -> Router {
    let body_limit = state.config.server.max_upload_bytes();

    Router::new()
        .route("/", get(routes::capture))
        .route("/advise", post(routes::advise))
        .route("/api/advise", post(routes::api_advise))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
