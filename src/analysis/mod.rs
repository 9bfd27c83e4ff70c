pub mod extract;
pub mod handlers;
pub mod reliability;
pub mod source;
pub mod types;

use crate::app_state::AppState;
use axum::{Router, routing::get};

pub use source::SourceIdentity;
pub use types::{AnalysisRequest, AnalysisResults};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/endpoint",
            get(handlers::liveness).post(handlers::analyze),
        )
        .with_state(state)
}
