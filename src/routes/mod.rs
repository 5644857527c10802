pub mod contact;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/api/contact", post(contact::submit))
}

/// Liveness probe. Answers regardless of database or SMTP health.
async fn root() -> &'static str {
    "Backend server is running!"
}
