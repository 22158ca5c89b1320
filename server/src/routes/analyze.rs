use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::analyze_handlers::{analyze_site, tone_options};

pub fn analyze_routes() -> Router {
    Router::new()
        .route("/analyze", post(analyze_site))
        .route("/tones", get(tone_options))
}
