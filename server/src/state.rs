use copyfix_service_cli::{ai::CopyGenerator, scrape::Scraper, BoxError};
use std::sync::Arc;

/// Visible page text is capped at the first 3000 characters.
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Shared clients, built once at startup. No per-request state survives a
/// request.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<Scraper>,
    pub generator: Arc<CopyGenerator>,
}

impl AppState {
    pub fn new(api_key: String) -> Result<Self, BoxError> {
        Ok(AppState {
            scraper: Arc::new(Scraper::new(MAX_TEXT_LENGTH)?),
            generator: Arc::new(CopyGenerator::new(api_key)),
        })
    }
}
