// Route exports
pub mod advisor;
pub mod matching;

use crate::core::{Advisor, Matcher, ProfileAnalyzer};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Components are self-contained given their inputs; the only shared state
/// is the completion client's connection configuration, read-only after
/// construction, so concurrent requests are independent.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ProfileAnalyzer>,
    pub matcher: Arc<Matcher>,
    pub advisor: Arc<Advisor>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matching::configure)
            .configure(advisor::configure),
    );
}
