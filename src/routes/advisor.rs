use super::AppState;
use crate::models::{AdvisorRequest, MarketInsightsRequest};
use actix_web::{web, HttpResponse, Responder};

/// Configure advisor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/advisor/suggestions", web::post().to(suggestions))
        .route("/advisor/market-insights", web::post().to(market_insights))
        .route("/advisor/learning-path", web::post().to(learning_path));
}

/// Generate profile improvement suggestions
///
/// POST /api/v1/advisor/suggestions
async fn suggestions(
    state: web::Data<AppState>,
    req: web::Json<AdvisorRequest>,
) -> impl Responder {
    tracing::info!(
        "Generating suggestions (prior analysis: {})",
        req.analysis.is_some()
    );

    let analysis = state
        .advisor
        .profile_suggestions(&req.profile, req.analysis.as_ref())
        .await;

    HttpResponse::Ok().json(analysis)
}

/// Generate market insights for a profile
///
/// POST /api/v1/advisor/market-insights
async fn market_insights(
    state: web::Data<AppState>,
    req: web::Json<MarketInsightsRequest>,
) -> impl Responder {
    let analysis = state.advisor.market_insights(&req.profile).await;

    HttpResponse::Ok().json(analysis)
}

/// Generate a personalized learning path
///
/// POST /api/v1/advisor/learning-path
async fn learning_path(
    state: web::Data<AppState>,
    req: web::Json<AdvisorRequest>,
) -> impl Responder {
    let analysis = state
        .advisor
        .learning_path(&req.profile, req.analysis.as_ref())
        .await;

    HttpResponse::Ok().json(analysis)
}
