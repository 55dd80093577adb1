use super::AppState;
use crate::models::{
    AnalyzeProfileRequest, AnalyzeProjectRequest, ErrorResponse, ExecuteMatchRequest,
    HealthResponse, ProjectRequirement,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure analysis and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analysis/profile", web::post().to(analyze_profile))
        .route("/analysis/project", web::post().to(analyze_project))
        .route("/matching/execute", web::post().to(execute_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze a freelancer profile
///
/// POST /api/v1/analysis/profile
///
/// Always returns 200 with an Analysis: call and parse failures are
/// absorbed by the analyzer's fallback, flagged via `is_fallback`.
async fn analyze_profile(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeProfileRequest>,
) -> impl Responder {
    tracing::info!(
        "Analyzing profile with {} skills",
        req.profile.skills.len()
    );

    let analysis = state.analyzer.analyze_profile(&req.profile).await;

    HttpResponse::Ok().json(analysis)
}

/// Analyze project requirements
///
/// POST /api/v1/analysis/project
async fn analyze_project(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeProjectRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let project: ProjectRequirement = req.into_inner().project.into();

    tracing::info!("Analyzing project: {}", project.title);

    let analysis = state.analyzer.analyze_project(&project).await;

    HttpResponse::Ok().json(analysis)
}

/// Execute a freelancer/project match
///
/// POST /api/v1/matching/execute
///
/// Request body:
/// ```json
/// {
///   "freelancer": { "skills": ["..."], "experience": "...", "portfolio": [] },
///   "project": { "title": "...", "description": "...", "required_skills": ["..."] }
/// }
/// ```
async fn execute_match(
    state: web::Data<AppState>,
    req: web::Json<ExecuteMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for execute_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request = req.into_inner();
    let project: ProjectRequirement = request.project.into();

    tracing::info!(
        "Executing match: freelancer with {} skills against project '{}'",
        request.freelancer.skills.len(),
        project.title
    );

    let result = state.matcher.execute_match(&request.freelancer, &project).await;

    tracing::info!(
        "Match executed: score {:.1}, fallback: {}",
        result.match_score,
        result.is_fallback
    );

    HttpResponse::Ok().json(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
