// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Analysis, AnalysisData, FreelancerProfile, MatchResult, PortfolioItem, ProjectRequirement,
    Sections,
};
pub use requests::{
    AdvisorRequest, AnalyzeProfileRequest, AnalyzeProjectRequest, ExecuteMatchRequest,
    MarketInsightsRequest, ProjectPayload,
};
pub use responses::{ErrorResponse, HealthResponse};
