use crate::models::domain::{Analysis, FreelancerProfile, ProjectRequirement};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze a freelancer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeProfileRequest {
    pub profile: FreelancerProfile,
}

/// Request to analyze project requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeProjectRequest {
    #[validate(nested)]
    pub project: ProjectPayload,
}

/// Request to execute a freelancer/project match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExecuteMatchRequest {
    pub freelancer: FreelancerProfile,
    #[validate(nested)]
    pub project: ProjectPayload,
}

/// Project body with minimal validation at the HTTP edge
///
/// The core tolerates empty fields; routes only reject projects without a
/// title so obviously empty submissions fail fast.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectPayload {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
}

impl From<ProjectPayload> for ProjectRequirement {
    fn from(payload: ProjectPayload) -> Self {
        ProjectRequirement {
            title: payload.title,
            description: payload.description,
            required_skills: payload.required_skills,
            budget: payload.budget,
            timeline: payload.timeline,
        }
    }
}

/// Request for advisor suggestions or a learning path
///
/// `analysis` is the prior profile analysis when the caller has one; the
/// advisor substitutes an empty payload otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorRequest {
    pub profile: FreelancerProfile,
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

/// Request for market insights (profile only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsightsRequest {
    pub profile: FreelancerProfile,
}
