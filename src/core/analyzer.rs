use crate::core::{fallback, parser::parse_sections};
use crate::models::{Analysis, FreelancerProfile, ProjectRequirement, Sections};
use crate::services::{CompletionClient, LlmError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Internal failure modes of one analysis pass
///
/// Never crosses a component boundary: public methods map every variant to
/// the operation's canned fallback.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("completion request failed: {0}")]
    Call(#[from] LlmError),

    #[error("completion did not match the expected section/bullet shape")]
    Unstructured,
}

const PROFILE_ANALYST_ROLE: &str = "You are an expert AI freelancer profile analyzer.";
const PROJECT_ANALYST_ROLE: &str = "You are an expert project requirements analyzer.";

/// Analyzer for freelancer profiles and project requirements
///
/// Renders a fixed prompt from the record, issues one completion request
/// and parses the reply into sections. Both operations are total: a failed
/// call or an unparsable reply yields the type-specific canned analysis.
pub struct ProfileAnalyzer {
    client: Arc<dyn CompletionClient>,
}

impl ProfileAnalyzer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Analyze a freelancer profile
    pub async fn analyze_profile(&self, profile: &FreelancerProfile) -> Analysis {
        let prompt = build_profile_prompt(profile);

        match self.request_analysis(PROFILE_ANALYST_ROLE, &prompt).await {
            Ok(sections) => Analysis::parsed(sections),
            Err(e) => {
                warn!("Profile analysis fell back to canned result: {}", e);
                fallback::profile_analysis()
            }
        }
    }

    /// Analyze project requirements
    pub async fn analyze_project(&self, project: &ProjectRequirement) -> Analysis {
        let prompt = build_project_prompt(project);

        match self.request_analysis(PROJECT_ANALYST_ROLE, &prompt).await {
            Ok(sections) => Analysis::parsed(sections),
            Err(e) => {
                warn!("Project analysis fell back to canned result: {}", e);
                fallback::project_analysis()
            }
        }
    }

    async fn request_analysis(
        &self,
        system_role: &str,
        prompt: &str,
    ) -> Result<Sections, AnalysisError> {
        let completion = self.client.complete(system_role, prompt).await?;

        let sections = parse_sections(&completion);
        if sections.is_empty() {
            return Err(AnalysisError::Unstructured);
        }

        debug!("Parsed completion into {} sections", sections.len());

        Ok(sections)
    }
}

fn build_profile_prompt(profile: &FreelancerProfile) -> String {
    let skills = serde_json::to_string(&profile.skills).unwrap_or_default();
    let portfolio = serde_json::to_string(&profile.portfolio).unwrap_or_default();

    format!(
        "Analyze this AI/ML freelancer profile in detail:\n\
         \n\
         Skills: {}\n\
         Experience: {}\n\
         Portfolio: {}\n\
         \n\
         Provide a structured analysis of:\n\
         1. Technical expertise level (1-10) in each skill\n\
         2. Project relevance score (1-10)\n\
         3. Communication skills assessment\n\
         4. Red flags or concerns\n\
         5. Unique strengths",
        skills, profile.experience, portfolio
    )
}

fn build_project_prompt(project: &ProjectRequirement) -> String {
    let required_skills = serde_json::to_string(&project.required_skills).unwrap_or_default();

    format!(
        "Analyze these project requirements in detail:\n\
         \n\
         Description: {}\n\
         Required Skills: {}\n\
         Timeline: {}\n\
         Budget: {}\n\
         \n\
         Provide a structured analysis of:\n\
         1. Core skills needed\n\
         2. Project complexity (1-10)\n\
         3. Time estimation accuracy\n\
         4. Budget adequacy\n\
         5. Potential challenges",
        project.description,
        required_skills,
        project.timeline.as_deref().unwrap_or(""),
        project.budget.as_deref().unwrap_or("")
    )
}
