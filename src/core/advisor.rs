use crate::core::analyzer::AnalysisError;
use crate::core::{fallback, parser::parse_sections};
use crate::models::{Analysis, FreelancerProfile, Sections};
use crate::services::CompletionClient;
use std::sync::Arc;
use tracing::warn;

const SUGGESTIONS_ROLE: &str =
    "You are an expert advisor for GenAI freelancers in the European market.";
const INSIGHTS_ROLE: &str = "You are an expert analyst of the European GenAI market.";
const LEARNING_PATH_ROLE: &str = "You are an expert coach for GenAI developers.";

/// Advisory content generator
///
/// Three independent operations over a freelancer profile: profile
/// suggestions, market insights and a learning path. Each follows the same
/// prompt -> call -> parse pattern and substitutes its own canned payload
/// on any failure; no operation depends on another's result.
pub struct Advisor {
    client: Arc<dyn CompletionClient>,
}

impl Advisor {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generate tailored profile improvement suggestions
    ///
    /// `prior_analysis` enriches the prompt when the caller already ran the
    /// analyzer; an empty payload is substituted otherwise.
    pub async fn profile_suggestions(
        &self,
        profile: &FreelancerProfile,
        prior_analysis: Option<&Analysis>,
    ) -> Analysis {
        let prompt = format!(
            "Review this freelancer profile and the results of its analysis to generate\n\
             highly personalized, actionable suggestions for the European GenAI market:\n\
             \n\
             FREELANCER PROFILE:\n\
             {}\n\
             \n\
             PRIOR ANALYSIS:\n\
             {}\n\
             \n\
             Generate specific, detailed suggestions for the following areas:\n\
             1. Immediate profile improvements (3 suggestions)\n\
             2. Technical skill development (3 suggestions)\n\
             3. Positioning in the European market (3 suggestions)\n\
             4. Pricing strategy for the EU market (2 suggestions)\n\
             5. Portfolio enhancement (3 suggestions)\n\
             \n\
             For each suggestion, provide:\n\
             - The specific action to take\n\
             - A detailed motivation\n\
             - A concrete example or case study\n\
             - A suggested implementation timeline",
            profile_json(profile),
            analysis_json(prior_analysis)
        );

        match self.request_advice(SUGGESTIONS_ROLE, &prompt).await {
            Ok(sections) => Analysis::parsed(sections),
            Err(e) => {
                warn!("Profile suggestions fell back to canned result: {}", e);
                fallback::profile_suggestions()
            }
        }
    }

    /// Generate market insights tailored to the profile's skill set
    pub async fn market_insights(&self, profile: &FreelancerProfile) -> Analysis {
        let prompt = format!(
            "Review this freelancer profile and generate in-depth insights on the European\n\
             GenAI market specific to their skill set:\n\
             \n\
             PROFILE:\n\
             {}\n\
             \n\
             Provide detailed insights on:\n\
             1. Relevant market trends\n\
             2. Emerging opportunities in Europe\n\
             3. Potential market niches\n\
             4. Competitive landscape\n\
             5. Optimal rate card for the EU market\n\
             \n\
             For each insight, include:\n\
             - A detailed description of the trend or opportunity\n\
             - Specific data and statistics where available\n\
             - Concrete examples of companies or projects\n\
             - Practical suggestions to exploit the opportunity",
            profile_json(profile)
        );

        match self.request_advice(INSIGHTS_ROLE, &prompt).await {
            Ok(sections) => Analysis::parsed(sections),
            Err(e) => {
                warn!("Market insights fell back to canned result: {}", e);
                fallback::market_insights()
            }
        }
    }

    /// Generate a personalized learning path
    pub async fn learning_path(
        &self,
        profile: &FreelancerProfile,
        prior_analysis: Option<&Analysis>,
    ) -> Analysis {
        let prompt = format!(
            "Create a detailed, personalized learning path for this freelancer based on\n\
             their profile and skill analysis:\n\
             \n\
             PROFILE:\n\
             {}\n\
             \n\
             ANALYSIS:\n\
             {}\n\
             \n\
             Generate a complete learning plan that includes:\n\
             1. Short-term objectives (1-3 months)\n\
             2. Medium-term objectives (3-6 months)\n\
             3. Long-term objectives (6-12 months)\n\
             4. Specific resources for each objective\n\
             5. Recommended practice projects\n\
             6. Relevant certifications\n\
             7. KPIs to measure progress\n\
             \n\
             For each element of the plan, specify:\n\
             - A detailed description\n\
             - A specific timeline\n\
             - Required resources\n\
             - Expected outcomes\n\
             - How to measure success",
            profile_json(profile),
            analysis_json(prior_analysis)
        );

        match self.request_advice(LEARNING_PATH_ROLE, &prompt).await {
            Ok(sections) => Analysis::parsed(sections),
            Err(e) => {
                warn!("Learning path fell back to canned result: {}", e);
                fallback::learning_path()
            }
        }
    }

    async fn request_advice(
        &self,
        system_role: &str,
        prompt: &str,
    ) -> Result<Sections, AnalysisError> {
        let completion = self.client.complete(system_role, prompt).await?;

        let sections = parse_sections(&completion);
        if sections.is_empty() {
            return Err(AnalysisError::Unstructured);
        }

        Ok(sections)
    }
}

fn profile_json(profile: &FreelancerProfile) -> String {
    serde_json::to_string_pretty(profile).unwrap_or_default()
}

fn analysis_json(analysis: Option<&Analysis>) -> String {
    analysis
        .and_then(|a| serde_json::to_string_pretty(&a.data).ok())
        .unwrap_or_else(|| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LlmError;
    use async_trait::async_trait;

    struct FixedClient(String);

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::ApiError("model unavailable".to_string()))
        }
    }

    fn sample_profile() -> FreelancerProfile {
        FreelancerProfile {
            id: Some("1".to_string()),
            name: Some("Dana".to_string()),
            skills: vec!["prompt engineering".to_string()],
            experience: "3 years in GenAI development".to_string(),
            portfolio: vec![],
            hourly_rate: None,
            availability: None,
        }
    }

    #[tokio::test]
    async fn test_suggestions_parse_completion() {
        let advisor = Advisor::new(Arc::new(FixedClient(
            "Profile improvements:\n- Add quantifiable metrics".to_string(),
        )));

        let analysis = advisor
            .profile_suggestions(&sample_profile(), None)
            .await;

        assert!(!analysis.is_fallback);
        let sections = analysis.sections().unwrap();
        assert_eq!(
            sections["Profile improvements"],
            vec!["Add quantifiable metrics"]
        );
    }

    #[tokio::test]
    async fn test_each_operation_has_its_own_fallback() {
        let advisor = Advisor::new(Arc::new(FailingClient));
        let profile = sample_profile();

        let suggestions = advisor.profile_suggestions(&profile, None).await;
        let insights = advisor.market_insights(&profile).await;
        let path = advisor.learning_path(&profile, None).await;

        assert_eq!(suggestions, fallback::profile_suggestions());
        assert_eq!(insights, fallback::market_insights());
        assert_eq!(path, fallback::learning_path());
    }

    #[tokio::test]
    async fn test_learning_path_falls_back_on_unstructured_reply() {
        let advisor = Advisor::new(Arc::new(FixedClient(
            "keep practicing and you will improve".to_string(),
        )));

        let analysis = advisor.learning_path(&sample_profile(), None).await;

        assert!(analysis.is_fallback);
        assert_eq!(analysis, fallback::learning_path());
    }

    #[test]
    fn test_analysis_json_defaults_to_empty_object() {
        assert_eq!(analysis_json(None), "{}");

        let prior = Analysis::parsed(Sections::new());
        assert_ne!(analysis_json(Some(&prior)), "");
    }
}
