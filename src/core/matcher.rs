use crate::core::analyzer::{AnalysisError, ProfileAnalyzer};
use crate::core::{fallback, parser::parse_sections};
use crate::models::{Analysis, FreelancerProfile, MatchResult, ProjectRequirement, Sections};
use crate::services::CompletionClient;
use std::sync::Arc;
use tracing::{debug, warn};

const MATCH_SPECIALIST_ROLE: &str = "You are an expert AI freelancer-project matcher.";

const MIN_MATCH_SCORE: f64 = 0.0;
const MAX_MATCH_SCORE: f64 = 10.0;

/// Matching orchestrator for (freelancer, project) pairs
///
/// # Pipeline stages
/// 1. Profile analysis and project analysis (independent, run concurrently;
///    each substitutes its own fallback on failure)
/// 2. Compatibility call embedding both analyses (strictly after both)
/// 3. Score and recommendation extraction from the parsed reply
///
/// `execute_match` is total: if the compatibility call or its parse fails,
/// the whole result is the canned fallback regardless of how the
/// sub-analyses fared.
pub struct Matcher {
    analyzer: ProfileAnalyzer,
    client: Arc<dyn CompletionClient>,
}

impl Matcher {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            analyzer: ProfileAnalyzer::new(client.clone()),
            client,
        }
    }

    /// Produce a match result for a freelancer/project pair
    pub async fn execute_match(
        &self,
        freelancer: &FreelancerProfile,
        project: &ProjectRequirement,
    ) -> MatchResult {
        // Independent sub-analyses; the compatibility prompt needs both
        let (profile_analysis, project_analysis) = tokio::join!(
            self.analyzer.analyze_profile(freelancer),
            self.analyzer.analyze_project(project),
        );

        let prompt = build_match_prompt(&profile_analysis, &project_analysis);

        match self.request_compatibility(&prompt).await {
            Ok(sections) => {
                let match_score = extract_match_score(&sections);
                let recommendations = extract_recommendations(&sections);

                debug!(
                    "Match scored {:.1} with {} recommendations",
                    match_score,
                    recommendations.len()
                );

                MatchResult {
                    match_score,
                    analysis: Analysis::parsed(sections),
                    recommendations,
                    is_fallback: false,
                }
            }
            Err(e) => {
                warn!("Match execution fell back to canned result: {}", e);
                fallback::match_result()
            }
        }
    }

    async fn request_compatibility(&self, prompt: &str) -> Result<Sections, AnalysisError> {
        let completion = self.client.complete(MATCH_SPECIALIST_ROLE, prompt).await?;

        let sections = parse_sections(&completion);
        if sections.is_empty() {
            return Err(AnalysisError::Unstructured);
        }

        Ok(sections)
    }
}

fn build_match_prompt(profile_analysis: &Analysis, project_analysis: &Analysis) -> String {
    let profile_json = serde_json::to_string_pretty(&profile_analysis.data).unwrap_or_default();
    let project_json = serde_json::to_string_pretty(&project_analysis.data).unwrap_or_default();

    format!(
        "Analyze the compatibility between this freelancer and project:\n\
         \n\
         Freelancer Analysis:\n\
         {}\n\
         \n\
         Project Analysis:\n\
         {}\n\
         \n\
         Provide:\n\
         1. Overall match score (0-10)\n\
         2. Compatibility breakdown\n\
         3. Specific recommendations\n\
         4. Risk factors\n\
         5. Success probability",
        profile_json, project_json
    )
}

/// Normalize a section key for lookup: lowercase, alphanumeric runs joined
/// by single underscores ("3. Specific recommendations" ->
/// "3_specific_recommendations").
fn normalize_key(key: &str) -> String {
    let mut normalized = String::with_capacity(key.len());
    let mut last_was_sep = true;

    for ch in key.chars() {
        if ch.is_alphanumeric() {
            normalized.extend(ch.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            normalized.push('_');
            last_was_sep = true;
        }
    }

    normalized.trim_end_matches('_').to_string()
}

/// Extract the overall match score, clamped to [0, 10]
///
/// Falls back to the fixed default when no score section exists or its
/// first item carries no parsable number.
fn extract_match_score(sections: &Sections) -> f64 {
    let score = sections
        .iter()
        .find(|(key, _)| {
            let n = normalize_key(key);
            n.contains("overall_score") || n.contains("overall_match_score")
        })
        .and_then(|(_, items)| items.first())
        .and_then(|item| extract_leading_number(item));

    match score {
        Some(value) => value.clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE),
        None => fallback::DEFAULT_MATCH_SCORE,
    }
}

/// Extract recommendations, falling back to the fixed generic next steps
fn extract_recommendations(sections: &Sections) -> Vec<String> {
    sections
        .iter()
        .find(|(key, items)| normalize_key(key).contains("recommendation") && !items.is_empty())
        .map(|(_, items)| items.clone())
        .unwrap_or_else(fallback::default_recommendations)
}

/// First numeric token in the text ("8.5 out of 10" -> 8.5)
fn extract_leading_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let number: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    number.trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_from(pairs: &[(&str, &[&str])]) -> Sections {
        let mut sections = Sections::new();
        for (key, items) in pairs {
            sections.insert(
                key.to_string(),
                items.iter().map(|s| s.to_string()).collect(),
            );
        }
        sections
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Overall Score"), "overall_score");
        assert_eq!(
            normalize_key("3. Specific recommendations"),
            "3_specific_recommendations"
        );
        assert_eq!(normalize_key("overall_score"), "overall_score");
        assert_eq!(
            normalize_key("1. Overall match score (0-10)"),
            "1_overall_match_score_0_10"
        );
    }

    #[test]
    fn test_extract_match_score() {
        let sections = sections_from(&[("Overall score", &["8.5 out of 10"])]);
        assert_eq!(extract_match_score(&sections), 8.5);
    }

    #[test]
    fn test_extract_match_score_clamps_range() {
        let sections = sections_from(&[("Overall score", &["15"])]);
        assert_eq!(extract_match_score(&sections), 10.0);
    }

    #[test]
    fn test_extract_match_score_defaults() {
        let sections = sections_from(&[("Compatibility breakdown", &["strong skill overlap"])]);
        assert_eq!(extract_match_score(&sections), 7.5);

        // Score section exists but carries no number
        let sections = sections_from(&[("Overall score", &["excellent"])]);
        assert_eq!(extract_match_score(&sections), 7.5);
    }

    #[test]
    fn test_extract_recommendations() {
        let sections = sections_from(&[(
            "3. Specific recommendations",
            &["Pair program for a day", "Check references"],
        )]);

        let recommendations = extract_recommendations(&sections);
        assert_eq!(
            recommendations,
            vec!["Pair program for a day", "Check references"]
        );
    }

    #[test]
    fn test_extract_recommendations_defaults() {
        let sections = sections_from(&[("Risk factors", &["tight timeline"])]);

        let recommendations = extract_recommendations(&sections);
        assert_eq!(recommendations, fallback::default_recommendations());
    }

    #[test]
    fn test_extract_leading_number() {
        assert_eq!(extract_leading_number("8.5 out of 10"), Some(8.5));
        assert_eq!(extract_leading_number("score: 7"), Some(7.0));
        assert_eq!(extract_leading_number("no digits here"), None);
        assert_eq!(extract_leading_number("9."), Some(9.0));
    }

    #[test]
    fn test_match_prompt_embeds_both_analyses() {
        let profile = Analysis::parsed(sections_from(&[("Strengths", &["RAG expertise"])]));
        let project = Analysis::parsed(sections_from(&[("Core skills", &["llm development"])]));

        let prompt = build_match_prompt(&profile, &project);

        assert!(prompt.contains("RAG expertise"));
        assert!(prompt.contains("llm development"));
        assert!(prompt.contains("Overall match score (0-10)"));
    }
}
