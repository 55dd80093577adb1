//! Maigen Algo - AI-assisted matching service for the Maigen freelancer marketplace
//!
//! This library orchestrates completion calls to a language-model service to
//! analyze freelancer profiles and project requirements, score their
//! compatibility and generate advisory content. The parsing and fallback
//! layer guarantees every operation returns a structured result even when
//! the remote service fails.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{parse_sections, Advisor, Matcher, ProfileAnalyzer};
pub use models::{
    Analysis, AnalysisData, FreelancerProfile, MatchResult, PortfolioItem, ProjectRequirement,
    Sections,
};
pub use services::{CompletionClient, LlmError, OpenAiClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let sections = parse_sections("Skills:\nPython");
        assert_eq!(sections["Skills"], vec!["Python"]);
    }
}
