use crate::models::{Analysis, MatchResult};
use serde_json::json;

/// Match score substituted when no score can be extracted
pub const DEFAULT_MATCH_SCORE: f64 = 7.5;

/// Generic next steps substituted when the completion carries none
pub fn default_recommendations() -> Vec<String> {
    vec![
        "Schedule technical interview".to_string(),
        "Review portfolio details".to_string(),
        "Discuss project timeline".to_string(),
    ]
}

/// Canned profile analysis
///
/// Fallback payloads are deliberately richer than parsed ones: they carry
/// explicit numeric scores where a parsed completion only has prose. The
/// top-level keys are stable so downstream code can rely on their presence.
pub fn profile_analysis() -> Analysis {
    Analysis::fallback(json!({
        "technical_scores": {
            "prompt_engineering": 8,
            "llm_development": 7,
            "ai_integration": 9
        },
        "project_relevance": 8.5,
        "communication_score": 9,
        "red_flags": [],
        "strengths": ["Strong GenAI background", "Proven track record"]
    }))
}

/// Canned project analysis
pub fn project_analysis() -> Analysis {
    Analysis::fallback(json!({
        "core_skills": ["prompt_engineering", "llm_development"],
        "complexity_score": 7,
        "time_estimation": "Accurate",
        "budget_adequacy": "Sufficient",
        "challenges": ["Complex integration requirements"]
    }))
}

/// Canned match result for total matching failure
pub fn match_result() -> MatchResult {
    MatchResult {
        match_score: DEFAULT_MATCH_SCORE,
        analysis: Analysis::fallback(json!({
            "skill_match": "Good",
            "experience_match": "Adequate",
            "budget_match": "Within range"
        })),
        recommendations: default_recommendations(),
        is_fallback: true,
    }
}

/// Canned profile suggestions
pub fn profile_suggestions() -> Analysis {
    Analysis::fallback(json!({
        "profile_improvements": [
            {
                "action": "Add quantifiable metrics to your projects",
                "reason": "Demonstrates concrete impact",
                "example": "Improved efficiency by 40% using RAG",
                "timeline": "1 week"
            },
            {
                "action": "Create detailed case studies",
                "reason": "Shows process and results",
                "example": "Chatbot implementation for e-commerce",
                "timeline": "2 weeks"
            }
        ],
        "skill_development": [
            {
                "action": "Deepen RAG systems expertise",
                "reason": "High demand in the EU market",
                "example": "Langchain course plus a hands-on project",
                "timeline": "1 month"
            }
        ],
        "market_positioning": [
            {
                "action": "Specialize in a vertical sector",
                "reason": "Differentiation in the market",
                "example": "Focus on FinTech or Healthcare",
                "timeline": "3 months"
            }
        ]
    }))
}

/// Canned market insights
pub fn market_insights() -> Analysis {
    Analysis::fallback(json!({
        "market_trends": [
            {
                "trend": "Growing demand for RAG",
                "description": "Increase in enterprise projects",
                "examples": ["Banking", "Insurance"],
                "action_items": ["Build RAG expertise"]
            }
        ],
        "opportunities": [
            {
                "area": "European SMEs",
                "description": "GenAI adoption on the rise",
                "potential": "High",
                "entry_strategy": "Offer an initial consultancy"
            }
        ]
    }))
}

/// Canned learning path
pub fn learning_path() -> Analysis {
    Analysis::fallback(json!({
        "short_term": {
            "timeline": "1-3 months",
            "objectives": [
                {
                    "title": "RAG Mastery",
                    "resources": ["Langchain course", "Pinecone tutorial"],
                    "project": "Build a RAG system",
                    "kpi": ["Course completed", "Working system"]
                }
            ]
        },
        "medium_term": {
            "timeline": "3-6 months",
            "objectives": [
                {
                    "title": "LLM Fine-tuning",
                    "resources": ["OpenAI docs", "HuggingFace course"],
                    "project": "Custom model",
                    "kpi": ["Model performance metrics"]
                }
            ]
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisData;

    fn top_level_keys(analysis: &Analysis) -> Vec<String> {
        match &analysis.data {
            AnalysisData::Structured(value) => value
                .as_object()
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default(),
            AnalysisData::Sections(sections) => sections.keys().cloned().collect(),
        }
    }

    #[test]
    fn test_profile_fallback_keys() {
        let keys = top_level_keys(&profile_analysis());
        for key in [
            "technical_scores",
            "project_relevance",
            "communication_score",
            "red_flags",
            "strengths",
        ] {
            assert!(keys.contains(&key.to_string()), "missing key {}", key);
        }
    }

    #[test]
    fn test_project_fallback_keys() {
        let keys = top_level_keys(&project_analysis());
        for key in [
            "core_skills",
            "complexity_score",
            "time_estimation",
            "budget_adequacy",
            "challenges",
        ] {
            assert!(keys.contains(&key.to_string()), "missing key {}", key);
        }
    }

    #[test]
    fn test_advisor_fallback_keys() {
        assert!(top_level_keys(&profile_suggestions())
            .iter()
            .any(|k| k == "profile_improvements"));
        assert!(top_level_keys(&market_insights())
            .iter()
            .any(|k| k == "market_trends"));
        assert!(top_level_keys(&learning_path())
            .iter()
            .any(|k| k == "short_term"));
    }

    #[test]
    fn test_match_fallback_shape() {
        let result = match_result();
        assert_eq!(result.match_score, DEFAULT_MATCH_SCORE);
        assert_eq!(result.recommendations.len(), 3);
        assert!(result.is_fallback);
        assert!(result.analysis.is_fallback);
    }
}
