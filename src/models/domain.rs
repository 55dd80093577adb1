use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed section map: section name -> ordered items.
pub type Sections = BTreeMap<String, Vec<String>>;

/// Portfolio entry on a freelancer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Freelancer profile with skills, experience and portfolio data
///
/// Every field tolerates absence in the incoming JSON: callers may send
/// partial records and the analyzer degrades to empty placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Project requirements submitted to the matching pipeline
///
/// Immutable for the duration of a matching request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequirement {
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

/// Body of an analysis result
///
/// Parsed completions are flat section maps; canned fallback payloads are
/// richer nested structures with explicit numeric scores. Both shapes are
/// part of the public contract, so callers must handle either variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisData {
    Sections(Sections),
    Structured(serde_json::Value),
}

/// Analysis produced by the analyzer, matcher or advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub data: AnalysisData,
    pub is_fallback: bool,
}

impl Analysis {
    /// Analysis parsed from a live completion
    pub fn parsed(sections: Sections) -> Self {
        Self {
            data: AnalysisData::Sections(sections),
            is_fallback: false,
        }
    }

    /// Canned analysis substituted after a call or parse failure
    pub fn fallback(payload: serde_json::Value) -> Self {
        Self {
            data: AnalysisData::Structured(payload),
            is_fallback: true,
        }
    }

    /// Parsed sections, if this analysis came from a live completion
    pub fn sections(&self) -> Option<&Sections> {
        match &self.data {
            AnalysisData::Sections(sections) => Some(sections),
            AnalysisData::Structured(_) => None,
        }
    }
}

/// Compatibility judgement for a (freelancer, project) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    pub analysis: Analysis,
    pub recommendations: Vec<String>,
    pub is_fallback: bool,
}
