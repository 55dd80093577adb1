// Core pipeline exports
pub mod advisor;
pub mod analyzer;
pub mod fallback;
pub mod matcher;
pub mod parser;

pub use advisor::Advisor;
pub use analyzer::{AnalysisError, ProfileAnalyzer};
pub use matcher::Matcher;
pub use parser::parse_sections;
