use serde::{Deserialize, Serialize};

use crate::models::domain::{DegreeLevel, SeniorityLevel};

/// Outcome for a single job degree requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMatch {
    pub resume_degree: Option<String>,
    pub resume_major: Option<String>,
    pub job_degree: String,
    pub job_major: Option<String>,
    pub required: bool,
    pub preferred: bool,
    pub degree_level: DegreeLevel,
    pub score: f64,
    pub reason: String,
}

/// Education facet result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMatchResult {
    pub education_match_percentage: f64,
    pub education_matches: Vec<EducationMatch>,
}

/// Outcome for a single job skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub job_skill: String,
    pub resume_skill: Option<String>,
    pub category: String,
    pub score: f64,
    pub reason: String,
}

/// Skill facet result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub match_percentage: f64,
    pub matched_skills: Vec<SkillMatch>,
}

/// Best resume experience found for one job experience requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceComparison {
    pub job_title: String,
    pub resume_title: String,
    pub job_years: u32,
    pub resume_years: f64,
    pub title_match_score: f64,
    pub years_match: bool,
    pub skills_match: Vec<String>,
    pub missing_skills: Vec<String>,
    pub level_match: bool,
    pub overall_match_score: f64,
}

/// Per-facet results for a combined match request; facets not requested are omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<EducationMatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillMatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceComparison>>,
}

/// Catalog lookup result for a raw job title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleResolution {
    pub title: String,
    pub normalized_title: Option<String>,
    pub field: Option<String>,
    pub level: Option<SeniorityLevel>,
    pub score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
