use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Academic degree level attached to a job requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    Phd,
    Master,
    Bachelor,
    Associate,
    #[default]
    Unspecified,
}

impl DegreeLevel {
    /// Infer the level from a canonical degree name
    pub fn infer(degree: &str) -> Self {
        let degree = degree.to_lowercase();
        if degree.contains("phd") || degree.contains("doctor") {
            DegreeLevel::Phd
        } else if degree.contains("master") || degree.contains("mba") {
            DegreeLevel::Master
        } else if degree.contains("bachelor") {
            DegreeLevel::Bachelor
        } else if degree.contains("associate") {
            DegreeLevel::Associate
        } else {
            DegreeLevel::Unspecified
        }
    }
}

/// Seniority of a role, ordered from most junior to most senior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorityLevel {
    Junior,
    Staff,
    Senior,
    Lead,
    Principal,
}

/// Degree required (or preferred) by a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DegreeRequirement {
    #[validate(length(min = 1))]
    pub degree: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default)]
    pub degree_level: Option<DegreeLevel>,
}

impl DegreeRequirement {
    /// Declared level, or the level inferred from the degree name
    pub fn level(&self) -> DegreeLevel {
        self.degree_level
            .unwrap_or_else(|| DegreeLevel::infer(&self.degree))
    }
}

/// Degree listed on a resume
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DegreeHeld {
    #[validate(length(min = 1))]
    pub degree: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub start_year: Option<u16>,
    #[serde(default)]
    pub end_year: Option<u16>,
    #[serde(default)]
    pub gpa: Option<f32>,
    #[serde(default)]
    pub honors: Option<String>,
}

/// Skill entry produced by extraction, on either side of the match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillRecord {
    #[validate(length(min = 1))]
    pub normalized_name: String,
    pub original_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_skills: Vec<String>,
}

/// Experience requirement stated in a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceRequirement {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub normalized_title: Option<String>,
    #[serde(default)]
    pub min_years: u32,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub level: Option<SeniorityLevel>,
}

/// Work experience entry listed on a resume
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceHeld {
    #[validate(length(min = 1))]
    pub job_title: String,
    #[serde(default)]
    pub normalized_title: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub duration_years: f64,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub level: Option<SeniorityLevel>,
}
