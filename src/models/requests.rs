use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    DegreeHeld, DegreeRequirement, ExperienceHeld, ExperienceRequirement, SkillRecord,
};

/// Request to match resume education against job degree requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EducationMatchRequest {
    #[serde(default)]
    #[validate(nested)]
    pub resume: Vec<DegreeHeld>,
    #[serde(default)]
    #[validate(nested)]
    pub job: Vec<DegreeRequirement>,
}

/// Request to match resume skills against job skills
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillMatchRequest {
    #[serde(default)]
    #[validate(nested)]
    pub resume: Vec<SkillRecord>,
    #[serde(default)]
    #[validate(nested)]
    pub job: Vec<SkillRecord>,
}

/// Request to compare resume experience against job experience requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceMatchRequest {
    #[serde(default, alias = "jobRequirements")]
    #[validate(nested)]
    pub job_requirements: Vec<ExperienceRequirement>,
    #[serde(default, alias = "resumeExperiences")]
    #[validate(nested)]
    pub resume_experiences: Vec<ExperienceHeld>,
}

/// Request running any subset of the three facets in one call
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(default)]
    #[validate(nested)]
    pub education: Option<EducationMatchRequest>,
    #[serde(default)]
    #[validate(nested)]
    pub skills: Option<SkillMatchRequest>,
    #[serde(default)]
    #[validate(nested)]
    pub experience: Option<ExperienceMatchRequest>,
}

/// Request to resolve a raw title against the title catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResolveTitleRequest {
    #[validate(length(min = 1))]
    pub title: String,
}
