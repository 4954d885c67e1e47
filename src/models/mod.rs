// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DegreeHeld, DegreeLevel, DegreeRequirement, ExperienceHeld, ExperienceRequirement,
    SeniorityLevel, SkillRecord,
};
pub use requests::{
    EducationMatchRequest, ExperienceMatchRequest, MatchRequest, ResolveTitleRequest,
    SkillMatchRequest,
};
pub use responses::{
    EducationMatch, EducationMatchResult, ErrorResponse, ExperienceComparison, HealthResponse,
    MatchReport, SkillMatch, SkillMatchResult, TitleResolution,
};
