//! Resume Match - scoring of resumes against job postings
//!
//! This library compares the structured facts extracted from a job posting
//! (degrees, skills, experience requirements) with those extracted from a
//! resume, and reports a per-requirement rationale plus facet percentages.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{EducationMatcher, ExperienceMatcher, SkillMatcher, TitleCatalog};
pub use error::MatchError;
pub use models::{EducationMatchResult, ExperienceComparison, SkillMatchResult};
